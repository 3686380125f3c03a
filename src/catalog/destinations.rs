use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::strings;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub city: String,
    pub country: String,
    pub airport: String,
    pub region: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WeatherNote {
    pub temperature: &'static str,
    pub description: &'static str,
}

static DESTINATIONS: Lazy<Vec<Destination>> = Lazy::new(|| {
    let rows: [(&str, &str, &str, &[&str]); 5] = [
        ("Mumbai", "BOM", "Western India", &["Bollywood", "Gateway of India", "Marine Drive"]),
        ("Delhi", "DEL", "Northern India", &["Red Fort", "India Gate", "Chandni Chowk"]),
        ("Bangalore", "BLR", "Southern India", &["Tech Hub", "Lalbagh Gardens", "Cubbon Park"]),
        ("Kochi", "COK", "Southern India", &["Backwaters", "Fort Kochi", "Spice Markets"]),
        ("Goa", "GOI", "Western India", &["Beaches", "Portuguese Architecture", "Nightlife"]),
    ];
    rows.iter()
        .map(|(city, airport, region, highlights)| Destination {
            city: city.to_string(),
            country: "India".to_string(),
            airport: airport.to_string(),
            region: region.to_string(),
            highlights: strings(highlights),
        })
        .collect()
});

pub fn destinations() -> &'static [Destination] {
    &DESTINATIONS
}

/// January conditions for a destination city.
pub fn weather_for(city: &str) -> WeatherNote {
    let (temperature, description) = match city {
        "Mumbai" => ("77-86°F", "Warm and humid, dry season"),
        "Delhi" => ("45-70°F", "Cool and pleasant, best weather"),
        "Bangalore" => ("60-80°F", "Mild and comfortable"),
        "Kochi" => ("75-88°F", "Warm, tropical, dry season"),
        "Goa" => ("70-90°F", "Perfect beach weather, dry season"),
        _ => ("70-85°F", "Pleasant weather"),
    };
    WeatherNote {
        temperature,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::{destinations, weather_for};

    #[test]
    fn every_destination_has_specific_weather() {
        for destination in destinations() {
            assert_ne!(weather_for(&destination.city).description, "Pleasant weather");
        }
    }

    #[test]
    fn unknown_city_falls_back() {
        let note = weather_for("Chennai");
        assert_eq!(note.temperature, "70-85°F");
        assert_eq!(note.description, "Pleasant weather");
    }
}
