use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{matches_query, MAX_SEARCH_RESULTS, MIN_QUERY_LEN};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

const AIRPORT_ROWS: &[(&str, &str, &str, &str)] = &[
    ("JFK", "John F. Kennedy International", "New York", "USA"),
    ("LGA", "LaGuardia Airport", "New York", "USA"),
    ("EWR", "Newark Liberty International", "Newark", "USA"),
    ("PHL", "Philadelphia International", "Philadelphia", "USA"),
    ("LAX", "Los Angeles International", "Los Angeles", "USA"),
    ("SFO", "San Francisco International", "San Francisco", "USA"),
    ("ORD", "Chicago O'Hare International", "Chicago", "USA"),
    ("MDW", "Chicago Midway International", "Chicago", "USA"),
    ("DFW", "Dallas/Fort Worth International", "Dallas", "USA"),
    ("IAH", "George Bush Intercontinental", "Houston", "USA"),
    ("ATL", "Hartsfield-Jackson Atlanta International", "Atlanta", "USA"),
    ("MIA", "Miami International", "Miami", "USA"),
    ("BOS", "Logan International", "Boston", "USA"),
    ("SEA", "Seattle-Tacoma International", "Seattle", "USA"),
    ("DEN", "Denver International", "Denver", "USA"),
    ("LAS", "McCarran International", "Las Vegas", "USA"),
    ("PHX", "Phoenix Sky Harbor International", "Phoenix", "USA"),
    ("DTW", "Detroit Metropolitan Wayne County", "Detroit", "USA"),
    ("MSP", "Minneapolis-St. Paul International", "Minneapolis", "USA"),
    ("CLT", "Charlotte Douglas International", "Charlotte", "USA"),
    ("BOM", "Chhatrapati Shivaji Maharaj International", "Mumbai", "India"),
    ("DEL", "Indira Gandhi International", "Delhi", "India"),
    ("BLR", "Kempegowda International", "Bangalore", "India"),
    ("MAA", "Chennai International", "Chennai", "India"),
    ("HYD", "Rajiv Gandhi International", "Hyderabad", "India"),
    ("CCU", "Netaji Subhas Chandra Bose International", "Kolkata", "India"),
    ("COK", "Cochin International", "Kochi", "India"),
    ("GOI", "Goa International", "Goa", "India"),
    ("AMD", "Sardar Vallabhbhai Patel International", "Ahmedabad", "India"),
    ("PNQ", "Pune Airport", "Pune", "India"),
    ("JAI", "Jaipur International", "Jaipur", "India"),
    ("LKO", "Chaudhary Charan Singh International", "Lucknow", "India"),
    ("IXC", "Chandigarh Airport", "Chandigarh", "India"),
    ("TRV", "Trivandrum International", "Thiruvananthapuram", "India"),
    ("IXM", "Madurai Airport", "Madurai", "India"),
];

static AIRPORTS: Lazy<Vec<Airport>> = Lazy::new(|| {
    AIRPORT_ROWS
        .iter()
        .map(|(code, name, city, country)| Airport {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        })
        .collect()
});

pub fn airports() -> &'static [Airport] {
    &AIRPORTS
}

pub fn search_airports(query: &str) -> Vec<&'static Airport> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    AIRPORTS
        .iter()
        .filter(|airport| {
            matches_query(&airport.code, &needle)
                || matches_query(&airport.name, &needle)
                || matches_query(&airport.city, &needle)
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::search_airports;

    #[test]
    fn requires_two_characters() {
        assert!(search_airports("J").is_empty());
        assert!(!search_airports("JF").is_empty());
    }

    #[test]
    fn matches_code_name_and_city() {
        let chicago = search_airports("chicago");
        let codes: Vec<&str> = chicago.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["ORD", "MDW"]);

        let mumbai = search_airports("bom");
        assert_eq!(mumbai.len(), 1);
        assert_eq!(mumbai[0].city, "Mumbai");
    }

    #[test]
    fn caps_results_at_ten() {
        assert_eq!(search_airports("international").len(), 10);
    }
}
