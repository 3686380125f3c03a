use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{date, Cabin, CatalogError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Good,
    Limited,
    Waitlist,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightRoute {
    pub id: String,
    pub from: String,
    pub to: String,
    pub airline: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub economy_points: u64,
    pub business_points: u64,
    #[serde(default)]
    pub economy_cash: f64,
    #[serde(default)]
    pub business_cash: f64,
    pub availability: Availability,
}

impl FlightRoute {
    pub fn points_required(&self, cabin: Cabin) -> u64 {
        match cabin {
            Cabin::Economy => self.economy_points,
            Cabin::Business => self.business_points,
        }
    }

    pub fn cash_price(&self, cabin: Cabin) -> f64 {
        match cabin {
            Cabin::Economy => self.economy_cash,
            Cabin::Business => self.business_cash,
        }
    }

    /// Redemption value of the award in US cents per point.
    pub fn cents_per_point(&self, cabin: Cabin) -> Option<f64> {
        let points = self.points_required(cabin);
        if points == 0 {
            return None;
        }
        Some(self.cash_price(cabin) / points as f64 * 100.0)
    }

    pub fn label(&self) -> String {
        format!("{} -> {} ({})", self.from, self.to, self.airline)
    }
}

static FLIGHT_ROUTES: Lazy<Vec<FlightRoute>> = Lazy::new(|| {
    vec![
        FlightRoute {
            id: "1".to_string(),
            from: "JFK".to_string(),
            to: "BOM".to_string(),
            airline: "Air France".to_string(),
            date: date(2025, 1, 15),
            return_date: Some(date(2025, 1, 29)),
            economy_points: 85_000,
            business_points: 170_000,
            economy_cash: 1_200.0,
            business_cash: 4_500.0,
            availability: Availability::Good,
        },
        FlightRoute {
            id: "2".to_string(),
            from: "LAX".to_string(),
            to: "DEL".to_string(),
            airline: "Singapore Airlines".to_string(),
            date: date(2025, 1, 12),
            return_date: Some(date(2025, 1, 26)),
            economy_points: 90_000,
            business_points: 160_000,
            economy_cash: 1_350.0,
            business_cash: 5_200.0,
            availability: Availability::Limited,
        },
        FlightRoute {
            id: "3".to_string(),
            from: "ORD".to_string(),
            to: "BLR".to_string(),
            airline: "Turkish Airlines".to_string(),
            date: date(2025, 1, 18),
            return_date: Some(date(2025, 2, 1)),
            economy_points: 75_000,
            business_points: 145_000,
            economy_cash: 1_100.0,
            business_cash: 3_900.0,
            availability: Availability::Good,
        },
        FlightRoute {
            id: "4".to_string(),
            from: "PHL".to_string(),
            to: "COK".to_string(),
            airline: "British Airways".to_string(),
            date: date(2025, 1, 20),
            return_date: Some(date(2025, 2, 3)),
            economy_points: 95_000,
            business_points: 180_000,
            economy_cash: 1_450.0,
            business_cash: 4_800.0,
            availability: Availability::Waitlist,
        },
    ]
});

pub fn flight_routes() -> &'static [FlightRoute] {
    &FLIGHT_ROUTES
}

pub fn flight_route(id: &str) -> Result<&'static FlightRoute, CatalogError> {
    FLIGHT_ROUTES
        .iter()
        .find(|route| route.id == id.trim())
        .ok_or_else(|| CatalogError::UnknownRoute(id.to_string()))
}

/// Keeps routes departing from one of `origins`. An empty origin list keeps everything.
pub fn filter_by_origin<'a>(routes: &'a [FlightRoute], origins: &[String]) -> Vec<&'a FlightRoute> {
    routes
        .iter()
        .filter(|route| {
            origins.is_empty()
                || origins
                    .iter()
                    .any(|origin| origin.trim().eq_ignore_ascii_case(&route.from))
        })
        .collect()
}
