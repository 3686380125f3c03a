pub mod airports;
pub mod cards;
pub mod destinations;
pub mod partners;
pub mod programs;
pub mod routes;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use airports::{airports, search_airports, Airport};
pub use cards::{credit_card, credit_cards, search_credit_cards, CardType, CreditCard};
pub use destinations::{destinations, weather_for, Destination, WeatherNote};
pub use partners::{transfer_partners, BonusPromo, PartnerType, TransferPartner};
pub use programs::{loyalty_program, loyalty_programs, search_loyalty_programs, LoyaltyProgram};
pub use routes::{filter_by_origin, flight_route, flight_routes, Availability, FlightRoute};

/// Minimum query length before the airport and program searches return anything.
pub const MIN_QUERY_LEN: usize = 2;
/// Result cap for the airport and program searches.
pub const MAX_SEARCH_RESULTS: usize = 10;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown cabin: {0}")]
    UnknownCabin(String),
    #[error("unknown alliance: {0}")]
    UnknownAlliance(String),
    #[error("unknown route id: {0}")]
    UnknownRoute(String),
    #[error("unknown credit card id: {0}")]
    UnknownCard(String),
    #[error("unknown loyalty program id: {0}")]
    UnknownProgram(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    Economy,
    Business,
}

impl Cabin {
    pub const ALL: [Cabin; 2] = [Cabin::Economy, Cabin::Business];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
        }
    }
}

impl Display for Cabin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
        };
        write!(f, "{display}")
    }
}

impl FromStr for Cabin {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "economy" => Ok(Self::Economy),
            "business" => Ok(Self::Business),
            _ => Err(CatalogError::UnknownCabin(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Alliance {
    #[serde(alias = "Oneworld")]
    Oneworld,
    #[serde(alias = "SkyTeam")]
    SkyTeam,
    #[serde(alias = "Star Alliance")]
    StarAlliance,
    #[serde(alias = "None")]
    None,
}

impl Display for Alliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Oneworld => "Oneworld",
            Self::SkyTeam => "SkyTeam",
            Self::StarAlliance => "Star Alliance",
            Self::None => "None",
        };
        write!(f, "{display}")
    }
}

impl FromStr for Alliance {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "oneworld" => Ok(Self::Oneworld),
            "skyteam" => Ok(Self::SkyTeam),
            "staralliance" | "star" => Ok(Self::StarAlliance),
            "none" | "" => Ok(Self::None),
            _ => Err(CatalogError::UnknownAlliance(s.to_string())),
        }
    }
}

/// Calendar date for catalog literals. An impossible date maps to
/// `NaiveDate::MIN`, which the catalog tests reject.
pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    let parsed = NaiveDate::from_ymd_opt(y, m, d);
    debug_assert!(parsed.is_some(), "invalid catalog date {y}-{m:02}-{d:02}");
    parsed.unwrap_or(NaiveDate::MIN)
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn matches_query(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
