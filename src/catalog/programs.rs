use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    matches_query, strings, Alliance, CatalogError, MAX_SEARCH_RESULTS, MIN_QUERY_LEN,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoyaltyProgram {
    pub id: String,
    pub name: String,
    pub airline: String,
    pub alliance: Alliance,
    pub partners: Vec<String>,
    pub description: String,
    pub transfer_ratio: String,
}

fn program(
    id: &str,
    name: &str,
    airline: &str,
    alliance: Alliance,
    partners: &[&str],
    description: &str,
) -> LoyaltyProgram {
    LoyaltyProgram {
        id: id.to_string(),
        name: name.to_string(),
        airline: airline.to_string(),
        alliance,
        partners: strings(partners),
        description: description.to_string(),
        transfer_ratio: "1:1".to_string(),
    }
}

static LOYALTY_PROGRAMS: Lazy<Vec<LoyaltyProgram>> = Lazy::new(|| {
    vec![
        program(
            "alaska-mileage",
            "Mileage Plan",
            "Alaska Airlines",
            Alliance::Oneworld,
            &["British Airways", "American Airlines", "Cathay Pacific", "Japan Airlines", "Qantas"],
            "Alaska Airlines loyalty program with excellent Oneworld partnerships and unique routing rules",
        ),
        program(
            "british-airways-executive",
            "Executive Club",
            "British Airways",
            Alliance::Oneworld,
            &[
                "American Airlines",
                "Alaska Airlines",
                "Cathay Pacific",
                "Japan Airlines",
                "Qantas",
                "Iberia",
            ],
            "British Airways Avios program with distance-based awards and excellent short-haul value",
        ),
        program(
            "delta-skymiles",
            "SkyMiles",
            "Delta Air Lines",
            Alliance::SkyTeam,
            &["Air France", "KLM", "Virgin Atlantic", "Korean Air", "China Eastern"],
            "Delta SkyMiles with SkyTeam alliance and Virgin Atlantic partnership",
        ),
        program(
            "united-mileageplus",
            "MileagePlus",
            "United Airlines",
            Alliance::StarAlliance,
            &["Lufthansa", "Singapore Airlines", "ANA", "Air Canada", "Turkish Airlines"],
            "United MileagePlus with extensive Star Alliance network and Excursionist perk",
        ),
        program(
            "american-aadvantage",
            "AAdvantage",
            "American Airlines",
            Alliance::Oneworld,
            &["British Airways", "Cathay Pacific", "Japan Airlines", "Qantas", "Alaska Airlines"],
            "American Airlines AAdvantage with Oneworld alliance partnerships",
        ),
        program(
            "southwest-rapid-rewards",
            "Rapid Rewards",
            "Southwest Airlines",
            Alliance::None,
            &[],
            "Southwest Rapid Rewards with no blackout dates and companion pass benefits",
        ),
        program(
            "jetblue-trueblue",
            "TrueBlue",
            "JetBlue Airways",
            Alliance::None,
            &["Hawaiian Airlines", "Icelandair"],
            "JetBlue TrueBlue with no blackout dates and family pooling",
        ),
        program(
            "air-france-flying-blue",
            "Flying Blue",
            "Air France-KLM",
            Alliance::SkyTeam,
            &["Delta", "Virgin Atlantic", "Korean Air", "China Eastern"],
            "Air France-KLM Flying Blue with monthly promo awards and SkyTeam access",
        ),
        program(
            "singapore-krisflyer",
            "KrisFlyer",
            "Singapore Airlines",
            Alliance::StarAlliance,
            &["United", "Lufthansa", "ANA", "Air Canada", "Turkish Airlines"],
            "Singapore Airlines KrisFlyer with premium cabin awards and Star Alliance access",
        ),
        program(
            "turkish-miles-smiles",
            "Miles&Smiles",
            "Turkish Airlines",
            Alliance::StarAlliance,
            &["United", "Lufthansa", "Singapore Airlines", "ANA", "Air Canada"],
            "Turkish Airlines Miles&Smiles with excellent award availability and Star Alliance network",
        ),
    ]
});

pub fn loyalty_programs() -> &'static [LoyaltyProgram] {
    &LOYALTY_PROGRAMS
}

pub fn loyalty_program(id: &str) -> Result<&'static LoyaltyProgram, CatalogError> {
    LOYALTY_PROGRAMS
        .iter()
        .find(|program| program.id == id.trim())
        .ok_or_else(|| CatalogError::UnknownProgram(id.to_string()))
}

pub fn search_loyalty_programs(query: &str) -> Vec<&'static LoyaltyProgram> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    LOYALTY_PROGRAMS
        .iter()
        .filter(|program| {
            matches_query(&program.name, &needle)
                || matches_query(&program.airline, &needle)
                || matches_query(&program.alliance.to_string(), &needle)
                || program
                    .partners
                    .iter()
                    .any(|partner| matches_query(partner, &needle))
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
