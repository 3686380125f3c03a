use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{matches_query, strings, CatalogError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Travel,
    Cashback,
    Airline,
    Hotel,
}

impl Display for CardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Travel => "travel",
            Self::Cashback => "cashback",
            Self::Airline => "airline",
            Self::Hotel => "hotel",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditCard {
    pub id: String,
    pub name: String,
    pub bank: String,
    pub annual_fee: u32,
    pub signup_bonus: u64,
    pub points_per_dollar: u32,
    pub transfer_partners: Vec<String>,
    pub card_type: CardType,
    pub description: String,
    pub bonus_categories: Vec<String>,
    pub min_spend_requirement: Option<u32>,
    pub bonus_timeframe: Option<String>,
}

impl CreditCard {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.bank, self.name)
    }
}

static CREDIT_CARDS: Lazy<Vec<CreditCard>> = Lazy::new(|| {
    vec![
        CreditCard {
            id: "1".to_string(),
            name: "Venture X".to_string(),
            bank: "Capital One".to_string(),
            annual_fee: 395,
            signup_bonus: 100_000,
            points_per_dollar: 2,
            transfer_partners: strings(&["Turkish Airlines", "Air France", "British Airways"]),
            card_type: CardType::Travel,
            description: "Premium travel rewards card with 2x points on all purchases".to_string(),
            bonus_categories: strings(&["All purchases", "Travel", "Hotels"]),
            min_spend_requirement: Some(4_000),
            bonus_timeframe: Some("3 months".to_string()),
        },
        CreditCard {
            id: "2".to_string(),
            name: "Amazon Prime Visa".to_string(),
            bank: "Chase".to_string(),
            annual_fee: 0,
            signup_bonus: 0,
            points_per_dollar: 1,
            transfer_partners: Vec::new(),
            card_type: CardType::Cashback,
            description: "No annual fee card with Amazon benefits".to_string(),
            bonus_categories: strings(&["Amazon", "Whole Foods", "Gas stations"]),
            min_spend_requirement: None,
            bonus_timeframe: None,
        },
        CreditCard {
            id: "3".to_string(),
            name: "Gold Card".to_string(),
            bank: "American Express".to_string(),
            annual_fee: 250,
            signup_bonus: 90_000,
            points_per_dollar: 1,
            transfer_partners: strings(&[
                "Delta",
                "British Airways",
                "Air France",
                "Singapore Airlines",
            ]),
            card_type: CardType::Travel,
            description: "4x points on dining and supermarkets, excellent transfer partners"
                .to_string(),
            bonus_categories: strings(&["Dining", "Supermarkets", "Travel"]),
            min_spend_requirement: Some(6_000),
            bonus_timeframe: Some("6 months".to_string()),
        },
        CreditCard {
            id: "4".to_string(),
            name: "Alaska Airlines Visa".to_string(),
            bank: "Bank of America".to_string(),
            annual_fee: 75,
            signup_bonus: 60_000,
            points_per_dollar: 1,
            transfer_partners: strings(&["Alaska Airlines"]),
            card_type: CardType::Airline,
            description: "Great for West Coast travelers and Alaska/Oneworld partners".to_string(),
            bonus_categories: strings(&["Alaska Airlines", "Gas stations", "EV charging"]),
            min_spend_requirement: Some(2_000),
            bonus_timeframe: Some("90 days".to_string()),
        },
        CreditCard {
            id: "5".to_string(),
            name: "Delta SkyMiles Gold".to_string(),
            bank: "American Express".to_string(),
            annual_fee: 150,
            signup_bonus: 70_000,
            points_per_dollar: 2,
            transfer_partners: strings(&["Delta"]),
            card_type: CardType::Airline,
            description: "Delta co-brand with priority boarding and free checked bags".to_string(),
            bonus_categories: strings(&["Delta purchases", "Dining", "Supermarkets"]),
            min_spend_requirement: Some(3_000),
            bonus_timeframe: Some("3 months".to_string()),
        },
        CreditCard {
            id: "6".to_string(),
            name: "Sapphire Preferred".to_string(),
            bank: "Chase".to_string(),
            annual_fee: 95,
            signup_bonus: 80_000,
            points_per_dollar: 1,
            transfer_partners: strings(&[
                "United",
                "Southwest",
                "British Airways",
                "Air France",
                "Singapore Airlines",
            ]),
            card_type: CardType::Travel,
            description: "Popular travel card with great transfer partners and dining rewards"
                .to_string(),
            bonus_categories: strings(&["Travel", "Dining"]),
            min_spend_requirement: Some(4_000),
            bonus_timeframe: Some("3 months".to_string()),
        },
        CreditCard {
            id: "7".to_string(),
            name: "Platinum Card".to_string(),
            bank: "American Express".to_string(),
            annual_fee: 695,
            signup_bonus: 150_000,
            points_per_dollar: 1,
            transfer_partners: strings(&[
                "Delta",
                "British Airways",
                "Air France",
                "Singapore Airlines",
                "ANA",
            ]),
            card_type: CardType::Travel,
            description: "Premium card with extensive travel benefits and lounge access"
                .to_string(),
            bonus_categories: strings(&["Flights", "Hotels", "Prepaid hotels"]),
            min_spend_requirement: Some(8_000),
            bonus_timeframe: Some("6 months".to_string()),
        },
        CreditCard {
            id: "8".to_string(),
            name: "United Explorer".to_string(),
            bank: "Chase".to_string(),
            annual_fee: 95,
            signup_bonus: 80_000,
            points_per_dollar: 1,
            transfer_partners: strings(&["United"]),
            card_type: CardType::Airline,
            description: "United co-brand with free checked bags and priority boarding"
                .to_string(),
            bonus_categories: strings(&["United purchases", "Dining", "Hotels"]),
            min_spend_requirement: Some(3_000),
            bonus_timeframe: Some("3 months".to_string()),
        },
    ]
});

pub fn credit_cards() -> &'static [CreditCard] {
    &CREDIT_CARDS
}

pub fn credit_card(id: &str) -> Result<&'static CreditCard, CatalogError> {
    CREDIT_CARDS
        .iter()
        .find(|card| card.id == id.trim())
        .ok_or_else(|| CatalogError::UnknownCard(id.to_string()))
}

/// Card browser filter: no minimum length, no cap, empty query returns everything.
pub fn search_credit_cards(query: &str) -> Vec<&'static CreditCard> {
    let needle = query.trim().to_lowercase();
    CREDIT_CARDS
        .iter()
        .filter(|card| {
            matches_query(&card.name, &needle)
                || matches_query(&card.bank, &needle)
                || matches_query(&card.card_type.to_string(), &needle)
                || card
                    .transfer_partners
                    .iter()
                    .any(|partner| matches_query(partner, &needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{credit_card, credit_cards, search_credit_cards};

    #[test]
    fn empty_query_returns_whole_catalog() {
        assert_eq!(search_credit_cards("").len(), credit_cards().len());
    }

    #[test]
    fn searches_banks_types_and_partners() {
        let amex = search_credit_cards("american express");
        assert_eq!(amex.len(), 3);

        let cashback = search_credit_cards("CASHBACK");
        assert_eq!(cashback.len(), 1);
        assert_eq!(cashback[0].name, "Amazon Prime Visa");

        let singapore = search_credit_cards("singapore");
        let ids: Vec<&str> = singapore.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "6", "7"]);
    }

    #[test]
    fn looks_up_cards_by_id() {
        assert_eq!(credit_card("6").unwrap().name, "Sapphire Preferred");
        assert!(credit_card("99").is_err());
    }
}
