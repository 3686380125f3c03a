pub mod store;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    credit_card, flight_route, loyalty_program, Alliance, CatalogError, CreditCard,
    LoyaltyProgram,
};

/// A credit card the user holds. `signup_bonus` is not part of the balance until
/// its spend requirement is met outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardAsset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub current_points: u64,
    #[serde(default)]
    pub signup_bonus: u64,
    #[serde(default)]
    pub transfer_partners: Vec<String>,
    #[serde(default = "default_points_per_dollar")]
    pub points_per_dollar: u32,
}

impl CardAsset {
    pub fn from_catalog(card: &CreditCard) -> Self {
        Self {
            id: card.id.clone(),
            name: card.display_name(),
            current_points: 0,
            signup_bonus: card.signup_bonus,
            transfer_partners: card.transfer_partners.clone(),
            points_per_dollar: card.points_per_dollar,
        }
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.current_points = points;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramAsset {
    pub id: String,
    pub name: String,
    pub airline: String,
    #[serde(default)]
    pub current_miles: u64,
    #[serde(default = "default_alliance")]
    pub alliance: Alliance,
    #[serde(default)]
    pub partners: Vec<String>,
}

impl ProgramAsset {
    pub fn from_catalog(program: &LoyaltyProgram) -> Self {
        Self {
            id: program.id.clone(),
            name: program.name.clone(),
            airline: program.airline.clone(),
            current_miles: 0,
            alliance: program.alliance,
            partners: program.partners.clone(),
        }
    }

    pub fn with_miles(mut self, miles: u64) -> Self {
        self.current_miles = miles;
        self
    }
}

/// The user's owned cards and programs, plus bookmarked catalog ids. Owned by
/// the caller and handed to the calculator per query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    #[serde(default)]
    pub cards: Vec<CardAsset>,
    #[serde(default)]
    pub programs: Vec<ProgramAsset>,
    #[serde(default)]
    pub saved_cards: Vec<String>,
    #[serde(default)]
    pub saved_programs: Vec<String>,
    #[serde(default)]
    pub saved_flights: Vec<String>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.programs.is_empty()
    }

    /// Adds a catalog card. Returns false when the card is already owned.
    pub fn add_card(&mut self, card: &CreditCard) -> bool {
        if self.cards.iter().any(|owned| owned.id == card.id) {
            return false;
        }
        self.cards.push(CardAsset::from_catalog(card));
        true
    }

    pub fn add_program(&mut self, program: &LoyaltyProgram) -> bool {
        if self.programs.iter().any(|owned| owned.id == program.id) {
            return false;
        }
        self.programs.push(ProgramAsset::from_catalog(program));
        true
    }

    pub fn remove_card(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    pub fn remove_program(&mut self, id: &str) -> bool {
        let before = self.programs.len();
        self.programs.retain(|program| program.id != id);
        self.programs.len() != before
    }

    pub fn set_card_points(&mut self, id: &str, points: u64) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.current_points = points;
                true
            }
            None => false,
        }
    }

    pub fn set_program_miles(&mut self, id: &str, miles: u64) -> bool {
        match self.programs.iter_mut().find(|program| program.id == id) {
            Some(program) => {
                program.current_miles = miles;
                true
            }
            None => false,
        }
    }

    /// Bookmarks a catalog card, or removes the bookmark if already saved.
    /// Returns whether the card is saved afterwards.
    pub fn toggle_saved_card(&mut self, id: &str) -> Result<bool, CatalogError> {
        let card = credit_card(id)?;
        Ok(toggle(&mut self.saved_cards, &card.id))
    }

    pub fn toggle_saved_program(&mut self, id: &str) -> Result<bool, CatalogError> {
        let program = loyalty_program(id)?;
        Ok(toggle(&mut self.saved_programs, &program.id))
    }

    pub fn toggle_saved_flight(&mut self, id: &str) -> Result<bool, CatalogError> {
        let route = flight_route(id)?;
        Ok(toggle(&mut self.saved_flights, &route.id))
    }

    pub fn is_flight_saved(&self, id: &str) -> bool {
        self.saved_flights.iter().any(|saved| saved == id)
    }

    pub fn total_card_points(&self) -> u64 {
        self.cards.iter().map(|card| card.current_points).sum()
    }

    pub fn total_program_miles(&self) -> u64 {
        self.programs.iter().map(|program| program.current_miles).sum()
    }
}

fn toggle(saved: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = saved.iter().position(|existing| existing == id) {
        saved.remove(pos);
        false
    } else {
        saved.push(id.to_string());
        true
    }
}

fn default_points_per_dollar() -> u32 {
    1
}

fn default_alliance() -> Alliance {
    Alliance::None
}
