pub mod planner;
pub mod recommendations;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CreditCard,
    LoyaltyProgram,
}

/// A card or program to acquire to close the remaining shortfall on a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub priority: usize,
    pub kind: RecommendationKind,
    pub name: String,
    pub action: String,
    pub points_needed: u64,
    pub estimated_value: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardPlan {
    pub card_id: String,
    pub card_name: String,
    pub current_points: u64,
    pub signup_bonus: u64,
    pub transfer_partner: Option<String>,
    /// Dollars of spend on this card alone to earn the post-bonus shortfall.
    pub spend_needed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointsPlan {
    pub target_points: u64,
    pub total_available: u64,
    pub total_signup_bonuses: u64,
    pub potential_total: u64,
    pub shortfall: u64,
    pub shortfall_with_bonuses: u64,
    pub goal_met: bool,
    pub cards: Vec<CardPlan>,
}
