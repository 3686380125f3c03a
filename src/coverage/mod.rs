pub mod aliases;
pub mod calculator;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::portfolio::{CardAsset, ProgramAsset};

/// Every transfer is reported at this ratio, bonus promotions included.
pub const NOMINAL_TRANSFER_RATIO: &str = "1:1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverageError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<CatalogError> for CoverageError {
    fn from(value: CatalogError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Card,
    Program,
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Program => write!(f, "program"),
        }
    }
}

/// One owned card or program, viewed as a source of award miles.
#[derive(Debug, Clone, Copy)]
pub enum Asset<'a> {
    Card(&'a CardAsset),
    Program(&'a ProgramAsset),
}

impl<'a> Asset<'a> {
    pub fn kind(&self) -> AssetKind {
        match self {
            Self::Card(_) => AssetKind::Card,
            Self::Program(_) => AssetKind::Program,
        }
    }

    pub fn id(&self) -> &'a str {
        match self {
            Self::Card(card) => &card.id,
            Self::Program(program) => &program.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Card(card) => &card.name,
            Self::Program(program) => &program.name,
        }
    }

    pub fn balance(&self) -> u64 {
        match self {
            Self::Card(card) => card.current_points,
            Self::Program(program) => program.current_miles,
        }
    }

    /// Programs have no signup bonus.
    pub fn signup_bonus(&self) -> u64 {
        match self {
            Self::Card(card) => card.signup_bonus,
            Self::Program(_) => 0,
        }
    }

    pub fn transfers_to(&self, airline: &str) -> bool {
        match self {
            Self::Card(card) => card
                .transfer_partners
                .iter()
                .any(|partner| aliases::card_partner_matches(airline, partner)),
            Self::Program(program) => {
                aliases::names_overlap(&program.airline, airline)
                    || program
                        .partners
                        .iter()
                        .any(|partner| aliases::names_overlap(partner, airline))
            }
        }
    }
}

/// Shortfall and affordability of one balance against a cabin's award price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub shortfall: u64,
    pub can_afford_now: bool,
    pub can_afford_with_bonus: bool,
    pub percentage: f64,
}

impl Coverage {
    pub fn of(available: u64, bonus: u64, needed: u64) -> Self {
        let potential = available.saturating_add(bonus);
        let percentage = if needed == 0 {
            100.0
        } else {
            (available as f64 / needed as f64 * 100.0).min(100.0)
        };
        Self {
            shortfall: needed.saturating_sub(available),
            can_afford_now: available >= needed,
            can_afford_with_bonus: potential >= needed,
            percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferOption {
    pub asset_kind: AssetKind,
    pub asset_id: String,
    pub asset_name: String,
    pub can_transfer: bool,
    pub available_points: u64,
    pub total_potential_points: u64,
    pub points_needed: u64,
    pub points_shortfall: u64,
    pub can_afford_now: bool,
    pub can_afford_with_bonus: bool,
    pub coverage_percentage: f64,
    pub transfer_ratio: String,
}
