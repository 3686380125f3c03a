use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{date, strings};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    Airline,
    Hotel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusPromo {
    pub ratio: String,
    pub end_date: NaiveDate,
    pub description: String,
}

/// A transfer destination for bank points. The bonus ratio is informational only;
/// coverage math always transfers at 1:1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferPartner {
    pub id: String,
    pub name: String,
    pub partner_type: PartnerType,
    pub transfer_ratio: String,
    pub bonus_promo: Option<BonusPromo>,
    pub description: String,
    pub best_for: Vec<String>,
}

impl TransferPartner {
    pub fn promotion_active(&self, today: NaiveDate) -> bool {
        self.bonus_promo
            .as_ref()
            .map(|promo| promo.end_date > today)
            .unwrap_or(false)
    }
}

static TRANSFER_PARTNERS: Lazy<Vec<TransferPartner>> = Lazy::new(|| {
    vec![
        TransferPartner {
            id: "1".to_string(),
            name: "Singapore Airlines".to_string(),
            partner_type: PartnerType::Airline,
            transfer_ratio: "1:1".to_string(),
            bonus_promo: Some(BonusPromo {
                ratio: "1:1.25".to_string(),
                end_date: date(2025, 3, 31),
                description: "25% bonus on transfers until March 31, 2025".to_string(),
            }),
            description: "Premium Asian carrier with excellent business and first class products"
                .to_string(),
            best_for: strings(&[
                "Premium cabin awards to Asia",
                "Round-the-world tickets",
                "Star Alliance partners",
            ]),
        },
        TransferPartner {
            id: "2".to_string(),
            name: "Air France".to_string(),
            partner_type: PartnerType::Airline,
            transfer_ratio: "1:1".to_string(),
            bonus_promo: None,
            description: "SkyTeam alliance member with good European and African coverage"
                .to_string(),
            best_for: strings(&["Europe flights", "Africa connections", "SkyTeam partners"]),
        },
        TransferPartner {
            id: "3".to_string(),
            name: "British Airways".to_string(),
            partner_type: PartnerType::Airline,
            transfer_ratio: "1:1".to_string(),
            bonus_promo: None,
            description: "Oneworld member with distance-based award chart".to_string(),
            best_for: strings(&["Short-haul flights", "Off-peak awards", "Oneworld partners"]),
        },
        TransferPartner {
            id: "4".to_string(),
            name: "Turkish Airlines".to_string(),
            partner_type: PartnerType::Airline,
            transfer_ratio: "1:1".to_string(),
            // 2025 is not a leap year; the promotion runs through the end of February.
            bonus_promo: Some(BonusPromo {
                ratio: "1:1.6".to_string(),
                end_date: date(2025, 2, 28),
                description: "60% bonus on transfers - limited time offer!".to_string(),
            }),
            description: "Star Alliance member with extensive route network via Istanbul"
                .to_string(),
            best_for: strings(&["Europe to Asia connections", "Middle East", "Africa"]),
        },
        TransferPartner {
            id: "5".to_string(),
            name: "Delta".to_string(),
            partner_type: PartnerType::Airline,
            transfer_ratio: "1:1".to_string(),
            bonus_promo: None,
            description: "Major US carrier with SkyTeam alliance partnerships".to_string(),
            best_for: strings(&[
                "Domestic US flights",
                "SkyTeam partners",
                "Premium cabin upgrades",
            ]),
        },
        TransferPartner {
            id: "6".to_string(),
            name: "United Airlines".to_string(),
            partner_type: PartnerType::Airline,
            transfer_ratio: "1:1".to_string(),
            bonus_promo: None,
            description: "Star Alliance member with extensive domestic and international network"
                .to_string(),
            best_for: strings(&[
                "Star Alliance partners",
                "Domestic US flights",
                "Excursionist perk",
            ]),
        },
    ]
});

pub fn transfer_partners() -> &'static [TransferPartner] {
    &TRANSFER_PARTNERS
}

#[cfg(test)]
mod tests {
    use super::transfer_partners;
    use crate::catalog::date;

    #[test]
    fn promotion_is_active_only_before_end_date() {
        let singapore = &transfer_partners()[0];
        assert!(singapore.promotion_active(date(2025, 3, 30)));
        assert!(!singapore.promotion_active(date(2025, 3, 31)));
        assert!(!singapore.promotion_active(date(2026, 1, 1)));
    }

    #[test]
    fn partners_without_promo_are_never_active() {
        let air_france = &transfer_partners()[1];
        assert!(air_france.bonus_promo.is_none());
        assert!(!air_france.promotion_active(date(2000, 1, 1)));
    }
}
