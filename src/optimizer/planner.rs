use crate::optimizer::{CardPlan, PointsPlan};
use crate::portfolio::CardAsset;

/// Compares a point target against the pooled card balances, with and without
/// unearned signup bonuses.
pub fn plan_target(target_points: u64, cards: &[CardAsset]) -> PointsPlan {
    let total_available = cards
        .iter()
        .fold(0u64, |sum, card| sum.saturating_add(card.current_points));
    let total_signup_bonuses = cards
        .iter()
        .fold(0u64, |sum, card| sum.saturating_add(card.signup_bonus));
    let potential_total = total_available.saturating_add(total_signup_bonuses);
    let shortfall = target_points.saturating_sub(total_available);
    let shortfall_with_bonuses = target_points.saturating_sub(potential_total);

    let cards = cards
        .iter()
        .map(|card| CardPlan {
            card_id: card.id.clone(),
            card_name: card.name.clone(),
            current_points: card.current_points,
            signup_bonus: card.signup_bonus,
            transfer_partner: card.transfer_partners.first().cloned(),
            spend_needed: spend_needed(card, shortfall_with_bonuses),
        })
        .collect();

    PointsPlan {
        target_points,
        total_available,
        total_signup_bonuses,
        potential_total,
        shortfall,
        shortfall_with_bonuses,
        goal_met: shortfall == 0,
        cards,
    }
}

fn spend_needed(card: &CardAsset, points: u64) -> Option<u64> {
    if points == 0 || card.points_per_dollar == 0 {
        return None;
    }
    Some(points.div_ceil(u64::from(card.points_per_dollar)))
}

#[cfg(test)]
mod tests {
    use super::plan_target;
    use crate::catalog::credit_card;
    use crate::portfolio::CardAsset;

    fn card(id: &str, points: u64) -> CardAsset {
        CardAsset::from_catalog(credit_card(id).unwrap()).with_points(points)
    }

    #[test]
    fn reports_shortfall_before_and_after_bonuses() {
        let cards = vec![card("1", 20_000), card("3", 10_001)];
        let plan = plan_target(250_000, &cards);
        assert_eq!(plan.total_available, 30_001);
        assert_eq!(plan.total_signup_bonuses, 190_000);
        assert_eq!(plan.potential_total, 220_001);
        assert_eq!(plan.shortfall, 219_999);
        assert_eq!(plan.shortfall_with_bonuses, 29_999);
        assert!(!plan.goal_met);

        // Venture X earns 2x: half the points in dollars, rounded up.
        assert_eq!(plan.cards[0].spend_needed, Some(15_000));
        assert_eq!(plan.cards[1].spend_needed, Some(29_999));
        assert_eq!(plan.cards[0].transfer_partner.as_deref(), Some("Turkish Airlines"));
    }

    #[test]
    fn bonuses_can_close_the_gap() {
        let cards = vec![card("6", 100_000)];
        let plan = plan_target(170_000, &cards);
        assert_eq!(plan.shortfall, 70_000);
        assert_eq!(plan.shortfall_with_bonuses, 0);
        assert_eq!(plan.cards[0].spend_needed, None);
    }

    #[test]
    fn goal_met_when_balance_reaches_target() {
        let plan = plan_target(170_000, &[card("7", 170_000)]);
        assert!(plan.goal_met);
        assert_eq!(plan.shortfall, 0);
    }

    #[test]
    fn cards_without_earn_rate_get_no_spend_estimate() {
        let mut zero = card("2", 0);
        zero.points_per_dollar = 0;
        let plan = plan_target(1_000, &[zero]);
        assert_eq!(plan.cards[0].spend_needed, None);
        assert_eq!(plan.cards[0].transfer_partner, None);
    }
}
