use crate::catalog::{Cabin, FlightRoute};
use crate::coverage::calculator::validate_route;
use crate::coverage::{CoverageError, TransferOption};
use crate::optimizer::{Difficulty, Recommendation, RecommendationKind};

pub const MAX_RECOMMENDATIONS: usize = 3;

const FALLBACK_VALUE: &str = "1.5¢/mile";

struct ProductRule {
    airline: &'static str,
    product: &'static str,
    action: &'static str,
    points_cap: u64,
    estimated_value: &'static str,
    difficulty: Difficulty,
}

const PRODUCT_RULES: &[ProductRule] = &[
    ProductRule {
        airline: "Air France",
        product: "Chase Sapphire Preferred",
        action: "Open and transfer Ultimate Rewards to Flying Blue",
        points_cap: 80_000,
        estimated_value: "2.0¢/point",
        difficulty: Difficulty::Easy,
    },
    ProductRule {
        airline: "Singapore Airlines",
        product: "American Express Platinum Card",
        action: "Open and transfer Membership Rewards to KrisFlyer",
        points_cap: 150_000,
        estimated_value: "1.8¢/point",
        difficulty: Difficulty::Medium,
    },
    ProductRule {
        airline: "Turkish Airlines",
        product: "Capital One Venture X",
        action: "Open and transfer Capital One miles to Miles&Smiles",
        points_cap: 100_000,
        estimated_value: "1.7¢/point",
        difficulty: Difficulty::Easy,
    },
];

/// Miles still missing after pooling every option's current balance.
pub fn aggregate_shortfall(points_needed: u64, options: &[TransferOption]) -> u64 {
    let pooled = options
        .iter()
        .fold(0u64, |sum, option| sum.saturating_add(option.available_points));
    points_needed.saturating_sub(pooled)
}

/// Suggests at most three acquisitions for the route's remaining shortfall:
/// airline-specific products from the rule table, then the airline's own
/// frequent flyer program.
pub fn compute_recommendations(
    route: &FlightRoute,
    cabin: Cabin,
    options: &[TransferOption],
) -> Result<Vec<Recommendation>, CoverageError> {
    validate_route(route)?;
    let shortfall = aggregate_shortfall(route.points_required(cabin), options);
    if shortfall == 0 {
        return Ok(Vec::new());
    }

    let airline = route.airline.trim();
    let mut recommendations = Vec::new();
    for rule in PRODUCT_RULES
        .iter()
        .filter(|rule| rule.airline.eq_ignore_ascii_case(airline))
    {
        recommendations.push(Recommendation {
            priority: recommendations.len() + 1,
            kind: RecommendationKind::CreditCard,
            name: rule.product.to_string(),
            action: rule.action.to_string(),
            points_needed: shortfall.min(rule.points_cap),
            estimated_value: rule.estimated_value.to_string(),
            difficulty: rule.difficulty,
        });
    }

    recommendations.push(Recommendation {
        priority: recommendations.len() + 1,
        kind: RecommendationKind::LoyaltyProgram,
        name: format!("{airline} frequent flyer program"),
        action: format!("Earn {airline} miles directly from flights and partners"),
        points_needed: shortfall,
        estimated_value: FALLBACK_VALUE.to_string(),
        difficulty: Difficulty::Hard,
    });

    recommendations.truncate(MAX_RECOMMENDATIONS);
    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::{aggregate_shortfall, compute_recommendations, MAX_RECOMMENDATIONS};
    use crate::catalog::{credit_card, flight_route, flight_routes, loyalty_program, Cabin};
    use crate::coverage::calculator::compute_options;
    use crate::optimizer::{Difficulty, RecommendationKind};
    use crate::portfolio::{CardAsset, ProgramAsset};

    #[test]
    fn air_france_shortfall_example() {
        let route = flight_route("1").unwrap();
        let cards = vec![CardAsset::from_catalog(credit_card("6").unwrap()).with_points(50_000)];
        let programs = vec![
            ProgramAsset::from_catalog(loyalty_program("air-france-flying-blue").unwrap())
                .with_miles(20_000),
        ];
        let options = compute_options(route, Cabin::Business, &cards, &programs).unwrap();
        assert_eq!(aggregate_shortfall(170_000, &options), 100_000);

        let recs = compute_recommendations(route, Cabin::Business, &options).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].kind, RecommendationKind::CreditCard);
        assert_eq!(recs[0].points_needed, 80_000);
        assert_eq!(recs[0].priority, 1);

        assert_eq!(recs[1].kind, RecommendationKind::LoyaltyProgram);
        assert_eq!(recs[1].name, "Air France frequent flyer program");
        assert_eq!(recs[1].points_needed, 100_000);
        assert_eq!(recs[1].estimated_value, "1.5¢/mile");
        assert_eq!(recs[1].difficulty, Difficulty::Hard);
        assert_eq!(recs[1].priority, 2);
    }

    #[test]
    fn shortfall_below_cap_is_not_inflated() {
        let route = flight_route("3").unwrap();
        let programs = vec![
            ProgramAsset::from_catalog(loyalty_program("turkish-miles-smiles").unwrap())
                .with_miles(70_000),
        ];
        let options = compute_options(route, Cabin::Economy, &[], &programs).unwrap();
        let recs = compute_recommendations(route, Cabin::Economy, &options).unwrap();
        assert_eq!(recs[0].name, "Capital One Venture X");
        assert_eq!(recs[0].points_needed, 5_000);
        assert_eq!(recs[1].points_needed, 5_000);
    }

    #[test]
    fn unlisted_airline_only_gets_fallback() {
        let route = flight_route("4").unwrap();
        let recs = compute_recommendations(route, Cabin::Economy, &[]).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "British Airways frequent flyer program");
        assert_eq!(recs[0].points_needed, 95_000);
    }

    #[test]
    fn covered_route_needs_no_recommendations() {
        let route = flight_route("2").unwrap();
        let cards = vec![CardAsset::from_catalog(credit_card("3").unwrap()).with_points(90_000)];
        let options = compute_options(route, Cabin::Economy, &cards, &[]).unwrap();
        assert!(compute_recommendations(route, Cabin::Economy, &options)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn never_exceeds_three_entries() {
        for route in flight_routes() {
            for cabin in Cabin::ALL {
                let recs = compute_recommendations(route, cabin, &[]).unwrap();
                assert!(recs.len() <= MAX_RECOMMENDATIONS);
                assert_eq!(recs.last().unwrap().kind, RecommendationKind::LoyaltyProgram);
            }
        }
    }

    #[test]
    fn airline_key_ignores_case_and_padding() {
        let mut route = flight_route("2").unwrap().clone();
        route.airline = "  singapore airlines ".to_string();
        let recs = compute_recommendations(&route, Cabin::Business, &[]).unwrap();
        assert_eq!(recs[0].name, "American Express Platinum Card");
        assert_eq!(recs[0].points_needed, 150_000);
        assert_eq!(recs[1].points_needed, 160_000);
    }
}
