use std::collections::BTreeSet;

use crate::catalog::{Cabin, FlightRoute};
use crate::coverage::{
    Asset, AssetKind, Coverage, CoverageError, TransferOption, NOMINAL_TRANSFER_RATIO,
};
use crate::portfolio::{CardAsset, ProgramAsset};

/// Scores every owned asset against `route` in `cabin`, best coverage first.
///
/// Cards are evaluated before programs, each in input order; an asset that
/// neither transfers to the route's airline nor holds a balance is left out.
/// Assets repeated in the input (same kind and id) are counted once.
pub fn compute_options(
    route: &FlightRoute,
    cabin: Cabin,
    cards: &[CardAsset],
    programs: &[ProgramAsset],
) -> Result<Vec<TransferOption>, CoverageError> {
    validate_route(route)?;
    let points_needed = route.points_required(cabin);

    let mut seen: BTreeSet<(AssetKind, &str)> = BTreeSet::new();
    let mut options = Vec::with_capacity(cards.len() + programs.len());
    let assets = cards
        .iter()
        .map(Asset::Card)
        .chain(programs.iter().map(Asset::Program));

    for asset in assets {
        if !seen.insert((asset.kind(), asset.id())) {
            continue;
        }
        if let Some(option) = evaluate_asset(asset, &route.airline, points_needed) {
            options.push(option);
        }
    }

    // sort_by is stable: equal coverage keeps encounter order.
    options.sort_by(|a, b| b.coverage_percentage.total_cmp(&a.coverage_percentage));
    Ok(options)
}

pub fn evaluate_asset(asset: Asset<'_>, airline: &str, points_needed: u64) -> Option<TransferOption> {
    let can_transfer = asset.transfers_to(airline);
    let available_points = asset.balance();
    if !can_transfer && available_points == 0 {
        return None;
    }

    let bonus = asset.signup_bonus();
    let coverage = Coverage::of(available_points, bonus, points_needed);
    Some(TransferOption {
        asset_kind: asset.kind(),
        asset_id: asset.id().to_string(),
        asset_name: asset.name().to_string(),
        can_transfer,
        available_points,
        total_potential_points: available_points.saturating_add(bonus),
        points_needed,
        points_shortfall: coverage.shortfall,
        can_afford_now: coverage.can_afford_now,
        can_afford_with_bonus: coverage.can_afford_with_bonus,
        coverage_percentage: coverage.percentage,
        transfer_ratio: NOMINAL_TRANSFER_RATIO.to_string(),
    })
}

pub fn validate_route(route: &FlightRoute) -> Result<(), CoverageError> {
    if route.airline.trim().is_empty() {
        return Err(CoverageError::InvalidArgument(format!(
            "route {} has no operating airline",
            route.id
        )));
    }
    Ok(())
}
