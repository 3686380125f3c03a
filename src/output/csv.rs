use anyhow::Result;

use crate::catalog::{Cabin, FlightRoute};
use crate::coverage::TransferOption;
use crate::optimizer::Recommendation;

pub fn options_to_csv(options: &[TransferOption]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "asset_kind",
        "asset_id",
        "asset_name",
        "can_transfer",
        "available_points",
        "total_potential_points",
        "points_needed",
        "points_shortfall",
        "coverage_percentage",
        "can_afford_now",
        "can_afford_with_bonus",
        "transfer_ratio",
    ])?;
    for option in options {
        writer.write_record([
            option.asset_kind.to_string(),
            option.asset_id.clone(),
            option.asset_name.clone(),
            option.can_transfer.to_string(),
            option.available_points.to_string(),
            option.total_potential_points.to_string(),
            option.points_needed.to_string(),
            option.points_shortfall.to_string(),
            format!("{:.2}", option.coverage_percentage),
            option.can_afford_now.to_string(),
            option.can_afford_with_bonus.to_string(),
            option.transfer_ratio.clone(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn recommendations_to_csv(items: &[Recommendation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "priority",
        "kind",
        "name",
        "points_needed",
        "estimated_value",
        "difficulty",
    ])?;
    for item in items {
        writer.write_record([
            item.priority.to_string(),
            format!("{:?}", item.kind).to_lowercase(),
            item.name.clone(),
            item.points_needed.to_string(),
            item.estimated_value.clone(),
            item.difficulty.to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn routes_to_csv(routes: &[&FlightRoute], saved: &[String]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "from",
        "to",
        "airline",
        "date",
        "economy_points",
        "business_points",
        "economy_cents_per_point",
        "business_cents_per_point",
        "saved",
    ])?;
    for route in routes {
        let cents = |cabin: Cabin| {
            route
                .cents_per_point(cabin)
                .map(|c| format!("{c:.2}"))
                .unwrap_or_default()
        };
        writer.write_record([
            route.id.clone(),
            route.from.clone(),
            route.to.clone(),
            route.airline.clone(),
            route.date.to_string(),
            route.economy_points.to_string(),
            route.business_points.to_string(),
            cents(Cabin::Economy),
            cents(Cabin::Business),
            saved.iter().any(|id| *id == route.id).to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::routes_to_csv;
    use crate::catalog::flight_route;

    #[test]
    fn routes_csv_includes_redemption_value() {
        let route = flight_route("3").unwrap();
        let csv = routes_to_csv(&[route], &["3".to_string()]).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("id,from,to,airline"));
        assert_eq!(
            lines.next().unwrap(),
            "3,ORD,BLR,Turkish Airlines,2025-01-18,75000,145000,1.47,2.69,true"
        );
    }
}
