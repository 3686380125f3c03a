use chrono::NaiveDate;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::catalog::{
    weather_for, Airport, Cabin, CreditCard, Destination, FlightRoute, LoyaltyProgram,
    TransferPartner,
};
use crate::coverage::TransferOption;
use crate::optimizer::{PointsPlan, Recommendation};
use crate::portfolio::Portfolio;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn yes_no(value: bool) -> Cell {
    if value {
        Cell::new("YES").fg(Color::Green)
    } else {
        Cell::new("NO").fg(Color::Red)
    }
}

fn value_label(route: &FlightRoute, cabin: Cabin) -> String {
    route
        .cents_per_point(cabin)
        .map(|cents| format!("{cents:.2}¢/pt"))
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_routes_table(routes: &[&FlightRoute], saved: &[String]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "Saved",
        "ID",
        "Route",
        "Airline",
        "Date",
        "Economy",
        "Business",
        "Availability",
    ]);
    for route in routes {
        let mark = if saved.iter().any(|id| *id == route.id) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            mark.to_string(),
            route.id.clone(),
            format!("{} -> {}", route.from, route.to),
            route.airline.clone(),
            route.date.to_string(),
            format!(
                "{} pts / ${:.0} ({})",
                route.economy_points,
                route.economy_cash,
                value_label(route, Cabin::Economy)
            ),
            format!(
                "{} pts / ${:.0} ({})",
                route.business_points,
                route.business_cash,
                value_label(route, Cabin::Business)
            ),
            format!("{:?}", route.availability).to_lowercase(),
        ]);
    }
    table.to_string()
}

pub fn render_options_table(route: &FlightRoute, cabin: Cabin, options: &[TransferOption]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "Asset",
        "Kind",
        "Transfers",
        "Available",
        "With Bonus",
        "Shortfall",
        "Coverage",
        "Afford Now",
        "Afford w/ Bonus",
    ]);
    for option in options {
        table.add_row(Row::from(vec![
            Cell::new(&option.asset_name),
            Cell::new(option.asset_kind.to_string()),
            yes_no(option.can_transfer),
            Cell::new(option.available_points.to_string()),
            Cell::new(option.total_potential_points.to_string()),
            Cell::new(option.points_shortfall.to_string()),
            Cell::new(format!("{:.1}%", option.coverage_percentage)),
            yes_no(option.can_afford_now),
            yes_no(option.can_afford_with_bonus),
        ]));
    }
    format!(
        "{} - {} needs {} miles\n{}",
        route.label(),
        cabin,
        route.points_required(cabin),
        table
    )
}

pub fn render_recommendations_table(items: &[Recommendation]) -> String {
    if items.is_empty() {
        return "Goal covered - no recommendations.".to_string();
    }
    let mut table = new_table();
    table.set_header(vec![
        "Priority",
        "Name",
        "Points Needed",
        "Est. Value",
        "Difficulty",
        "Action",
    ]);
    for item in items {
        table.add_row(vec![
            item.priority.to_string(),
            item.name.clone(),
            item.points_needed.to_string(),
            item.estimated_value.clone(),
            item.difficulty.to_string(),
            item.action.clone(),
        ]);
    }
    table.to_string()
}

pub fn render_plan_table(plan: &PointsPlan) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "Card",
        "Points",
        "Signup Bonus",
        "Transfer To",
        "Spend Needed",
    ]);
    for card in &plan.cards {
        table.add_row(vec![
            card.card_name.clone(),
            card.current_points.to_string(),
            card.signup_bonus.to_string(),
            card.transfer_partner
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            card.spend_needed
                .map(|dollars| format!("${dollars}"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    let status = if plan.goal_met {
        "Goal achieved!".to_string()
    } else if plan.shortfall_with_bonuses == 0 {
        format!(
            "Shortfall {} points - enough with signup bonuses",
            plan.shortfall
        )
    } else {
        format!(
            "Shortfall {} points ({} after bonuses)",
            plan.shortfall, plan.shortfall_with_bonuses
        )
    };
    format!(
        "Target {} | available {} | bonuses {} | potential {}\n{}\n{}",
        plan.target_points,
        plan.total_available,
        plan.total_signup_bonuses,
        plan.potential_total,
        table,
        status
    )
}

pub fn render_cards_table(cards: &[&CreditCard]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "ID",
        "Card",
        "Type",
        "Annual Fee",
        "Signup Bonus",
        "Earn",
        "Transfer Partners",
    ]);
    for card in cards {
        table.add_row(vec![
            card.id.clone(),
            card.display_name(),
            card.card_type.to_string(),
            format!("${}", card.annual_fee),
            card.signup_bonus.to_string(),
            format!("{}x", card.points_per_dollar),
            card.transfer_partners.join(", "),
        ]);
    }
    table.to_string()
}

pub fn render_programs_table(programs: &[&LoyaltyProgram]) -> String {
    let mut table = new_table();
    table.set_header(vec!["ID", "Program", "Airline", "Alliance", "Partners"]);
    for program in programs {
        table.add_row(vec![
            program.id.clone(),
            program.name.clone(),
            program.airline.clone(),
            program.alliance.to_string(),
            program.partners.join(", "),
        ]);
    }
    table.to_string()
}

pub fn render_airports_table(airports: &[&Airport]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Code", "Name", "City", "Country"]);
    for airport in airports {
        table.add_row(vec![
            airport.code.clone(),
            airport.name.clone(),
            airport.city.clone(),
            airport.country.clone(),
        ]);
    }
    table.to_string()
}

pub fn render_partners_table(partners: &[TransferPartner], today: NaiveDate) -> String {
    let mut table = new_table();
    table.set_header(vec!["Partner", "Ratio", "Promotion", "Best For"]);
    for partner in partners {
        let promo = match &partner.bonus_promo {
            Some(promo) if partner.promotion_active(today) => {
                format!("{} until {} (ACTIVE)", promo.ratio, promo.end_date)
            }
            Some(promo) => format!("{} ended {}", promo.ratio, promo.end_date),
            None => "-".to_string(),
        };
        table.add_row(vec![
            partner.name.clone(),
            partner.transfer_ratio.clone(),
            promo,
            partner.best_for.join(", "),
        ]);
    }
    table.to_string()
}

pub fn render_destinations_table(destinations: &[Destination]) -> String {
    let mut table = new_table();
    table.set_header(vec!["City", "Airport", "Region", "January", "Highlights"]);
    for destination in destinations {
        let weather = weather_for(&destination.city);
        table.add_row(vec![
            destination.city.clone(),
            destination.airport.clone(),
            destination.region.clone(),
            format!("{} - {}", weather.temperature, weather.description),
            destination.highlights.join(", "),
        ]);
    }
    table.to_string()
}

pub fn render_portfolio_table(portfolio: &Portfolio) -> String {
    if portfolio.is_empty() {
        return "Portfolio is empty. Add a card or program to get started.".to_string();
    }
    let mut table = new_table();
    table.set_header(vec!["Kind", "ID", "Name", "Balance", "Signup Bonus", "Partners"]);
    for card in &portfolio.cards {
        table.add_row(vec![
            "card".to_string(),
            card.id.clone(),
            card.name.clone(),
            card.current_points.to_string(),
            card.signup_bonus.to_string(),
            card.transfer_partners.join(", "),
        ]);
    }
    for program in &portfolio.programs {
        table.add_row(vec![
            "program".to_string(),
            program.id.clone(),
            format!("{} ({})", program.name, program.airline),
            program.current_miles.to_string(),
            "-".to_string(),
            program.partners.join(", "),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_options_table, render_recommendations_table, render_routes_table};
    use crate::catalog::{flight_route, Cabin};

    #[test]
    fn saved_routes_are_marked() {
        let routes = vec![flight_route("1").unwrap(), flight_route("4").unwrap()];
        let rendered = render_routes_table(&routes, &["4".to_string()]);
        let marked: Vec<&str> = rendered.lines().filter(|line| line.contains('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("PHL -> COK"));
    }

    #[test]
    fn options_header_names_route_and_cabin() {
        let route = flight_route("1").unwrap();
        let rendered = render_options_table(route, Cabin::Business, &[]);
        assert!(rendered.starts_with("JFK -> BOM (Air France) - Business needs 170000 miles"));
    }

    #[test]
    fn empty_recommendations_render_a_message() {
        assert_eq!(
            render_recommendations_table(&[]),
            "Goal covered - no recommendations."
        );
    }
}
