use anyhow::Result;
use serde::Serialize;

use crate::catalog::FlightRoute;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A route with the user's bookmark flag alongside its catalog fields.
#[derive(Debug, Serialize)]
pub struct RouteRow<'a> {
    #[serde(flatten)]
    pub route: &'a FlightRoute,
    pub saved: bool,
}

pub fn route_rows<'a>(routes: &[&'a FlightRoute], saved: &[String]) -> Vec<RouteRow<'a>> {
    routes
        .iter()
        .copied()
        .map(|route| RouteRow {
            route,
            saved: saved.iter().any(|id| *id == route.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{render_json, route_rows};
    use crate::catalog::flight_route;

    #[test]
    fn route_rows_carry_saved_flag_beside_route_fields() {
        let routes = vec![flight_route("1").unwrap(), flight_route("4").unwrap()];
        let rows = route_rows(&routes, &["4".to_string()]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&rows).unwrap()).unwrap();
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[0]["saved"], false);
        assert_eq!(value[1]["airline"], "British Airways");
        assert_eq!(value[1]["saved"], true);
    }
}
