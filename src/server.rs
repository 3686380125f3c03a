use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::catalog::{
    destinations, filter_by_origin, flight_route, flight_routes, search_airports,
    search_credit_cards, search_loyalty_programs, transfer_partners, weather_for, Airport, Cabin,
    CatalogError, CreditCard, Destination, FlightRoute, LoyaltyProgram, TransferPartner,
    WeatherNote,
};
use crate::config::Config;
use crate::coverage::calculator::compute_options;
use crate::coverage::{CoverageError, TransferOption};
use crate::optimizer::planner::plan_target;
use crate::optimizer::recommendations::{aggregate_shortfall, compute_recommendations};
use crate::optimizer::{PointsPlan, Recommendation};
use crate::portfolio::{CardAsset, ProgramAsset};

#[derive(Clone)]
struct ApiState {
    config: Config,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<CoverageError> for ApiError {
    fn from(error: CoverageError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Clone, Default, Deserialize)]
struct RoutesQuery {
    #[serde(default)]
    all: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchQuery {
    query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OptionsRequest {
    route_id: Option<String>,
    route: Option<FlightRoute>,
    cabin: Option<String>,
    #[serde(default)]
    cards: Vec<CardAsset>,
    #[serde(default)]
    programs: Vec<ProgramAsset>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PlanRequest {
    target_points: Option<u64>,
    #[serde(default)]
    cards: Vec<CardAsset>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct OptionsResponse {
    route: FlightRoute,
    cabin: Cabin,
    points_needed: u64,
    shortfall: u64,
    options: Vec<TransferOption>,
    recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
struct PartnerView {
    #[serde(flatten)]
    partner: TransferPartner,
    promotion_active: bool,
}

#[derive(Debug, Serialize)]
struct DestinationView {
    #[serde(flatten)]
    destination: Destination,
    weather: WeatherNote,
}

pub async fn run_server(config: Config, bind: SocketAddr) -> Result<()> {
    let app = router(ApiState { config });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/v1/routes", get(routes))
        .route("/v1/cards", get(cards))
        .route("/v1/programs", get(programs))
        .route("/v1/airports", get(airports))
        .route("/v1/partners", get(partners))
        .route("/v1/destinations", get(destination_guide))
        .route("/v1/options", post(options))
        .route("/v1/plan", post(plan))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn routes(
    State(state): State<ApiState>,
    Query(query): Query<RoutesQuery>,
) -> Json<ApiResponse<Vec<FlightRoute>>> {
    let origins: &[String] = if query.all {
        &[]
    } else {
        &state.config.search.origin_filter
    };
    let routes = filter_by_origin(flight_routes(), origins)
        .into_iter()
        .cloned()
        .collect();
    ok(routes)
}

async fn cards(Query(query): Query<SearchQuery>) -> Json<ApiResponse<Vec<CreditCard>>> {
    let found = search_credit_cards(query.query.as_deref().unwrap_or_default());
    ok(found.into_iter().cloned().collect())
}

async fn programs(Query(query): Query<SearchQuery>) -> Json<ApiResponse<Vec<LoyaltyProgram>>> {
    let found = search_loyalty_programs(query.query.as_deref().unwrap_or_default());
    ok(found.into_iter().cloned().collect())
}

async fn airports(Query(query): Query<SearchQuery>) -> Json<ApiResponse<Vec<Airport>>> {
    let found = search_airports(query.query.as_deref().unwrap_or_default());
    ok(found.into_iter().cloned().collect())
}

async fn partners() -> Json<ApiResponse<Vec<PartnerView>>> {
    let today = chrono::Local::now().date_naive();
    let views = transfer_partners()
        .iter()
        .map(|partner| PartnerView {
            promotion_active: partner.promotion_active(today),
            partner: partner.clone(),
        })
        .collect();
    ok(views)
}

async fn destination_guide() -> Json<ApiResponse<Vec<DestinationView>>> {
    let views = destinations()
        .iter()
        .map(|destination| DestinationView {
            weather: weather_for(&destination.city),
            destination: destination.clone(),
        })
        .collect();
    ok(views)
}

async fn options(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<OptionsRequest>, JsonRejection>,
) -> ApiResult<OptionsResponse> {
    let Json(request) = payload?;
    let route = resolve_route(&request)?;
    let cabin = match request.cabin.as_deref() {
        Some(raw) => Cabin::from_str(raw)?,
        None => state.config.search.default_cabin,
    };
    debug!(
        route = %route.id,
        %cabin,
        cards = request.cards.len(),
        programs = request.programs.len(),
        "computing transfer options"
    );

    let options = compute_options(&route, cabin, &request.cards, &request.programs)?;
    let mut recommendations = compute_recommendations(&route, cabin, &options)?;
    recommendations.truncate(state.config.recommendation_limit());
    let points_needed = route.points_required(cabin);

    Ok(ok(OptionsResponse {
        shortfall: aggregate_shortfall(points_needed, &options),
        points_needed,
        cabin,
        route,
        options,
        recommendations,
    }))
}

async fn plan(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<PlanRequest>, JsonRejection>,
) -> ApiResult<PointsPlan> {
    let Json(request) = payload?;
    let target = request
        .target_points
        .unwrap_or(state.config.optimizer.default_target_points);
    Ok(ok(plan_target(target, &request.cards)))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

fn resolve_route(request: &OptionsRequest) -> std::result::Result<FlightRoute, ApiError> {
    if let Some(route) = &request.route {
        return Ok(route.clone());
    }
    match request.route_id.as_deref() {
        Some(id) => Ok(flight_route(id)?.clone()),
        None => Err(ApiError::bad_request("either route_id or route is required")),
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::Json;

    use super::{
        airports, cards, health, options, plan, programs, routes, ApiState, OptionsRequest,
        PlanRequest, RoutesQuery, SearchQuery,
    };
    use crate::catalog::{credit_card, flight_route, loyalty_program};
    use crate::config::Config;
    use crate::coverage::AssetKind;
    use crate::portfolio::{CardAsset, ProgramAsset};

    fn state() -> State<ApiState> {
        State(ApiState {
            config: Config::default(),
        })
    }

    fn search(query: &str) -> Query<SearchQuery> {
        Query(SearchQuery {
            query: Some(query.to_string()),
        })
    }

    #[test]
    fn health_reports_package_version() {
        let Json(response) = tokio_test::block_on(health());
        assert!(response.ok);
        assert_eq!(response.data.status, "ok");
        assert_eq!(response.data.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn options_by_route_id_includes_recommendations() {
        let request = OptionsRequest {
            route_id: Some("1".to_string()),
            cabin: Some("business".to_string()),
            cards: vec![CardAsset::from_catalog(credit_card("6").unwrap()).with_points(50_000)],
            programs: vec![ProgramAsset::from_catalog(
                loyalty_program("air-france-flying-blue").unwrap(),
            )
            .with_miles(20_000)],
            ..OptionsRequest::default()
        };
        let Json(response) = options(state(), Ok(Json(request))).await.unwrap();
        assert!(response.ok);
        let data = response.data;
        assert_eq!(data.points_needed, 170_000);
        assert_eq!(data.shortfall, 100_000);
        assert_eq!(data.options.len(), 2);
        assert_eq!(data.options[0].asset_kind, AssetKind::Card);
        assert_eq!(data.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn options_fall_back_to_configured_cabin() {
        let request = OptionsRequest {
            route_id: Some("3".to_string()),
            ..OptionsRequest::default()
        };
        let Json(response) = options(state(), Ok(Json(request))).await.unwrap();
        assert_eq!(response.data.points_needed, 145_000);
        assert!(response.data.options.is_empty());
    }

    #[tokio::test]
    async fn options_accept_an_inline_route() {
        let mut route = flight_route("2").unwrap().clone();
        route.airline = "Singapore".to_string();
        let request = OptionsRequest {
            route: Some(route),
            cabin: Some("economy".to_string()),
            cards: vec![
                CardAsset::from_catalog(credit_card("2").unwrap()).with_points(1_000),
                CardAsset::from_catalog(credit_card("3").unwrap()),
            ],
            ..OptionsRequest::default()
        };
        let Json(response) = options(state(), Ok(Json(request))).await.unwrap();
        let data = response.data;
        assert_eq!(data.route.airline, "Singapore");
        assert_eq!(data.options.len(), 2);
        assert_eq!(data.options[0].asset_id, "2");
        assert!(!data.options[0].can_transfer);
        assert!(data.options[1].can_transfer);
    }

    #[tokio::test]
    async fn invalid_requests_are_bad_requests() {
        let missing = options(state(), Ok(Json(OptionsRequest::default()))).await;
        assert_eq!(missing.unwrap_err().status, StatusCode::BAD_REQUEST);

        let unknown = OptionsRequest {
            route_id: Some("99".to_string()),
            ..OptionsRequest::default()
        };
        let err = options(state(), Ok(Json(unknown))).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("99"));

        let mut blank = flight_route("1").unwrap().clone();
        blank.airline = "  ".to_string();
        let request = OptionsRequest {
            route: Some(blank),
            ..OptionsRequest::default()
        };
        let err = options(state(), Ok(Json(request))).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let cabin = OptionsRequest {
            route_id: Some("1".to_string()),
            cabin: Some("first".to_string()),
            ..OptionsRequest::default()
        };
        assert!(options(state(), Ok(Json(cabin))).await.is_err());
    }

    #[test]
    fn negative_balances_do_not_deserialize() {
        let raw = r#"{"route_id":"1","cards":[{"id":"1","name":"x","current_points":-5}]}"#;
        assert!(serde_json::from_str::<OptionsRequest>(raw).is_err());
    }

    #[tokio::test]
    async fn plan_uses_configured_target_by_default() {
        let request = PlanRequest {
            target_points: None,
            cards: vec![CardAsset::from_catalog(credit_card("7").unwrap()).with_points(170_000)],
        };
        let Json(response) = plan(state(), Ok(Json(request))).await.unwrap();
        assert_eq!(response.data.target_points, 170_000);
        assert!(response.data.goal_met);
    }

    #[tokio::test]
    async fn routes_honor_origin_filter() {
        let Json(filtered) = routes(state(), Query(RoutesQuery { all: false })).await;
        let ids: Vec<&str> = filtered.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);

        let Json(all) = routes(state(), Query(RoutesQuery { all: true })).await;
        assert_eq!(all.data.len(), 4);
    }

    #[tokio::test]
    async fn search_endpoints_apply_minimum_length() {
        let Json(found) = airports(search("b")).await;
        assert!(found.data.is_empty());
        let Json(found) = airports(search("bom")).await;
        assert_eq!(found.data[0].code, "BOM");

        let Json(found) = programs(search("sky")).await;
        assert!(found.data.iter().any(|p| p.id == "delta-skymiles"));

        let Json(found) = cards(Query(SearchQuery::default())).await;
        assert_eq!(found.data.len(), 8);
    }
}
