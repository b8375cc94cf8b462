//! REST API routes for the seaway server.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use seaway_core::models::{Coordinates, DEFAULT_VESSEL_TYPE};

use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/marine-weather", get(get_marine_weather))
        .route("/v1/routes", get(get_optimal_routes))
        .route("/v1/alerts", get(get_alerts))
        .route("/v1/ships", get(get_nearby_ships))
}

#[derive(Debug, Deserialize)]
struct PointQuery {
    lat: f64,
    lon: f64,
}

impl PointQuery {
    fn coordinates(&self) -> Result<Coordinates, impl IntoResponse> {
        let point = Coordinates::new(self.lat, self.lon);
        if point.is_valid() {
            Ok(point)
        } else {
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "invalid coordinates"})),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteQuery {
    from_lat: f64,
    from_lon: f64,
    to_lat: f64,
    to_lon: f64,
    #[serde(default)]
    vessel_type: Option<String>,
}

/// GET /v1/marine-weather?lat=..&lon=..
///
/// Total: degraded upstream data comes back as a simulated record, never
/// an error.
async fn get_marine_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PointQuery>,
) -> impl IntoResponse {
    let point = match query.coordinates() {
        Ok(point) => point,
        Err(rejection) => return rejection.into_response(),
    };
    Json(state.estimator.estimate(point).await).into_response()
}

/// GET /v1/routes?from_lat=..&from_lon=..&to_lat=..&to_lon=..&vessel_type=..
async fn get_optimal_routes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> impl IntoResponse {
    let from = Coordinates::new(query.from_lat, query.from_lon);
    let to = Coordinates::new(query.to_lat, query.to_lon);
    if !from.is_valid() || !to.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid coordinates"})),
        )
            .into_response();
    }

    let vessel_type = query
        .vessel_type
        .as_deref()
        .unwrap_or(DEFAULT_VESSEL_TYPE);
    Json(state.planner.optimal_routes(from, to, vessel_type).await).into_response()
}

/// GET /v1/alerts?lat=..&lon=..
async fn get_alerts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PointQuery>,
) -> impl IntoResponse {
    let point = match query.coordinates() {
        Ok(point) => point,
        Err(rejection) => return rejection.into_response(),
    };
    Json(state.alerts.current_alerts(point)).into_response()
}

/// GET /v1/ships?lat=..&lon=..
async fn get_nearby_ships(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PointQuery>,
) -> impl IntoResponse {
    let point = match query.coordinates() {
        Ok(point) => point,
        Err(rejection) => return rejection.into_response(),
    };
    Json(state.alerts.nearby_ships(point)).into_response()
}
