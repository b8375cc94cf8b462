pub mod geodesy;
pub mod heuristics;
pub mod models;
pub mod route_engine;
pub mod simulation;

pub use geodesy::{haversine_km, haversine_nm};
pub use models::{
    AlertArea, AlertKind, AlertSeverity, AtmosphericSample, ConditionsSource, Coordinates,
    MarineConditions, MarineWeather, MaritimeAlert, Route, Ship, WeatherRisk,
};
pub use route_engine::{fallback_routes, generate_routes, rank_routes, route_score, PointSample};
