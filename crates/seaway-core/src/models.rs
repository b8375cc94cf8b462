//! Core data models for the marine weather and routing system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// Latitude is in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Raw atmospheric snapshot at a point, as reported by the weather source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphericSample {
    pub temperature_c: f64,
    #[serde(default)]
    pub humidity_pct: Option<f64>,
    #[serde(default)]
    pub pressure_hpa: Option<f64>,
    #[serde(default)]
    pub wind_speed_mps: f64,
    #[serde(default)]
    pub wind_direction_deg: Option<f64>,
    /// Metered visibility in meters, when the station reports one.
    #[serde(default)]
    pub visibility_m: Option<f64>,
    /// Condition keywords ("Rain", "Fog", "Clouds", ...).
    #[serde(default)]
    pub conditions: Vec<String>,
    pub observed_at: DateTime<Utc>,
}

/// Derived marine conditions at a point.
///
/// Every field is always populated; when upstream data is missing the
/// producing estimator substitutes heuristic or simulated values rather
/// than leaving holes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarineConditions {
    pub wave_height_m: f64,
    /// Direction waves travel from, degrees [0, 360).
    pub wave_direction_deg: f64,
    pub wave_period_s: f64,
    pub swell_height_m: f64,
    pub swell_direction_deg: f64,
    pub swell_period_s: f64,
    pub sea_surface_temp_c: f64,
    pub visibility_km: f64,
    /// Sea state code, 0 (calm) to 6 (very rough).
    pub sea_state: u8,
    /// Signed height relative to mean sea level.
    pub tide_height_m: f64,
    pub current_speed_kts: f64,
    pub current_direction_deg: f64,
}

/// Provenance of a marine weather record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionsSource {
    /// Derived from a live atmospheric observation.
    Observed,
    /// Fully synthesized after the primary source failed.
    Simulated,
}

/// Marine-conditions-augmented weather record, the unit of output of the
/// estimator. Shape is identical on the observed and simulated paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarineWeather {
    pub coordinates: Coordinates,
    pub atmosphere: AtmosphericSample,
    pub marine: MarineConditions,
    pub source: ConditionsSource,
}

/// Weather risk classification for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherRisk {
    Low,
    Medium,
    High,
}

/// A candidate shipping route between two points.
///
/// Built fresh per optimization request and never mutated afterwards;
/// ranking reorders the route list but does not edit fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    /// Ordered waypoints, at least two (origin and destination).
    pub waypoints: Vec<Coordinates>,
    pub distance_nm: f64,
    pub estimated_duration_h: f64,
    pub weather_risk: WeatherRisk,
    /// Percentage, clamped to [50, 100].
    pub fuel_efficiency_pct: f64,
}

/// Base cruising speed in knots for a vessel class.
///
/// Unknown classes fall back to [`DEFAULT_BASE_SPEED_KTS`].
pub fn vessel_base_speed_kts(vessel_type: &str) -> f64 {
    match vessel_type {
        "cargo" => 14.0,
        "tanker" => 13.0,
        "container" => 18.0,
        "passenger" => 20.0,
        "fishing" => 10.0,
        "naval" => 25.0,
        _ => DEFAULT_BASE_SPEED_KTS,
    }
}

/// Speed assumed for vessel classes not in the lookup table.
pub const DEFAULT_BASE_SPEED_KTS: f64 = 15.0;

/// Vessel class assumed when a request does not specify one.
pub const DEFAULT_VESSEL_TYPE: &str = "cargo";

// ========== MARITIME ALERTS ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Storm,
    Fog,
    Ice,
    Navigation,
    Security,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Bounding area an alert applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertArea {
    pub coordinates: Vec<Coordinates>,
}

/// A maritime hazard notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaritimeAlert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub area: AlertArea,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub issued_by: String,
}

/// A vessel observed near a queried point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub vessel_type: String,
    pub coordinates: Coordinates,
    pub heading_deg: f64,
    pub speed_kts: f64,
    #[serde(default)]
    pub destination: Option<String>,
    pub draft_m: f64,
    pub length_m: f64,
    pub beam_m: f64,
}
