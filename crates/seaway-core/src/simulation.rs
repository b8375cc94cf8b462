//! Bounded pseudo-random synthesis of marine weather records.
//!
//! Used when the primary weather source is unreachable: the estimator
//! must still return a fully populated record, so every field is drawn
//! from a documented range. Callers inject the generator, which keeps
//! the fallback reproducible under a seeded rng.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::heuristics;
use crate::models::{
    AtmosphericSample, Coordinates, ConditionsSource, MarineConditions, MarineWeather,
};

/// Synthesize a full set of marine conditions.
///
/// `air_temp_c` anchors the sea surface temperature when any partial
/// atmospheric data survived the failure; otherwise a coastal-band
/// temperature is drawn.
pub fn simulated_conditions<R: Rng + ?Sized>(
    rng: &mut R,
    point: Coordinates,
    air_temp_c: Option<f64>,
    now_ms: i64,
) -> MarineConditions {
    let sst = match air_temp_c {
        Some(temp) => temp + rng.random_range(-2.0..2.0),
        None => rng.random_range(8.0..24.0),
    };

    MarineConditions {
        wave_height_m: rng.random_range(0.5..4.5),
        wave_direction_deg: rng.random_range(0.0..360.0),
        wave_period_s: rng.random_range(4.0..12.0),
        swell_height_m: rng.random_range(0.3..3.3),
        swell_direction_deg: rng.random_range(0.0..360.0),
        swell_period_s: rng.random_range(8.0..18.0),
        sea_surface_temp_c: sst,
        visibility_km: rng.random_range(5.0..25.0),
        sea_state: rng.random_range(0..=5),
        tide_height_m: heuristics::tide_height_m(point.lat, point.lon, now_ms),
        current_speed_kts: rng.random_range(0.1..2.0),
        current_direction_deg: rng.random_range(0.0..360.0),
    }
}

/// Synthesize a complete marine weather record, atmosphere included.
///
/// Produced when the primary fetch failed outright, so the atmospheric
/// block is plausible filler rather than an observation.
pub fn simulated_weather<R: Rng + ?Sized>(
    rng: &mut R,
    point: Coordinates,
    now: DateTime<Utc>,
) -> MarineWeather {
    let temperature_c = rng.random_range(8.0..24.0);
    let marine = simulated_conditions(rng, point, Some(temperature_c), now.timestamp_millis());

    MarineWeather {
        coordinates: point,
        atmosphere: AtmosphericSample {
            temperature_c,
            humidity_pct: None,
            pressure_hpa: None,
            wind_speed_mps: rng.random_range(0.5..12.0),
            wind_direction_deg: Some(rng.random_range(0.0..360.0)),
            visibility_m: None,
            conditions: Vec::new(),
            observed_at: now,
        },
        marine,
        source: ConditionsSource::Simulated,
    }
}
