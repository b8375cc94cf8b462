//! Marine conditions estimator.
//!
//! Orchestrates the primary weather fetch, best-effort secondary
//! enrichment and heuristic fusion. The public [`estimate`] never
//! fails: when the primary source is down the record is fully
//! synthesized instead.
//!
//! [`estimate`]: MarineConditionsEstimator::estimate

use std::sync::Mutex;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seaway_core::heuristics;
use seaway_core::models::{
    AtmosphericSample, ConditionsSource, Coordinates, MarineConditions, MarineWeather,
};
use seaway_core::simulation;

use crate::error::SourceError;
use crate::forecast::{ForecastDocument, MarineForecastSource};
use crate::weather::WeatherSource;

/// Derives marine conditions from injected weather and forecast sources.
///
/// The generator drives the simulation fallback and the
/// unknown-direction draws; seed it for reproducible output.
pub struct MarineConditionsEstimator<W, F> {
    weather: W,
    forecast: F,
    rng: Mutex<StdRng>,
}

impl<W, F> MarineConditionsEstimator<W, F>
where
    W: WeatherSource,
    F: MarineForecastSource,
{
    pub fn new(weather: W, forecast: F) -> Self {
        Self {
            weather,
            forecast,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Estimator with a fixed seed, for deterministic fallback output.
    pub fn with_seed(weather: W, forecast: F, seed: u64) -> Self {
        Self {
            weather,
            forecast,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Estimate marine conditions at a point. Total: all upstream
    /// failures are absorbed into a simulated record.
    pub async fn estimate(&self, point: Coordinates) -> MarineWeather {
        match self.fetch_observed(point).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(
                    lat = point.lat,
                    lon = point.lon,
                    error = %err,
                    "primary weather fetch failed, synthesizing marine conditions"
                );
                let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
                simulation::simulated_weather(&mut *rng, point, Utc::now())
            }
        }
    }

    /// Fetch and fuse live data, failing when the primary source does.
    ///
    /// The route planner uses this variant so that a dead primary source
    /// is observable per sample point; UI-facing callers want
    /// [`estimate`](Self::estimate) instead.
    pub async fn fetch_observed(&self, point: Coordinates) -> Result<MarineWeather, SourceError> {
        // Both requests go out together; the secondary outcome is only
        // consulted once the primary has succeeded, and is discarded
        // otherwise. No retries on either branch.
        let (primary, secondary) = tokio::join!(
            self.weather.fetch_current(point),
            self.forecast.fetch_forecast(point)
        );

        let sample = primary?;
        Ok(self.fuse(point, sample, secondary))
    }

    /// Derive the full marine block from an atmospheric sample, letting
    /// a parseable forecast wave height override the heuristic estimate
    /// for that one field.
    fn fuse(
        &self,
        point: Coordinates,
        sample: AtmosphericSample,
        forecast: Option<ForecastDocument>,
    ) -> MarineWeather {
        let wind = sample.wind_speed_mps;
        let estimated_wave_m = heuristics::estimated_wave_height_m(wind);
        let wave_height_m = forecast
            .as_ref()
            .and_then(|doc| doc.wave_height_m())
            .unwrap_or(estimated_wave_m);

        // Period and swell stay anchored to the wind-derived estimate
        // even when the forecast text supplied the height.
        let wave_period_s = heuristics::wave_period_s(estimated_wave_m);
        let sea_state = heuristics::sea_state(heuristics::beaufort_force(wind));

        let wave_direction_deg = self.direction_or_random(sample.wind_direction_deg);
        let current_direction_deg = self.direction_or_random(sample.wind_direction_deg);
        let swell_direction_deg =
            heuristics::normalize_deg(sample.wind_direction_deg.unwrap_or(0.0) + 15.0);

        let now_ms = Utc::now().timestamp_millis();
        let marine = MarineConditions {
            wave_height_m,
            wave_direction_deg,
            wave_period_s,
            swell_height_m: estimated_wave_m * 0.7,
            swell_direction_deg,
            swell_period_s: wave_period_s * 1.5,
            sea_surface_temp_c: heuristics::sea_surface_temp_c(sample.temperature_c, point.lat),
            visibility_km: heuristics::visibility_km(&sample),
            sea_state,
            tide_height_m: heuristics::tide_height_m(point.lat, point.lon, now_ms),
            current_speed_kts: heuristics::current_speed_kts(wind, point.lat),
            current_direction_deg,
        };

        MarineWeather {
            coordinates: point,
            atmosphere: sample,
            marine,
            source: ConditionsSource::Observed,
        }
    }

    /// Missing wind direction degrades to a random bearing: an
    /// intentional "unknown direction" sentinel.
    fn direction_or_random(&self, wind_direction_deg: Option<f64>) -> f64 {
        match wind_direction_deg {
            Some(deg) => heuristics::normalize_deg(deg),
            None => {
                let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
                rng.random_range(0.0..360.0)
            }
        }
    }
}
