//! Route planner: three-point weather gathering plus the core engine.

use std::sync::Arc;

use futures::future;

use seaway_core::geodesy;
use seaway_core::models::{Coordinates, MarineWeather, Route};
use seaway_core::route_engine::{self, PointSample};

use crate::estimator::MarineConditionsEstimator;
use crate::forecast::MarineForecastSource;
use crate::weather::WeatherSource;

/// Plans ranked sea routes between two points.
///
/// Total from the caller's perspective: individual sample-point failures
/// degrade that point's contribution, and a complete gathering failure
/// yields the static fallback route set.
pub struct RoutePlanner<W, F> {
    estimator: Arc<MarineConditionsEstimator<W, F>>,
}

impl<W, F> RoutePlanner<W, F>
where
    W: WeatherSource,
    F: MarineForecastSource,
{
    pub fn new(estimator: Arc<MarineConditionsEstimator<W, F>>) -> Self {
        Self { estimator }
    }

    /// Generate and rank route candidates from `from` to `to`.
    pub async fn optimal_routes(
        &self,
        from: Coordinates,
        to: Coordinates,
        vessel_type: &str,
    ) -> Vec<Route> {
        let points = [from, geodesy::midpoint(from, to), to];

        // Fan out over the three sample points and settle every branch;
        // a failed point must not cancel or block its siblings.
        let settled =
            future::join_all(points.iter().map(|p| self.estimator.fetch_observed(*p))).await;

        let mut samples = [None, None, None];
        for (slot, (result, point)) in samples.iter_mut().zip(settled.into_iter().zip(points)) {
            match result {
                Ok(record) => *slot = Some(to_point_sample(&record)),
                Err(err) => {
                    tracing::warn!(
                        lat = point.lat,
                        lon = point.lon,
                        error = %err,
                        "sample point lost, degrading its contribution"
                    );
                }
            }
        }

        if samples.iter().all(Option::is_none) {
            tracing::warn!("no weather available for any sample point, using fallback routes");
            return route_engine::fallback_routes(from, to);
        }

        route_engine::generate_routes(from, to, vessel_type, samples[0], samples[1], samples[2])
    }
}

fn to_point_sample(record: &MarineWeather) -> PointSample {
    PointSample {
        wind_speed_mps: record.atmosphere.wind_speed_mps,
        wave_height_m: record.marine.wave_height_m,
        wind_direction_deg: record.atmosphere.wind_direction_deg,
    }
}
