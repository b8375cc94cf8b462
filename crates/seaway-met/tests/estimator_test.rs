//! Estimator integration tests against in-process mock sources.

use async_trait::async_trait;
use chrono::Utc;

use seaway_core::models::{AtmosphericSample, ConditionsSource, Coordinates};
use seaway_met::error::SourceError;
use seaway_met::forecast::{ForecastDocument, ForecastPeriod, MarineForecastSource};
use seaway_met::weather::WeatherSource;
use seaway_met::MarineConditionsEstimator;

const POINT: Coordinates = Coordinates { lat: 51.0, lon: 4.0 };

fn calm_sample() -> AtmosphericSample {
    AtmosphericSample {
        temperature_c: 15.0,
        humidity_pct: Some(70.0),
        pressure_hpa: Some(1013.0),
        wind_speed_mps: 6.0,
        wind_direction_deg: Some(200.0),
        visibility_m: Some(10_000.0),
        conditions: vec!["Clouds".to_string()],
        observed_at: Utc::now(),
    }
}

struct StaticWeather(AtmosphericSample);

#[async_trait]
impl WeatherSource for StaticWeather {
    async fn fetch_current(&self, _point: Coordinates) -> Result<AtmosphericSample, SourceError> {
        Ok(self.0.clone())
    }
}

struct FailingWeather;

#[async_trait]
impl WeatherSource for FailingWeather {
    async fn fetch_current(&self, _point: Coordinates) -> Result<AtmosphericSample, SourceError> {
        Err(SourceError::UpstreamUnavailable("connection refused".into()))
    }
}

struct NoForecast;

#[async_trait]
impl MarineForecastSource for NoForecast {
    async fn fetch_forecast(&self, _point: Coordinates) -> Option<ForecastDocument> {
        None
    }
}

struct TextForecast(&'static str);

#[async_trait]
impl MarineForecastSource for TextForecast {
    async fn fetch_forecast(&self, _point: Coordinates) -> Option<ForecastDocument> {
        Some(ForecastDocument {
            periods: vec![ForecastPeriod {
                name: Some("Tonight".to_string()),
                detailed_forecast: self.0.to_string(),
            }],
        })
    }
}

#[tokio::test]
async fn fuses_heuristic_fields_from_atmosphere() {
    let estimator = MarineConditionsEstimator::with_seed(StaticWeather(calm_sample()), NoForecast, 1);
    let record = estimator.estimate(POINT).await;

    assert_eq!(record.source, ConditionsSource::Observed);
    // 6 m/s -> (6/3.6)^2 / 10 = 0.2778 m
    assert!((record.marine.wave_height_m - 0.2778).abs() < 0.001);
    assert!((record.marine.swell_height_m - record.marine.wave_height_m * 0.7).abs() < 1e-9);
    assert!((record.marine.swell_period_s - record.marine.wave_period_s * 1.5).abs() < 1e-9);
    assert!((record.marine.wave_direction_deg - 200.0).abs() < 1e-9);
    assert!((record.marine.swell_direction_deg - 215.0).abs() < 1e-9);
    // 6 m/s = 11.66 kts -> force 4 -> sea state 2
    assert_eq!(record.marine.sea_state, 2);
    assert!((record.marine.visibility_km - 10.0).abs() < 1e-9);
    // 51N: SST = 15 + cos(51 deg) * 2 - 1
    let expected_sst = 15.0 + (51.0_f64).to_radians().cos() * 2.0 - 1.0;
    assert!((record.marine.sea_surface_temp_c - expected_sst).abs() < 1e-9);
}

#[tokio::test]
async fn forecast_text_overrides_wave_height_only() {
    let estimator = MarineConditionsEstimator::with_seed(
        StaticWeather(calm_sample()),
        TextForecast("Southwest winds 10 knots. Waves 3 to 5 feet."),
        1,
    );
    let record = estimator
        .fetch_observed(POINT)
        .await
        .expect("primary source is up");

    assert!((record.marine.wave_height_m - 0.9144).abs() < 1e-6);
    // Everything else stays anchored to the wind-derived estimate.
    let estimated = seaway_core::heuristics::estimated_wave_height_m(6.0);
    assert!((record.marine.swell_height_m - estimated * 0.7).abs() < 1e-9);
    assert!(
        (record.marine.wave_period_s - seaway_core::heuristics::wave_period_s(estimated)).abs()
            < 1e-9
    );
}

#[tokio::test]
async fn unparsable_forecast_text_means_no_enrichment() {
    let estimator = MarineConditionsEstimator::with_seed(
        StaticWeather(calm_sample()),
        TextForecast("Wave conditions deteriorating. Gale watch in effect."),
        1,
    );
    let record = estimator.fetch_observed(POINT).await.unwrap();
    let estimated = seaway_core::heuristics::estimated_wave_height_m(6.0);
    assert!((record.marine.wave_height_m - estimated).abs() < 1e-9);
}

#[tokio::test]
async fn primary_failure_synthesizes_a_complete_record() {
    let estimator = MarineConditionsEstimator::with_seed(FailingWeather, NoForecast, 42);
    let record = estimator.estimate(POINT).await;

    assert_eq!(record.source, ConditionsSource::Simulated);
    assert!(record.marine.wave_height_m >= 0.1);
    assert!((0.0..360.0).contains(&record.marine.wave_direction_deg));
    assert!(record.marine.wave_period_s >= 2.0);
    assert!(record.marine.visibility_km >= 0.0);
    assert!(record.marine.sea_state <= 6);
    assert!(record.marine.current_speed_kts >= 0.0);
    assert!((0.0..360.0).contains(&record.marine.current_direction_deg));
}

#[tokio::test]
async fn primary_failure_discards_secondary_enrichment() {
    // The forecast mentions parseable waves, but a dead primary means
    // the fusion path never runs; the record is simulated instead.
    let estimator = MarineConditionsEstimator::with_seed(
        FailingWeather,
        TextForecast("Waves 3 to 5 feet."),
        42,
    );
    let record = estimator.estimate(POINT).await;
    assert_eq!(record.source, ConditionsSource::Simulated);
    assert!((record.marine.wave_height_m - 0.9144).abs() > 1e-6);
}

#[tokio::test]
async fn seeded_fallback_is_reproducible() {
    let a = MarineConditionsEstimator::with_seed(FailingWeather, NoForecast, 7)
        .estimate(POINT)
        .await;
    let b = MarineConditionsEstimator::with_seed(FailingWeather, NoForecast, 7)
        .estimate(POINT)
        .await;
    assert_eq!(a.marine.wave_height_m, b.marine.wave_height_m);
    assert_eq!(a.marine.sea_state, b.marine.sea_state);
    assert_eq!(a.atmosphere.temperature_c, b.atmosphere.temperature_c);
}

#[tokio::test]
async fn simulated_records_serialize_with_provenance() {
    let estimator = MarineConditionsEstimator::with_seed(FailingWeather, NoForecast, 7);
    let record = estimator.estimate(POINT).await;
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["source"], "simulated");
    assert!(json["marine"]["wave_height_m"].is_number());
}
