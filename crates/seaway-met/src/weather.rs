//! Primary atmospheric weather source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use seaway_core::models::{AtmosphericSample, Coordinates};

use crate::error::SourceError;

/// Contract for the primary weather provider.
///
/// Implementations fail with [`SourceError::UpstreamUnavailable`] on
/// network or HTTP errors; callers decide how to degrade.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current(&self, point: Coordinates) -> Result<AtmosphericSample, SourceError>;
}

/// HTTP client for an OpenWeather-style current-conditions endpoint.
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    main: MainBlock,
    #[serde(default)]
    wind: Option<WindBlock>,
    /// Metered visibility in meters, when the station reports one.
    #[serde(default)]
    visibility: Option<f64>,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: Option<f64>,
    #[serde(default)]
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: Option<f64>,
}

impl WeatherResponse {
    fn into_sample(self) -> AtmosphericSample {
        let observed_at = DateTime::<Utc>::from_timestamp(self.dt, 0).unwrap_or_else(Utc::now);
        let wind = self.wind.unwrap_or(WindBlock {
            speed: 0.0,
            deg: None,
        });
        AtmosphericSample {
            temperature_c: self.main.temp,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed_mps: wind.speed,
            wind_direction_deg: wind.deg,
            visibility_m: self.visibility,
            conditions: self.weather.into_iter().map(|c| c.main).collect(),
            observed_at,
        }
    }
}

impl OpenWeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch_current(&self, point: Coordinates) -> Result<AtmosphericSample, SourceError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", point.lat.to_string()),
                ("lon", point.lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::UpstreamUnavailable(format!(
                "weather provider HTTP {}",
                response.status()
            )));
        }

        let payload: WeatherResponse = response
            .json()
            .await
            .map_err(|err| SourceError::ParseFailure(err.to_string()))?;
        Ok(payload.into_sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_payload() {
        let payload: WeatherResponse = serde_json::from_str(
            r#"{"main": {"temp": 12.5}, "dt": 1700000000}"#,
        )
        .unwrap();
        let sample = payload.into_sample();
        assert_eq!(sample.temperature_c, 12.5);
        assert_eq!(sample.wind_speed_mps, 0.0);
        assert!(sample.wind_direction_deg.is_none());
        assert!(sample.conditions.is_empty());
    }

    #[test]
    fn deserializes_full_payload() {
        let payload: WeatherResponse = serde_json::from_str(
            r#"{
                "weather": [{"main": "Clouds"}],
                "main": {"temp": 18.0, "humidity": 70, "pressure": 1013},
                "wind": {"speed": 6.2, "deg": 230},
                "visibility": 10000,
                "dt": 1700000000
            }"#,
        )
        .unwrap();
        let sample = payload.into_sample();
        assert_eq!(sample.wind_speed_mps, 6.2);
        assert_eq!(sample.wind_direction_deg, Some(230.0));
        assert_eq!(sample.visibility_m, Some(10000.0));
        assert_eq!(sample.conditions, vec!["Clouds".to_string()]);
    }
}
