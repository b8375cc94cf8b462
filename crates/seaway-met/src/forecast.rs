//! Secondary marine forecast text source.
//!
//! Best effort only: the estimator consults this source for a
//! wave-height mention in forecast prose, and every failure mode
//! (network, HTTP, parse, missing fields) degrades to "no document".

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use seaway_core::heuristics::extract_wave_height_m;
use seaway_core::models::Coordinates;

use crate::error::SourceError;

/// A structured forecast document: zero or more free-text periods.
#[derive(Debug, Clone, Default)]
pub struct ForecastDocument {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "detailedForecast", default)]
    pub detailed_forecast: String,
}

impl ForecastDocument {
    /// First parseable wave height mentioned across the periods, meters.
    pub fn wave_height_m(&self) -> Option<f64> {
        self.periods
            .iter()
            .find_map(|p| extract_wave_height_m(&p.detailed_forecast))
    }
}

/// Contract for the secondary marine forecast provider.
#[async_trait]
pub trait MarineForecastSource: Send + Sync {
    /// Fetch the forecast document covering `point`, or `None` on any
    /// failure. Never raises to the caller.
    async fn fetch_forecast(&self, point: Coordinates) -> Option<ForecastDocument>;
}

/// Client for an api.weather.gov-style gridpoint forecast.
///
/// Two hops: the points endpoint resolves a forecast URL, which then
/// yields the period texts.
pub struct NwsForecastClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PointResponse {
    #[serde(default)]
    properties: Option<PointProperties>,
}

#[derive(Debug, Deserialize)]
struct PointProperties {
    #[serde(default)]
    forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<ForecastPeriod>,
}

impl NwsForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    async fn try_fetch(&self, point: Coordinates) -> Result<ForecastDocument, SourceError> {
        let point_url = format!("{}/points/{},{}", self.base_url, point.lat, point.lon);
        let response = self.client.get(&point_url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::UpstreamUnavailable(format!(
                "forecast points HTTP {}",
                response.status()
            )));
        }

        let payload: PointResponse = response
            .json()
            .await
            .map_err(|err| SourceError::ParseFailure(err.to_string()))?;
        let forecast_url = payload
            .properties
            .and_then(|p| p.forecast)
            .ok_or_else(|| SourceError::ParseFailure("points payload missing forecast URL".into()))?;

        let response = self.client.get(&forecast_url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::UpstreamUnavailable(format!(
                "forecast HTTP {}",
                response.status()
            )));
        }

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|err| SourceError::ParseFailure(err.to_string()))?;
        Ok(ForecastDocument {
            periods: payload.properties.map(|p| p.periods).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl MarineForecastSource for NwsForecastClient {
    async fn fetch_forecast(&self, point: Coordinates) -> Option<ForecastDocument> {
        match self.try_fetch(point).await {
            Ok(doc) => Some(doc),
            Err(err) => {
                tracing::debug!(
                    lat = point.lat,
                    lon = point.lon,
                    error = %err,
                    "secondary marine forecast unavailable"
                );
                None
            }
        }
    }
}
