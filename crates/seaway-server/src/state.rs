//! Shared application state.

use std::sync::Arc;

use seaway_met::{
    AlertSource, MarineConditionsEstimator, NwsForecastClient, OpenWeatherClient, RoutePlanner,
};

use crate::config::Config;

type Estimator = MarineConditionsEstimator<OpenWeatherClient, NwsForecastClient>;

pub struct AppState {
    pub estimator: Arc<Estimator>,
    pub planner: RoutePlanner<OpenWeatherClient, NwsForecastClient>,
    pub alerts: AlertSource,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let estimator = Arc::new(MarineConditionsEstimator::new(
            OpenWeatherClient::new(config.weather_url.clone(), config.weather_api_key.clone()),
            NwsForecastClient::new(config.forecast_url.clone()),
        ));
        Self {
            planner: RoutePlanner::new(estimator.clone()),
            estimator,
            alerts: AlertSource::new(),
        }
    }
}
