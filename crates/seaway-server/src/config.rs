//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub weather_url: String,
    pub weather_api_key: String,
    pub forecast_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SEAWAY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            weather_url: env::var("OPENWEATHER_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string()),
            weather_api_key: env::var("OPENWEATHER_API_KEY").unwrap_or_default(),
            forecast_url: env::var("NWS_URL")
                .unwrap_or_else(|_| "https://api.weather.gov".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        // Env vars are unset in the test environment by default.
        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert!(config.weather_url.starts_with("https://"));
        assert!(config.forecast_url.starts_with("https://"));
    }
}
