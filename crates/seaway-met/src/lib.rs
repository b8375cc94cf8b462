//! Upstream data sources and orchestration for the seaway system:
//! weather and forecast clients, the marine conditions estimator, the
//! route planner and the simulated alert feed.

pub mod alerts;
pub mod error;
pub mod estimator;
pub mod forecast;
pub mod planner;
pub mod weather;

pub use alerts::AlertSource;
pub use error::SourceError;
pub use estimator::MarineConditionsEstimator;
pub use forecast::{ForecastDocument, ForecastPeriod, MarineForecastSource, NwsForecastClient};
pub use planner::RoutePlanner;
pub use weather::{OpenWeatherClient, WeatherSource};
