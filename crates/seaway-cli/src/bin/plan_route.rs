use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use seaway_core::models::Coordinates;
use seaway_core::route_engine::route_score;
use seaway_met::{MarineConditionsEstimator, NwsForecastClient, OpenWeatherClient, RoutePlanner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan ranked sea routes between two points", long_about = None)]
struct Args {
    #[arg(long)]
    from_lat: f64,

    #[arg(long)]
    from_lon: f64,

    #[arg(long)]
    to_lat: f64,

    #[arg(long)]
    to_lon: f64,

    /// Vessel class (cargo, tanker, container, passenger, fishing, naval)
    #[arg(long, default_value = "cargo")]
    vessel_type: String,

    /// OpenWeather-style API base URL
    #[arg(long, default_value = "https://api.openweathermap.org/data/2.5")]
    weather_url: String,

    /// OpenWeather API key (or set OPENWEATHER_API_KEY)
    #[arg(long, default_value = "")]
    api_key: String,

    /// Marine forecast API base URL
    #[arg(long, default_value = "https://api.weather.gov")]
    forecast_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let api_key = if args.api_key.is_empty() {
        std::env::var("OPENWEATHER_API_KEY").unwrap_or_default()
    } else {
        args.api_key.clone()
    };

    let from = Coordinates::new(args.from_lat, args.from_lon);
    let to = Coordinates::new(args.to_lat, args.to_lon);
    if !from.is_valid() || !to.is_valid() {
        anyhow::bail!("coordinates out of range");
    }

    let estimator = Arc::new(MarineConditionsEstimator::new(
        OpenWeatherClient::new(args.weather_url, api_key),
        NwsForecastClient::new(args.forecast_url),
    ));
    let planner = RoutePlanner::new(estimator);

    let routes = planner.optimal_routes(from, to, &args.vessel_type).await;

    println!(
        "Routes from {:.4},{:.4} to {:.4},{:.4} for {} vessel:",
        from.lat, from.lon, to.lat, to.lon, args.vessel_type
    );
    for (rank, route) in routes.iter().enumerate() {
        println!(
            "{}. {} - {:.1} nm, {:.1} h, risk {:?}, efficiency {:.0}%, score {:.1}",
            rank + 1,
            route.name,
            route.distance_nm,
            route.estimated_duration_h,
            route.weather_risk,
            route.fuel_efficiency_pct,
            route_score(route)
        );
        for waypoint in &route.waypoints {
            println!("     {:.4}, {:.4}", waypoint.lat, waypoint.lon);
        }
    }

    Ok(())
}
