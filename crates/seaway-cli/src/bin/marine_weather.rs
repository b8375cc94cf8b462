use anyhow::Result;
use clap::Parser;

use seaway_core::models::Coordinates;
use seaway_met::{MarineConditionsEstimator, NwsForecastClient, OpenWeatherClient};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch marine conditions for a point", long_about = None)]
struct Args {
    #[arg(long)]
    lat: f64,

    #[arg(long)]
    lon: f64,

    /// OpenWeather-style API base URL
    #[arg(long, default_value = "https://api.openweathermap.org/data/2.5")]
    weather_url: String,

    /// OpenWeather API key (or set OPENWEATHER_API_KEY)
    #[arg(long, default_value = "")]
    api_key: String,

    /// Marine forecast API base URL
    #[arg(long, default_value = "https://api.weather.gov")]
    forecast_url: String,

    /// Print the raw JSON record instead of a report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let api_key = if args.api_key.is_empty() {
        std::env::var("OPENWEATHER_API_KEY").unwrap_or_default()
    } else {
        args.api_key.clone()
    };

    let point = Coordinates::new(args.lat, args.lon);
    if !point.is_valid() {
        anyhow::bail!("coordinates out of range: {}, {}", args.lat, args.lon);
    }

    let estimator = MarineConditionsEstimator::new(
        OpenWeatherClient::new(args.weather_url, api_key),
        NwsForecastClient::new(args.forecast_url),
    );

    let record = estimator.estimate(point).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Marine conditions at {:.4}, {:.4} ({:?})", point.lat, point.lon, record.source);
    println!("  Air temperature: {:.1} C", record.atmosphere.temperature_c);
    println!("  Wind: {:.1} m/s", record.atmosphere.wind_speed_mps);
    println!(
        "  Waves: {:.1} m at {:.0} deg, period {:.1} s",
        record.marine.wave_height_m,
        record.marine.wave_direction_deg,
        record.marine.wave_period_s
    );
    println!(
        "  Swell: {:.1} m at {:.0} deg, period {:.1} s",
        record.marine.swell_height_m,
        record.marine.swell_direction_deg,
        record.marine.swell_period_s
    );
    println!("  Sea state: {}", record.marine.sea_state);
    println!("  Sea surface temp: {:.1} C", record.marine.sea_surface_temp_c);
    println!("  Visibility: {:.1} km", record.marine.visibility_km);
    println!("  Tide: {:+.2} m", record.marine.tide_height_m);
    println!(
        "  Current: {:.1} kts at {:.0} deg",
        record.marine.current_speed_kts, record.marine.current_direction_deg
    );

    Ok(())
}
