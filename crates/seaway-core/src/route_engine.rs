//! Sea route generation, scoring and ranking.
//!
//! The engine is pure: it consumes weather samples already gathered for
//! the origin, midpoint and destination, generates three named route
//! variants, and ranks them by a composite score. Fetching and failure
//! handling live with the planner in the sources crate.

use std::cmp::Ordering;

use crate::geodesy::{haversine_nm, midpoint};
use crate::models::{vessel_base_speed_kts, Coordinates, Route, WeatherRisk};

/// Wind and wave summary for one sampled point.
///
/// A `None` sample means that point's weather fetch failed; the engine
/// degrades it to a moderate default rather than aborting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    pub wind_speed_mps: f64,
    pub wave_height_m: f64,
    pub wind_direction_deg: Option<f64>,
}

/// Wind speed assumed for a sample point whose fetch failed.
const DEFAULT_WIND_MPS: f64 = 5.0;
/// Wind direction assumed when a sample carries no direction.
const DEFAULT_WIND_DIR_DEG: f64 = 180.0;

const DIRECT_ROUTE: (&str, &str) = ("route-1", "Direct Route");
const OPTIMIZED_ROUTE: (&str, &str) = ("route-2", "Weather Optimized Route");
const COASTAL_ROUTE: (&str, &str) = ("route-3", "Coastal Route");

/// Generate the three route variants and rank them by score.
///
/// `origin`, `mid` and `dest` are the per-point weather samples; any of
/// them may be missing independently.
pub fn generate_routes(
    from: Coordinates,
    to: Coordinates,
    vessel_type: &str,
    origin: Option<PointSample>,
    mid: Option<PointSample>,
    dest: Option<PointSample>,
) -> Vec<Route> {
    let mut routes = vec![
        direct_route(from, to, vessel_type, origin, dest),
        weather_optimized_route(from, to, vessel_type, origin, mid, dest),
        coastal_route(from, to, vessel_type, origin, dest),
    ];
    rank_routes(&mut routes);
    routes
}

/// Rank routes by descending composite score.
///
/// The sort is stable, so equal scores keep generation order
/// (direct, optimized, coastal).
pub fn rank_routes(routes: &mut [Route]) {
    routes.sort_by(|a, b| {
        route_score(b)
            .partial_cmp(&route_score(a))
            .unwrap_or(Ordering::Equal)
    });
}

/// Composite score: fuel efficiency minus risk and duration penalties.
pub fn route_score(route: &Route) -> f64 {
    let risk_penalty = match route.weather_risk {
        WeatherRisk::High => 20.0,
        WeatherRisk::Medium => 10.0,
        WeatherRisk::Low => 0.0,
    };
    let duration_penalty = (route.estimated_duration_h * 0.5).min(15.0);
    route.fuel_efficiency_pct - risk_penalty - duration_penalty
}

fn direct_route(
    from: Coordinates,
    to: Coordinates,
    vessel_type: &str,
    origin: Option<PointSample>,
    dest: Option<PointSample>,
) -> Route {
    let distance_nm = haversine_nm(from, to);
    let risk = endpoint_risk(origin, dest);
    let avg_wind = average_wind(&[origin, dest]);

    let speed_kts = vessel_base_speed_kts(vessel_type) * speed_adjustment(avg_wind, risk);
    let (id, name) = DIRECT_ROUTE;

    Route {
        id: id.to_string(),
        name: name.to_string(),
        waypoints: vec![from, to],
        distance_nm,
        estimated_duration_h: distance_nm / speed_kts,
        weather_risk: risk,
        fuel_efficiency_pct: fuel_efficiency(speed_kts, risk, 1.0),
    }
}

fn weather_optimized_route(
    from: Coordinates,
    to: Coordinates,
    vessel_type: &str,
    origin: Option<PointSample>,
    mid: Option<PointSample>,
    dest: Option<PointSample>,
) -> Route {
    let samples = [origin, mid, dest];

    // Displace the midpoint perpendicular to the mean wind so the leg
    // crosses the weather rather than running into it.
    let mean_wind_dir = samples
        .iter()
        .map(|s| {
            s.map(|s| s.wind_direction_deg.unwrap_or(DEFAULT_WIND_DIR_DEG))
                .unwrap_or(DEFAULT_WIND_DIR_DEG)
        })
        .sum::<f64>()
        / samples.len() as f64;
    let offset_angle = (mean_wind_dir + 90.0).to_radians();
    let center = midpoint(from, to);
    let displaced = Coordinates {
        lat: center.lat + offset_angle.cos() * 0.5,
        lon: center.lon + offset_angle.sin() * 0.5,
    };

    let distance_nm = haversine_nm(from, displaced) + haversine_nm(displaced, to);
    let risk = averaged_risk(&samples);
    let avg_wind = average_wind(&samples);

    let speed_kts = vessel_base_speed_kts(vessel_type) * 1.05 * speed_adjustment(avg_wind, risk);
    let (id, name) = OPTIMIZED_ROUTE;

    Route {
        id: id.to_string(),
        name: name.to_string(),
        waypoints: vec![from, displaced, to],
        distance_nm,
        estimated_duration_h: distance_nm / speed_kts,
        weather_risk: risk,
        fuel_efficiency_pct: fuel_efficiency(speed_kts, risk, 1.05),
    }
}

fn coastal_route(
    from: Coordinates,
    to: Coordinates,
    vessel_type: &str,
    origin: Option<PointSample>,
    dest: Option<PointSample>,
) -> Route {
    let waypoints = coastal_waypoints(from, to);
    let distance_nm = waypoints
        .windows(2)
        .map(|leg| haversine_nm(leg[0], leg[1]))
        .sum::<f64>();

    let avg_wind = average_wind(&[origin, dest]);
    // Sheltered-water policy: coastal legs are reported low-risk
    // regardless of sampled conditions.
    let risk = WeatherRisk::Low;

    let speed_kts = vessel_base_speed_kts(vessel_type) * 0.8 * speed_adjustment(avg_wind, risk);
    let (id, name) = COASTAL_ROUTE;

    Route {
        id: id.to_string(),
        name: name.to_string(),
        waypoints,
        distance_nm,
        estimated_duration_h: distance_nm / speed_kts,
        weather_risk: risk,
        fuel_efficiency_pct: fuel_efficiency(speed_kts, risk, 0.95),
    }
}

fn coastal_waypoints(from: Coordinates, to: Coordinates) -> Vec<Coordinates> {
    vec![
        from,
        Coordinates::new(from.lat + 0.2, from.lon + 0.3),
        Coordinates::new(to.lat - 0.2, to.lon - 0.3),
        to,
    ]
}

/// Static route set returned when no weather could be gathered at all.
///
/// Same ids, names and shape as the live path, so callers cannot tell
/// degraded output apart structurally.
pub fn fallback_routes(from: Coordinates, to: Coordinates) -> Vec<Route> {
    let distance_nm = haversine_nm(from, to);
    let center = midpoint(from, to);

    vec![
        Route {
            id: DIRECT_ROUTE.0.to_string(),
            name: DIRECT_ROUTE.1.to_string(),
            waypoints: vec![from, to],
            distance_nm,
            estimated_duration_h: distance_nm / 15.0,
            weather_risk: WeatherRisk::Medium,
            fuel_efficiency_pct: 85.0,
        },
        Route {
            id: OPTIMIZED_ROUTE.0.to_string(),
            name: OPTIMIZED_ROUTE.1.to_string(),
            waypoints: vec![
                from,
                Coordinates::new(center.lat + 0.5, center.lon),
                to,
            ],
            distance_nm: distance_nm * 1.1,
            estimated_duration_h: distance_nm / 16.0,
            weather_risk: WeatherRisk::Low,
            fuel_efficiency_pct: 92.0,
        },
        Route {
            id: COASTAL_ROUTE.0.to_string(),
            name: COASTAL_ROUTE.1.to_string(),
            waypoints: coastal_waypoints(from, to),
            distance_nm: distance_nm * 1.2,
            estimated_duration_h: distance_nm / 12.0,
            weather_risk: WeatherRisk::Low,
            fuel_efficiency_pct: 78.0,
        },
    ]
}

/// Multiplicative speed adjustment from wind and risk, clamped to
/// [0.5, 1.3].
pub fn speed_adjustment(avg_wind: f64, risk: WeatherRisk) -> f64 {
    let mut adjustment: f64 = 1.0;

    if avg_wind > 20.0 {
        adjustment *= 0.7;
    } else if avg_wind > 15.0 {
        adjustment *= 0.8;
    } else if avg_wind > 10.0 {
        adjustment *= 0.9;
    } else if avg_wind < 5.0 {
        adjustment *= 1.1;
    }

    match risk {
        WeatherRisk::High => adjustment *= 0.8,
        WeatherRisk::Medium => adjustment *= 0.9,
        WeatherRisk::Low => adjustment *= 1.05,
    }

    adjustment.clamp(0.5, 1.3)
}

/// Fuel efficiency percentage for a cruising speed, clamped to [50, 100].
///
/// Base 85, with a sweet spot at 12-16 kts and a variant-specific bonus.
pub fn fuel_efficiency(speed_kts: f64, risk: WeatherRisk, variant_bonus: f64) -> f64 {
    let mut efficiency = 85.0;

    if (12.0..=16.0).contains(&speed_kts) {
        efficiency += 10.0;
    } else if speed_kts < 10.0 || speed_kts > 20.0 {
        efficiency -= 15.0;
    } else {
        efficiency -= 5.0;
    }

    match risk {
        WeatherRisk::Low => efficiency += 5.0,
        WeatherRisk::High => efficiency -= 10.0,
        WeatherRisk::Medium => {}
    }

    (efficiency * variant_bonus).clamp(50.0, 100.0)
}

/// Classify risk from average wind (m/s) and wave height (m).
fn classify_risk(avg_wind: f64, avg_wave: f64) -> WeatherRisk {
    if avg_wind > 15.0 || avg_wave > 3.0 {
        WeatherRisk::High
    } else if avg_wind > 10.0 || avg_wave > 2.0 {
        WeatherRisk::Medium
    } else {
        WeatherRisk::Low
    }
}

/// Risk across the two endpoints. A missing endpoint degrades the pair
/// to medium.
fn endpoint_risk(origin: Option<PointSample>, dest: Option<PointSample>) -> WeatherRisk {
    match (origin, dest) {
        (Some(a), Some(b)) => classify_risk(
            (a.wind_speed_mps + b.wind_speed_mps) / 2.0,
            (a.wave_height_m + b.wave_height_m) / 2.0,
        ),
        _ => WeatherRisk::Medium,
    }
}

/// Risk averaged across all samples, each discretized to 0/1/2.
/// Missing samples count as medium.
fn averaged_risk(samples: &[Option<PointSample>]) -> WeatherRisk {
    let total: f64 = samples
        .iter()
        .map(|s| match s {
            Some(s) => match classify_risk(s.wind_speed_mps, s.wave_height_m) {
                WeatherRisk::High => 2.0,
                WeatherRisk::Medium => 1.0,
                WeatherRisk::Low => 0.0,
            },
            None => 1.0,
        })
        .sum();
    let avg = total / samples.len() as f64;

    if avg >= 1.5 {
        WeatherRisk::High
    } else if avg >= 0.5 {
        WeatherRisk::Medium
    } else {
        WeatherRisk::Low
    }
}

fn average_wind(samples: &[Option<PointSample>]) -> f64 {
    let total: f64 = samples
        .iter()
        .map(|s| s.map(|s| s.wind_speed_mps).unwrap_or(DEFAULT_WIND_MPS))
        .sum();
    total / samples.len() as f64
}
