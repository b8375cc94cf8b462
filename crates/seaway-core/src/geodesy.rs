//! Great-circle math for route distance and bearing calculations.

use crate::models::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Conversion factor from kilometers to nautical miles.
pub const KM_TO_NM: f64 = 0.539957;

/// Great-circle distance between two points in kilometers.
///
/// Standard Haversine formula on a spherical Earth.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dphi = (to.lat - from.lat).to_radians();
    let dlambda = (to.lon - from.lon).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two points in nautical miles.
pub fn haversine_nm(from: Coordinates, to: Coordinates) -> f64 {
    haversine_km(from, to) * KM_TO_NM
}

/// Initial bearing from one point to another, degrees in [0, 360).
pub fn bearing_deg(from: Coordinates, to: Coordinates) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    x.atan2(y).to_degrees().rem_euclid(360.0)
}

/// Midpoint of a leg, used as the third weather sampling site.
///
/// Arithmetic mean of the endpoints; adequate at route-planning scales
/// away from the antimeridian.
pub fn midpoint(from: Coordinates, to: Coordinates) -> Coordinates {
    Coordinates {
        lat: (from.lat + to.lat) / 2.0,
        lon: (from.lon + to.lon) / 2.0,
    }
}
