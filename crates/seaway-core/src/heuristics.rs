//! Heuristic transforms from atmospheric observations to marine conditions.
//!
//! The primary weather source carries no marine observations, so every
//! marine quantity is derived from wind, temperature, position and time.
//! The formulas are deliberately approximate stand-ins, not validated
//! oceanographic models.

use crate::models::AtmosphericSample;

/// Conversion factor from meters per second to knots.
pub const MPS_TO_KNOTS: f64 = 1.944;

/// Conversion factor from feet to meters.
pub const FEET_TO_M: f64 = 0.3048;

/// One semidiurnal tidal cycle (12.42 h) in milliseconds.
pub const TIDAL_CYCLE_MS: i64 = 44_712_000;

/// Beaufort force (0-12) for a wind speed in knots.
///
/// Fixed threshold table; each force applies up to (exclusive) its knot
/// bound: <1, <4, <7, <11, <16, <22, <28, <34, <41, <48, <56, <64, >=64.
pub fn beaufort_from_knots(wind_kts: f64) -> u8 {
    const BOUNDS: [f64; 12] = [
        1.0, 4.0, 7.0, 11.0, 16.0, 22.0, 28.0, 34.0, 41.0, 48.0, 56.0, 64.0,
    ];
    for (force, bound) in BOUNDS.iter().enumerate() {
        if wind_kts < *bound {
            return force as u8;
        }
    }
    12
}

/// Beaufort force for a wind speed in meters per second.
pub fn beaufort_force(wind_speed_mps: f64) -> u8 {
    beaufort_from_knots(wind_speed_mps * MPS_TO_KNOTS)
}

/// Sea state code 0-6 from a Beaufort force.
pub fn sea_state(beaufort: u8) -> u8 {
    (beaufort / 2).min(6)
}

/// Significant wave height estimate from wind speed alone.
///
/// Simplified fully-developed-sea proxy; floor of 0.1 m keeps downstream
/// period math defined in flat calm.
pub fn estimated_wave_height_m(wind_speed_mps: f64) -> f64 {
    ((wind_speed_mps / 3.6).powi(2) / 10.0).max(0.1)
}

/// Dominant wave period in seconds for a wave height.
pub fn wave_period_s(wave_height_m: f64) -> f64 {
    (3.86 * wave_height_m.sqrt()).max(2.0)
}

/// Sea surface temperature estimate from air temperature and latitude.
pub fn sea_surface_temp_c(air_temp_c: f64, lat: f64) -> f64 {
    air_temp_c + lat.to_radians().cos() * 2.0 - 1.0
}

/// Surface visibility in kilometers.
///
/// Prefers the station's metered visibility; otherwise classifies by
/// condition keyword.
pub fn visibility_km(sample: &AtmosphericSample) -> f64 {
    if let Some(meters) = sample.visibility_m {
        return meters / 1000.0;
    }

    let condition = sample
        .conditions
        .first()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or_default();
    if condition.contains("fog") || condition.contains("mist") {
        2.0
    } else if condition.contains("rain") || condition.contains("snow") {
        8.0
    } else if condition.contains("cloud") {
        15.0
    } else {
        25.0
    }
}

/// Synthetic semidiurnal tide height at a position and time.
///
/// Location scales the amplitude, the 12.42 h cycle drives the phase.
/// Deterministic in (lat, lon, time); not a real tidal model.
pub fn tide_height_m(lat: f64, lon: f64, now_ms: i64) -> f64 {
    let location_factor = lat.to_radians().sin() * lon.to_radians().cos();
    let amplitude = 2.0 + location_factor.abs();
    let phase = (now_ms.rem_euclid(TIDAL_CYCLE_MS)) as f64 / TIDAL_CYCLE_MS as f64
        * std::f64::consts::TAU;
    phase.sin() * amplitude
}

/// Surface current speed estimate in knots from wind and latitude.
pub fn current_speed_kts(wind_speed_mps: f64, lat: f64) -> f64 {
    let wind_factor = wind_speed_mps * 0.025;
    let latitude_factor = lat.to_radians().sin().abs();
    (wind_factor * (1.0 + latitude_factor)).max(0.1)
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Extract a wave height in meters from free-text forecast prose.
///
/// Scans text that mentions waves for the first positive numeric value
/// followed by a recognized unit token, tolerating "N to M <unit>"
/// ranges. Feet convert to meters; unrecognized units are skipped.
pub fn extract_wave_height_m(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    if !lower.contains("wave") {
        return None;
    }

    let tokens: Vec<&str> = lower.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        // Units can ride on the number itself ("5ft") or stand alone.
        if let Some((value, unit)) = split_value_unit(token) {
            if !unit.is_empty() {
                if let Some(height) = convert_unit(value, unit) {
                    return Some(height);
                }
                continue;
            }

            let mut j = i + 1;
            // A range reads its unit after the upper bound: "3 to 5 feet".
            if tokens.get(j).copied() == Some("to")
                && tokens
                    .get(j + 1)
                    .and_then(|t| split_value_unit(t))
                    .is_some()
            {
                j += 2;
            }
            if let Some(unit_token) = tokens.get(j) {
                let unit: String = unit_token
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .collect();
                if let Some(height) = convert_unit(value, &unit) {
                    return Some(height);
                }
            }
        }
    }
    None
}

/// Split a token like "5", "5.5" or "5ft" into its numeric value and any
/// trailing alphabetic unit.
fn split_value_unit(token: &str) -> Option<(f64, &str)> {
    let digits_end = token
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    let value: f64 = token[..digits_end].parse().ok()?;
    let rest = token[digits_end..].trim_matches(|c: char| !c.is_ascii_alphabetic());
    Some((value, rest))
}

fn convert_unit(value: f64, unit: &str) -> Option<f64> {
    if value <= 0.0 {
        return None;
    }
    match unit {
        "foot" | "feet" | "ft" => Some(value * FEET_TO_M),
        "meter" | "meters" | "metre" | "metres" | "m" => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(visibility_m: Option<f64>, conditions: &[&str]) -> AtmosphericSample {
        AtmosphericSample {
            temperature_c: 15.0,
            humidity_pct: None,
            pressure_hpa: None,
            wind_speed_mps: 5.0,
            wind_direction_deg: Some(200.0),
            visibility_m,
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
            observed_at: Utc::now(),
        }
    }

    #[test]
    fn beaufort_table_boundaries() {
        assert_eq!(beaufort_from_knots(0.0), 0);
        assert_eq!(beaufort_from_knots(0.99), 0);
        assert_eq!(beaufort_from_knots(1.0), 1);
        assert_eq!(beaufort_from_knots(3.9), 1);
        assert_eq!(beaufort_from_knots(4.0), 2);
        assert_eq!(beaufort_from_knots(15.9), 4);
        assert_eq!(beaufort_from_knots(16.0), 5);
        assert_eq!(beaufort_from_knots(33.9), 6);
        assert_eq!(beaufort_from_knots(34.0), 7);
        assert_eq!(beaufort_from_knots(63.9), 11);
        assert_eq!(beaufort_from_knots(64.0), 12);
        assert_eq!(beaufort_from_knots(120.0), 12);
    }

    #[test]
    fn beaufort_is_monotonic() {
        let mut last = 0;
        for tenth_kt in 0..800 {
            let force = beaufort_from_knots(tenth_kt as f64 / 10.0);
            assert!(force >= last, "force decreased at {} kts", tenth_kt);
            last = force;
        }
    }

    #[test]
    fn sea_state_clamps_at_six() {
        assert_eq!(sea_state(0), 0);
        assert_eq!(sea_state(5), 2);
        assert_eq!(sea_state(12), 6);
    }

    #[test]
    fn wave_height_has_floor() {
        assert_eq!(estimated_wave_height_m(0.0), 0.1);
        // 10 m/s -> (10/3.6)^2 / 10 = 0.7716 m
        assert!((estimated_wave_height_m(10.0) - 0.7716).abs() < 0.001);
    }

    #[test]
    fn wave_period_has_floor() {
        assert_eq!(wave_period_s(0.1), 2.0);
        assert!((wave_period_s(4.0) - 7.72).abs() < 0.01);
    }

    #[test]
    fn sst_tracks_latitude() {
        // Equator: +2 - 1 = +1 relative to air temperature.
        assert!((sea_surface_temp_c(20.0, 0.0) - 21.0).abs() < 1e-9);
        // Poles: cos ~ 0, so -1.
        assert!((sea_surface_temp_c(20.0, 90.0) - 19.0).abs() < 1e-6);
    }

    #[test]
    fn visibility_prefers_metered_value() {
        assert!((visibility_km(&sample(Some(10_000.0), &["Fog"])) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn visibility_classifies_by_condition() {
        assert_eq!(visibility_km(&sample(None, &["Fog"])), 2.0);
        assert_eq!(visibility_km(&sample(None, &["Mist"])), 2.0);
        assert_eq!(visibility_km(&sample(None, &["Rain"])), 8.0);
        assert_eq!(visibility_km(&sample(None, &["Snow"])), 8.0);
        assert_eq!(visibility_km(&sample(None, &["Clouds"])), 15.0);
        assert_eq!(visibility_km(&sample(None, &["Clear"])), 25.0);
        assert_eq!(visibility_km(&sample(None, &[])), 25.0);
    }

    #[test]
    fn tide_is_periodic_over_the_semidiurnal_cycle() {
        let t0 = 1_700_000_000_000_i64;
        let h0 = tide_height_m(51.0, 4.0, t0);
        let h1 = tide_height_m(51.0, 4.0, t0 + TIDAL_CYCLE_MS);
        assert!((h0 - h1).abs() < 1e-9);
    }

    #[test]
    fn tide_amplitude_is_bounded() {
        // Amplitude is at most 3 m by construction.
        for step in 0..100 {
            let h = tide_height_m(45.0, 10.0, step * 3_600_000);
            assert!(h.abs() <= 3.0);
        }
    }

    #[test]
    fn current_speed_has_floor_and_grows_with_latitude() {
        assert_eq!(current_speed_kts(0.0, 0.0), 0.1);
        let equator = current_speed_kts(10.0, 0.0);
        let high_lat = current_speed_kts(10.0, 60.0);
        assert!(high_lat > equator);
    }

    #[test]
    fn extracts_wave_height_from_range_in_feet() {
        let h = extract_wave_height_m("Southwest winds. Waves 3 to 5 feet.").unwrap();
        assert!((h - 0.9144).abs() < 1e-6);
    }

    #[test]
    fn extracts_wave_height_in_meters() {
        let h = extract_wave_height_m("wave heights around 2 meters expected").unwrap();
        assert!((h - 2.0).abs() < 1e-9);
    }

    #[test]
    fn extracts_attached_unit() {
        let h = extract_wave_height_m("waves building to 6ft overnight").unwrap();
        assert!((h - 6.0 * FEET_TO_M).abs() < 1e-9);
    }

    #[test]
    fn ignores_text_without_wave_mention() {
        assert!(extract_wave_height_m("Seas 4 feet. Winds 10 knots.").is_none());
    }

    #[test]
    fn ignores_numbers_with_unrecognized_units() {
        assert!(extract_wave_height_m("waves driven by winds of 15 knots").is_none());
    }

    #[test]
    fn ignores_zero_heights() {
        assert!(extract_wave_height_m("waves 0 feet or less").is_none());
    }

    #[test]
    fn normalize_wraps_degrees() {
        assert_eq!(normalize_deg(370.0), 10.0);
        assert_eq!(normalize_deg(-15.0), 345.0);
        assert_eq!(normalize_deg(360.0), 0.0);
    }
}
