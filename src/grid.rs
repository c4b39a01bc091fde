//! Maidenhead grid-locator decoding and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lon: f64,
}

/// Decodes a 2, 4, or 6 character locator to the center of its cell.
///
/// Characters 1–2 are field letters A–R (20° × 10° cells), 3–4 square
/// digits (2° × 1°), 5–6 subsquare letters A–X (5′ × 2.5′). Letters are
/// case-insensitive. The returned point is the center of the finest cell
/// the locator resolves.
pub fn decode(locator: &str) -> Result<Coordinates, GridError> {
    let chars: Vec<char> = locator.chars().collect();
    if !matches!(chars.len(), 2 | 4 | 6) {
        return Err(GridError::BadLength(chars.len()));
    }

    let mut lon = -180.0 + 20.0 * letter(&chars, 0, 'R')? as f64;
    let mut lat = -90.0 + 10.0 * letter(&chars, 1, 'R')? as f64;
    let mut cell_lon = 20.0;
    let mut cell_lat = 10.0;

    if chars.len() >= 4 {
        lon += 2.0 * digit(&chars, 2)? as f64;
        lat += 1.0 * digit(&chars, 3)? as f64;
        cell_lon = 2.0;
        cell_lat = 1.0;
    }

    if chars.len() == 6 {
        lon += (5.0 / 60.0) * letter(&chars, 4, 'X')? as f64;
        lat += (2.5 / 60.0) * letter(&chars, 5, 'X')? as f64;
        cell_lon = 5.0 / 60.0;
        cell_lat = 2.5 / 60.0;
    }

    Ok(Coordinates {
        lat: lat + cell_lat / 2.0,
        lon: lon + cell_lon / 2.0,
    })
}

/// Great-circle distance between two locator centers in kilometers.
///
/// Uses the atan2 form of the spherical law of cosines, which stays
/// well-conditioned for nearby points.
pub fn distance(a: &str, b: &str) -> Result<f64, GridError> {
    let a = decode(a)?;
    let b = decode(b)?;

    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_lambda = (b.lon - a.lon).to_radians();

    let y = ((phi2.cos() * delta_lambda.sin()).powi(2)
        + (phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos()).powi(2))
    .sqrt();
    let x = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();

    Ok(EARTH_RADIUS_KM * y.atan2(x))
}

fn letter(chars: &[char], index: usize, max: char) -> Result<u32, GridError> {
    let ch = chars[index];
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() && upper <= max {
        Ok(upper as u32 - 'A' as u32)
    } else {
        Err(GridError::BadChar { index, ch })
    }
}

fn digit(chars: &[char], index: usize) -> Result<u32, GridError> {
    chars[index]
        .to_digit(10)
        .ok_or(GridError::BadChar { index, ch: chars[index] })
}
