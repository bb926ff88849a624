use crate::errors::{PolyfillError, Result};

/// Largest `places` accepted by the number helpers.
pub const MAX_PLACES: u32 = 100;

fn check_places(name: &str, places: u32) -> Result<i32> {
    if places > MAX_PLACES {
        return Err(PolyfillError::InvalidArgument {
            name: name.to_string(),
            reason: format!("places must be at most {MAX_PLACES}, got {places}"),
        });
    }
    i32::try_from(places).map_err(|_| PolyfillError::InvalidArgument {
        name: name.to_string(),
        reason: format!("places out of range: {places}"),
    })
}

fn round_decimals(x: f64, places: i32) -> f64 {
    let scaled = x * 10f64.powi(places);
    if !scaled.is_finite() {
        // Already finer than `places` decimals can express.
        return x;
    }
    scaled.round() / 10f64.powi(places)
}

/// Round to `places` decimals, halves away from zero.
pub fn currency(x: f64, places: u32) -> Result<f64> {
    let places = check_places("currency", places)?;
    Ok(round_decimals(x, places))
}

/// [`currency`] rendered with exactly `places` decimals.
pub fn money(x: f64, places: u32) -> Result<String> {
    let p = check_places("money", places)?;
    let width = usize::try_from(places).unwrap_or(MAX_PLACES as usize);
    Ok(format!("{:.*}", width, round_decimals(x, p)))
}

/// Round to `places` significant digits (at least one).
pub fn round(x: f64, places: u32) -> Result<f64> {
    check_places("round", places)?;
    if !x.is_finite() {
        return Ok(x);
    }
    let digits = usize::try_from(places.max(1) - 1).unwrap_or(0);
    Ok(format!("{:.*e}", digits, x).parse().unwrap_or(x))
}
