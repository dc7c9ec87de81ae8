use crate::MathError;

/// Fetch the fixed-point scalar `10^decimals`
///
/// ### Errors
/// If `10^decimals` does not fit in an i128
pub fn scalar(decimals: u32) -> Result<i128, MathError> {
    10i128
        .checked_pow(decimals)
        .ok_or(MathError::UnsupportedScale(decimals))
}

/// Convert a float into a fixed-point number with `decimals` decimal places
///
/// The scaled value is floored, so negative values round away from zero. Values outside
/// the range of an i128 saturate.
pub fn to_fixed(value: f64, decimals: u32) -> i128 {
    (value * 10f64.powi(decimals as i32)).floor() as i128
}

/// Convert a fixed-point number with `decimals` decimal places into a float
///
/// This is lossy and only intended for display.
pub fn to_float(value: i128, decimals: u32) -> f64 {
    value as f64 / 10f64.powi(decimals as i32)
}
