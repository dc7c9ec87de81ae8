use uint::construct_uint;

use crate::MathError;

construct_uint! {
    /// 256-bit unsigned integer used to carry `x * y` past the range of i128
    struct U256(4);
}

/// Calculate `x * y / denominator`, rounding the quotient toward zero.
///
/// Returns the quotient and whether the remainder of `x * y / denominator` is strictly
/// positive. The remainder carries the sign of `x * y`, so a negative product never
/// reports a positive remainder.
fn mul_div(x: i128, y: i128, denominator: i128) -> Result<(i128, bool), MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    // floor and truncation agree when nothing is negative
    if x >= 0 && y >= 0 && denominator > 0 {
        if let Some(product) = x.checked_mul(y) {
            return Ok((product / denominator, product % denominator != 0));
        }
    }

    let numerator = U256::from(x.unsigned_abs()) * U256::from(y.unsigned_abs());
    let (quotient, remainder) = numerator.div_mod(U256::from(denominator.unsigned_abs()));
    if quotient.bits() > 128 {
        return Err(MathError::Overflow);
    }
    let quotient = quotient.low_u128();

    let product_negative = !numerator.is_zero() && ((x < 0) != (y < 0));
    let quotient = if product_negative != (denominator < 0) {
        0i128.checked_sub_unsigned(quotient)
    } else {
        i128::try_from(quotient).ok()
    }
    .ok_or(MathError::Overflow)?;

    Ok((quotient, !product_negative && !remainder.is_zero()))
}

/// Calculate `x * y / denominator`, rounding toward zero
///
/// ### Errors
/// If `denominator` is zero or the result does not fit in an i128
pub fn checked_mul_floor(x: i128, y: i128, denominator: i128) -> Result<i128, MathError> {
    mul_div(x, y, denominator).map(|(quotient, _)| quotient)
}

/// Calculate `x * y / denominator`, rounding toward zero and adding one on a positive remainder
///
/// The quotient is incremented only when the remainder of the combined
/// product-then-divide is strictly positive.
///
/// ### Errors
/// If `denominator` is zero or the result does not fit in an i128
pub fn checked_mul_ceil(x: i128, y: i128, denominator: i128) -> Result<i128, MathError> {
    let (quotient, positive_remainder) = mul_div(x, y, denominator)?;
    if positive_remainder {
        quotient.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(quotient)
    }
}

/// Calculate `x * denominator / y`, rounding toward zero
///
/// ### Errors
/// If `y` is zero or the result does not fit in an i128
pub fn checked_div_floor(x: i128, y: i128, denominator: i128) -> Result<i128, MathError> {
    checked_mul_floor(x, denominator, y)
}

/// Calculate `x * denominator / y`, rounding toward zero and adding one on a positive remainder
///
/// ### Errors
/// If `y` is zero or the result does not fit in an i128
pub fn checked_div_ceil(x: i128, y: i128, denominator: i128) -> Result<i128, MathError> {
    checked_mul_ceil(x, denominator, y)
}

/// Calculate `x * y / denominator`, rounding toward zero
///
/// ### Panics
/// If `denominator` is zero or the result does not fit in an i128
pub fn mul_floor(x: i128, y: i128, denominator: i128) -> i128 {
    checked_mul_floor(x, y, denominator).unwrap_or_else(|err| panic!("mul_floor: {err}"))
}

/// Calculate `x * y / denominator`, rounding toward zero and adding one on a positive remainder
///
/// ### Panics
/// If `denominator` is zero or the result does not fit in an i128
pub fn mul_ceil(x: i128, y: i128, denominator: i128) -> i128 {
    checked_mul_ceil(x, y, denominator).unwrap_or_else(|err| panic!("mul_ceil: {err}"))
}

/// Calculate `x * denominator / y`, rounding toward zero
///
/// ### Panics
/// If `y` is zero or the result does not fit in an i128
pub fn div_floor(x: i128, y: i128, denominator: i128) -> i128 {
    checked_div_floor(x, y, denominator).unwrap_or_else(|err| panic!("div_floor: {err}"))
}

/// Calculate `x * denominator / y`, rounding toward zero and adding one on a positive remainder
///
/// ### Panics
/// If `y` is zero or the result does not fit in an i128
pub fn div_ceil(x: i128, y: i128, denominator: i128) -> i128 {
    checked_div_ceil(x, y, denominator).unwrap_or_else(|err| panic!("div_ceil: {err}"))
}
