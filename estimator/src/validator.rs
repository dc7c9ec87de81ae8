use crate::EstimateError;

/// Require that an amount is not negative
///
/// ### Arguments
/// * `amount` - The amount to check
///
/// ### Errors
/// If the number is negative
pub fn require_nonnegative(amount: i128) -> Result<(), EstimateError> {
    if amount.is_negative() {
        return Err(EstimateError::NegativeAmount);
    }
    Ok(())
}
