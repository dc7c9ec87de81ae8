use cast::i128;
use fixed_math::{checked_div_ceil, checked_mul_ceil, SCALAR_7};

use crate::{
    constants::{UTIL_CUTOFF, UTIL_CUTOFF_REMAINDER},
    pool::ReserveConfig,
    EstimateError,
};

/// Calculate the current borrow rate for a reserve
///
/// Returns the annual borrow rate expressed in 7 decimals
///
/// ### Arguments
/// * `config` - The reserve configuration
/// * `cur_util` - The current utilization rate of the reserve, expressed in 7 decimals
/// * `ir_mod` - The current interest rate modifier, expressed in 7 decimals
pub fn calc_borrow_rate(
    config: &ReserveConfig,
    cur_util: i128,
    ir_mod: i128,
) -> Result<i128, EstimateError> {
    let target_util = i128(config.util);
    let r_base = i128(config.r_base);
    let r_one = i128(config.r_one);
    let r_two = i128(config.r_two);

    let cur_ir = if cur_util <= target_util {
        let util_scalar = if cur_util == 0 {
            0
        } else {
            checked_div_ceil(cur_util, target_util, SCALAR_7)?
        };
        let base_rate = checked_mul_ceil(util_scalar, r_one, SCALAR_7)? + r_base;
        checked_mul_ceil(base_rate, ir_mod, SCALAR_7)?
    } else if cur_util <= UTIL_CUTOFF {
        let util_scalar =
            checked_div_ceil(cur_util - target_util, UTIL_CUTOFF - target_util, SCALAR_7)?;
        let base_rate = checked_mul_ceil(util_scalar, r_two, SCALAR_7)? + r_one + r_base;
        checked_mul_ceil(base_rate, ir_mod, SCALAR_7)?
    } else {
        let util_scalar =
            checked_div_ceil(cur_util - UTIL_CUTOFF, UTIL_CUTOFF_REMAINDER, SCALAR_7)?;
        let extra_rate = checked_mul_ceil(util_scalar, i128(config.r_three), SCALAR_7)?;
        let intersection = checked_mul_ceil(ir_mod, r_two + r_one + r_base, SCALAR_7)?;
        extra_rate + intersection
    };
    Ok(cur_ir)
}
