//! Exact scaled-integer arithmetic for protocol amounts.
//!
//! Amounts are `i128` values that represent a real number multiplied by
//! `10^decimals`. Every division-like operation is a multiply-then-divide with an
//! explicit rounding direction, and matches the integer results computed on-chain.

mod constants;
pub use constants::{
    DECIMALS_12, DECIMALS_14, DECIMALS_7, DECIMALS_9, SCALAR_12, SCALAR_14, SCALAR_7, SCALAR_9,
};

mod errors;
pub use errors::MathError;

mod mul_div;
pub use mul_div::{
    checked_div_ceil, checked_div_floor, checked_mul_ceil, checked_mul_floor, div_ceil,
    div_floor, mul_ceil, mul_floor,
};

mod convert;
pub use convert::{scalar, to_fixed, to_float};

mod scaled;
pub use scaled::Scaled;
