/********** Numbers **********/

/// Decimals used by standard token amounts
pub const DECIMALS_7: u32 = 7;

/// Decimals used by higher precision indexes and rates
pub const DECIMALS_9: u32 = 9;

/// Decimals used by compounding rate accumulators
pub const DECIMALS_12: u32 = 12;

/// Fixed-point scalar for 7 decimal numbers
pub const SCALAR_7: i128 = 1_0000000;

/// Fixed-point scalar for 9 decimal numbers
pub const SCALAR_9: i128 = 1_000_000_000;

/// Fixed-point scalar for 12 decimal numbers
pub const SCALAR_12: i128 = 1_000_000_000_000;

/// Decimals used by reward emission indexes
pub const DECIMALS_14: u32 = 14;

/// Fixed-point scalar for 14 decimal numbers
pub const SCALAR_14: i128 = 1_0000000_0000000;
