/********** Numbers **********/

/// Decimals of backstop shares and LP tokens
pub const BACKSTOP_DECIMALS: u32 = 7;

/// Utilization rate where the interest curve enters its final segment (95%)
pub const UTIL_CUTOFF: i128 = 0_9500000;

/// Width of the final utilization segment (5%)
pub const UTIL_CUTOFF_REMAINDER: i128 = 0_0500000;

/// Compounding periods per year used to estimate borrow APY (daily)
pub const BORROW_COMPOUNDING_PERIODS: f64 = 365.0;

/// Compounding periods per year used to estimate supply APY (weekly)
pub const SUPPLY_COMPOUNDING_PERIODS: f64 = 52.0;

/// Share of the backstop LP token's value held as USDC
pub const LP_USDC_WEIGHT: f64 = 0.2;
