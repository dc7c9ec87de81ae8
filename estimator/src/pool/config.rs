use serde::{Deserialize, Serialize};

/// The pool's config
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub oracle: String,     // the address of the oracle contract
    pub bstop_rate: u32,    // the rate the backstop takes on accrued debt interest, expressed in 7 decimals
    pub status: u32,        // the status of the pool
    pub max_positions: u32, // the maximum number of effective positions a single user can hold
}

/// The configuration information about a reserve asset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveConfig {
    pub index: u32,       // the index of the reserve in the list
    pub decimals: u32,    // the decimals used in both the bToken and underlying contract
    pub c_factor: u32,    // the collateral factor for the reserve scaled expressed in 7 decimals
    pub l_factor: u32,    // the liability factor for the reserve scaled expressed in 7 decimals
    pub util: u32,        // the target utilization rate scaled expressed in 7 decimals
    pub max_util: u32,    // the maximum allowed utilization rate scaled expressed in 7 decimals
    pub r_base: u32,      // the R0 value (base rate) in the interest rate formula scaled expressed in 7 decimals
    pub r_one: u32,       // the R1 value in the interest rate formula scaled expressed in 7 decimals
    pub r_two: u32,       // the R2 value in the interest rate formula scaled expressed in 7 decimals
    pub r_three: u32,     // the R3 value in the interest rate formula scaled expressed in 7 decimals
    pub reactivity: u32,  // the reactivity constant for the reserve scaled expressed in 7 decimals
    pub supply_cap: i128, // the total amount of underlying tokens that can be used as collateral
    pub enabled: bool,    // the flag of the reserve
}

/// The data for a reserve asset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveData {
    pub d_rate: i128,          // the conversion rate from dToken to underlying with 12 decimals
    pub b_rate: i128,          // the conversion rate from bToken to underlying with 12 decimals
    pub ir_mod: i128,          // the interest rate curve modifier with 7 decimals
    pub b_supply: i128,        // the total supply of b tokens, in the underlying token's decimals
    pub d_supply: i128,        // the total supply of d tokens, in the underlying token's decimals
    pub backstop_credit: i128, // the amount of underlying tokens currently owed to the backstop
    pub last_time: u64,        // the last block the data was updated
}
