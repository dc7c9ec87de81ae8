//! Display estimates for lending pools, backstops and emissions.
//!
//! Ledger state is consumed as already-decoded scaled integers. Integer math follows
//! the on-chain rounding rules exactly and the results are converted to floats only
//! at the end.

mod constants;
pub use constants::*;

mod errors;
pub use errors::EstimateError;

mod validator;
pub use validator::require_nonnegative;

mod oracle;
pub use oracle::PriceData;

pub mod backstop;
pub mod emissions;
pub mod pool;

pub use backstop::{
    BackstopPoolEstimate, BackstopToken, BackstopUserEstimate, PoolBalance, UserBalance, Q4W,
};
pub use emissions::{EmissionConfig, EmissionData, UserEmissions};
pub use pool::{
    PoolConfig, PoolEstimate, Positions, PositionsEstimate, Reserve, ReserveConfig, ReserveData,
};
