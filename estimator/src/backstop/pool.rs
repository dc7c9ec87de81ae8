use fixed_math::checked_mul_floor;
use serde::{Deserialize, Serialize};

use crate::{require_nonnegative, EstimateError};

/// The balance of a pool's backstop
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolBalance {
    pub shares: i128, // the amount of shares the pool has issued
    pub tokens: i128, // the number of tokens the pool holds in the backstop
    pub q4w: i128,    // the number of shares queued for withdrawal
}

impl PoolBalance {
    /// Convert a token balance to a share balance based on the current pool state
    ///
    /// ### Arguments
    /// * `tokens` - the token balance to convert
    pub fn convert_to_shares(&self, tokens: i128) -> Result<i128, EstimateError> {
        if self.shares == 0 {
            return Ok(tokens);
        }
        Ok(checked_mul_floor(tokens, self.shares, self.tokens)?)
    }

    /// Convert a pool share balance to a token balance based on the current pool state
    ///
    /// ### Arguments
    /// * `shares` - the pool share balance to convert
    pub fn convert_to_tokens(&self, shares: i128) -> Result<i128, EstimateError> {
        if self.shares == 0 {
            return Ok(shares);
        }
        Ok(checked_mul_floor(shares, self.tokens, self.shares)?)
    }

    /// The number of shares that are not queued for withdrawal
    ///
    /// ### Errors
    /// If more shares are queued than exist
    pub fn non_queued_shares(&self) -> Result<i128, EstimateError> {
        let non_queued = self.shares - self.q4w;
        require_nonnegative(non_queued)?;
        Ok(non_queued)
    }

    /// The fraction of shares queued for withdrawal
    ///
    /// Returns 0 if no shares exist
    pub fn q4w_percent(&self) -> f64 {
        if self.shares == 0 {
            return 0.0;
        }
        self.q4w as f64 / self.shares as f64
    }
}
