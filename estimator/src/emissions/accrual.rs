use cast::i128;
use fixed_math::{checked_div_floor, scalar, to_float, MathError, Scaled, DECIMALS_14};
use tracing::trace;

use crate::{
    emissions::{EmissionConfig, EmissionData, UserEmissions},
    require_nonnegative, EstimateError,
};

impl EmissionData {
    /// Project the emission index forward to `timestamp`
    ///
    /// The index advances by the tokens emitted between `last_time` and the earlier of
    /// `timestamp` and the expiration, divided by `supply` and rounded down. The projected
    /// index carries at least 14 decimals, regardless of the decimals it is stored with.
    ///
    /// ### Arguments
    /// * `config` - The emission configuration
    /// * `supply` - The total supply earning emissions
    /// * `timestamp` - The time to project the index to
    ///
    /// ### Errors
    /// If the index cannot represent the emitted tokens per unit of supply, or the
    /// calculation overflows
    pub fn index_at(
        &self,
        config: &EmissionConfig,
        supply: &Scaled,
        timestamp: u64,
    ) -> Result<Scaled, EstimateError> {
        let index = self
            .index
            .rescale_floor(self.index.decimals.max(DECIMALS_14))?;
        if timestamp <= self.last_time || supply.is_zero() {
            return Ok(index);
        }

        let max_timestamp = timestamp.min(config.expiration);
        let elapsed = (i128(max_timestamp) - i128(self.last_time)).max(0);
        let emitted = elapsed
            .checked_mul(config.eps.value)
            .ok_or(MathError::Overflow)?;

        // index = emitted / supply, expressed in the index's decimals
        let exponent = (supply.decimals + index.decimals)
            .checked_sub(config.eps.decimals)
            .ok_or(EstimateError::InvalidDecimals(config.eps.decimals))?;
        let additional_idx = checked_div_floor(emitted, supply.value, scalar(exponent)?)?;

        trace!(elapsed, emitted, additional_idx, "projected emission index");
        Ok(index.checked_add(&Scaled::new(additional_idx, index.decimals))?)
    }
}

impl UserEmissions {
    /// Estimate the emitted tokens a user has accrued at `timestamp`
    ///
    /// Does not modify the stored emission state.
    ///
    /// ### Arguments
    /// * `config` - The emission configuration
    /// * `data` - The emission index data
    /// * `supply` - The total supply earning emissions
    /// * `balance` - The user's balance earning emissions, in the supply's decimals
    /// * `timestamp` - The time to estimate the accrual at
    ///
    /// ### Errors
    /// If the user's index is not in the same decimals as the emission index or is ahead
    /// of it, or the calculation overflows
    pub fn estimate_accrual(
        &self,
        config: &EmissionConfig,
        data: &EmissionData,
        supply: &Scaled,
        balance: &Scaled,
        timestamp: u64,
    ) -> Result<f64, EstimateError> {
        if timestamp <= data.last_time || supply.is_zero() {
            return Ok(self.accrued.to_float());
        }
        require_same_scale(balance, supply)?;
        require_same_scale(&data.index, &self.index)?;

        let index = data.index_at(config, supply, timestamp)?;
        let user_index = self.index.rescale_floor(index.decimals)?;
        let delta_index = index.checked_sub(&user_index)?;
        require_nonnegative(delta_index.value)?;

        let accrued = self.accrued.to_float() + accrue(balance, &delta_index)?;
        trace!(delta_index = delta_index.value, accrued, "estimated user emissions");
        Ok(accrued)
    }
}

/// Estimate the emitted tokens a user has accrued at `timestamp`
///
/// A user without an emission record is treated as having joined before emissions began,
/// and is due their balance multiplied by the whole index.
///
/// ### Arguments
/// * `user` - The user's emission state, if one exists
/// * `config` - The emission configuration
/// * `data` - The emission index data
/// * `supply` - The total supply earning emissions
/// * `balance` - The user's balance earning emissions
/// * `timestamp` - The time to estimate the accrual at
pub fn estimate_accrual(
    user: Option<&UserEmissions>,
    config: &EmissionConfig,
    data: &EmissionData,
    supply: &Scaled,
    balance: &Scaled,
    timestamp: u64,
) -> Result<f64, EstimateError> {
    match user {
        Some(user) => user.estimate_accrual(config, data, supply, balance, timestamp),
        None if balance.is_zero() => Ok(0.0),
        None => {
            require_same_scale(balance, supply)?;
            let index = data.index_at(config, supply, timestamp)?;
            let accrued = accrue(balance, &index)?;
            trace!(index = index.value, accrued, "estimated emissions without a record");
            Ok(accrued)
        }
    }
}

/// The tokens earned by `balance` over `delta_index`, as a float
fn accrue(balance: &Scaled, delta_index: &Scaled) -> Result<f64, EstimateError> {
    let to_accrue = balance
        .value
        .checked_mul(delta_index.value)
        .ok_or(MathError::Overflow)?;
    Ok(to_float(to_accrue, balance.decimals + delta_index.decimals))
}

fn require_same_scale(left: &Scaled, right: &Scaled) -> Result<(), EstimateError> {
    if left.decimals != right.decimals {
        return Err(MathError::ScaleMismatch {
            left: left.decimals,
            right: right.decimals,
        }
        .into());
    }
    Ok(())
}
