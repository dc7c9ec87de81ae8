use cast::i128;
use fixed_math::{
    checked_div_ceil, checked_div_floor, checked_mul_ceil, checked_mul_floor, scalar, to_float,
    DECIMALS_7, SCALAR_12, SCALAR_7,
};
use tracing::trace;

use crate::{
    constants::{BORROW_COMPOUNDING_PERIODS, SUPPLY_COMPOUNDING_PERIODS},
    pool::{calc_borrow_rate, PoolConfig, ReserveConfig, ReserveData},
    EstimateError,
};

#[derive(Clone, Debug)]
pub struct Reserve {
    pub asset: String,         // the underlying asset id
    pub config: ReserveConfig, // the reserve configuration
    pub data: ReserveData,     // the reserve data
    pub scalar: i128,
    pub borrow_apr: f64,     // the current borrow rate
    pub supply_apr: f64,     // the current supply rate, after the backstop take rate
    pub est_borrow_apy: f64, // the borrow rate compounded daily
    pub est_supply_apy: f64, // the supply rate compounded weekly
}

impl Reserve {
    /// Build a Reserve from a snapshot of its ledger state and estimate its current rates.
    ///
    /// ### Arguments
    /// * pool_config - The pool configuration
    /// * asset - The id of the underlying asset
    /// * config - The reserve configuration
    /// * data - The reserve data
    ///
    /// ### Errors
    /// If the reserve decimals are unsupported or the rate calculation overflows
    pub fn load(
        pool_config: &PoolConfig,
        asset: &str,
        config: ReserveConfig,
        data: ReserveData,
    ) -> Result<Reserve, EstimateError> {
        let scalar = scalar(config.decimals)?;
        let mut reserve = Reserve {
            asset: asset.to_string(),
            config,
            data,
            scalar,
            borrow_apr: 0.0,
            supply_apr: 0.0,
            est_borrow_apy: 0.0,
            est_supply_apy: 0.0,
        };

        let cur_util = reserve.utilization()?;
        let cur_ir = calc_borrow_rate(&reserve.config, cur_util, reserve.data.ir_mod)?;
        let supply_capture =
            checked_mul_floor(SCALAR_7 - i128(pool_config.bstop_rate), cur_util, SCALAR_7)?;
        let supply_ir = checked_mul_floor(cur_ir, supply_capture, SCALAR_7)?;

        reserve.borrow_apr = to_float(cur_ir, DECIMALS_7);
        reserve.supply_apr = to_float(supply_ir, DECIMALS_7);
        reserve.est_borrow_apy = compound(reserve.borrow_apr, BORROW_COMPOUNDING_PERIODS);
        reserve.est_supply_apy = compound(reserve.supply_apr, SUPPLY_COMPOUNDING_PERIODS);
        trace!(
            asset = %reserve.asset,
            util = cur_util,
            borrow_apr = reserve.borrow_apr,
            supply_apr = reserve.supply_apr,
            "loaded reserve"
        );
        Ok(reserve)
    }

    /// Fetch the current utilization rate for the reserve normalized to 7 decimals
    ///
    /// This is capped at 100%.
    pub fn utilization(&self) -> Result<i128, EstimateError> {
        let liabilities = self.total_liabilities()?;
        let supply = self.total_supply()?;
        if liabilities == 0 {
            return Ok(0);
        } else if liabilities >= supply {
            return Ok(SCALAR_7);
        }
        Ok(checked_div_ceil(liabilities, supply, SCALAR_7)?)
    }

    /// Fetch the total liabilities for the reserve in underlying tokens
    pub fn total_liabilities(&self) -> Result<i128, EstimateError> {
        self.to_asset_from_d_token(self.data.d_supply)
    }

    /// Fetch the total supply for the reserve in underlying tokens
    pub fn total_supply(&self) -> Result<i128, EstimateError> {
        self.to_asset_from_b_token(self.data.b_supply)
    }

    /// Fetch the total liabilities for the reserve as a float
    pub fn total_liabilities_float(&self) -> Result<f64, EstimateError> {
        Ok(to_float(self.total_liabilities()?, self.config.decimals))
    }

    /// Fetch the total supply for the reserve as a float
    pub fn total_supply_float(&self) -> Result<f64, EstimateError> {
        Ok(to_float(self.total_supply()?, self.config.decimals))
    }

    /********** Conversion Functions **********/

    /// Convert d_tokens to the corresponding asset value
    pub fn to_asset_from_d_token(&self, d_tokens: i128) -> Result<i128, EstimateError> {
        Ok(checked_mul_ceil(d_tokens, self.data.d_rate, SCALAR_12)?)
    }

    /// Convert b_tokens to the corresponding asset value
    pub fn to_asset_from_b_token(&self, b_tokens: i128) -> Result<i128, EstimateError> {
        Ok(checked_mul_floor(b_tokens, self.data.b_rate, SCALAR_12)?)
    }

    /// Convert d_tokens to their corresponding effective asset value. This
    /// takes into account the liability factor.
    pub fn to_effective_asset_from_d_token(&self, d_tokens: i128) -> Result<i128, EstimateError> {
        let assets = self.to_asset_from_d_token(d_tokens)?;
        Ok(checked_div_ceil(
            assets,
            i128(self.config.l_factor),
            SCALAR_7,
        )?)
    }

    /// Convert b_tokens to the corresponding effective asset value. This
    /// takes into account the collateral factor.
    pub fn to_effective_asset_from_b_token(&self, b_tokens: i128) -> Result<i128, EstimateError> {
        let assets = self.to_asset_from_b_token(b_tokens)?;
        Ok(checked_mul_floor(
            assets,
            i128(self.config.c_factor),
            SCALAR_7,
        )?)
    }

    /// Convert asset tokens to the corresponding d token value - rounding up
    pub fn to_d_token_up(&self, amount: i128) -> Result<i128, EstimateError> {
        Ok(checked_div_ceil(amount, self.data.d_rate, SCALAR_12)?)
    }

    /// Convert asset tokens to the corresponding d token value - rounding down
    pub fn to_d_token_down(&self, amount: i128) -> Result<i128, EstimateError> {
        Ok(checked_div_floor(amount, self.data.d_rate, SCALAR_12)?)
    }

    /// Convert asset tokens to the corresponding b token value - round up
    pub fn to_b_token_up(&self, amount: i128) -> Result<i128, EstimateError> {
        Ok(checked_div_ceil(amount, self.data.b_rate, SCALAR_12)?)
    }

    /// Convert asset tokens to the corresponding b token value - round down
    pub fn to_b_token_down(&self, amount: i128) -> Result<i128, EstimateError> {
        Ok(checked_div_floor(amount, self.data.b_rate, SCALAR_12)?)
    }
}

fn compound(apr: f64, periods: f64) -> f64 {
    (1.0 + apr / periods).powf(periods) - 1.0
}
