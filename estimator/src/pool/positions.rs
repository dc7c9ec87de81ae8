use std::collections::HashMap;

use fixed_math::to_float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{pool::Reserve, EstimateError, PriceData};

/// A user's positions with the pool, stored in the Reserve's decimals
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positions {
    pub liabilities: HashMap<u32, i128>, // Map of Reserve Index to liability share balance
    pub collateral: HashMap<u32, i128>,  // Map of Reserve Index to collateral supply share balance
    pub supply: HashMap<u32, i128>,      // Map of Reserve Index to non-collateral supply share balance
}

impl Positions {
    /// Get the number of effective (impacts health factor) positions the user holds.
    pub fn effective_count(&self) -> usize {
        self.liabilities.len() + self.collateral.len()
    }
}

/// A user's position totals, denominated in the oracle's base asset
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PositionsEstimate {
    pub total_borrowed: f64,
    pub total_supplied: f64,
    pub total_effective_liabilities: f64,
    pub total_effective_collateral: f64,
    pub borrow_cap: f64,   // effective collateral left after effective liabilities
    pub borrow_limit: f64, // effective liabilities over effective collateral
    pub net_apy: f64,
    pub supply_apy: f64,
    pub borrow_apy: f64,
}

impl PositionsEstimate {
    /// Estimate a user's positions in a pool
    ///
    /// Positions in reserves without an oracle price are skipped.
    ///
    /// ### Arguments
    /// * `reserves` - Map of asset id to the pool's reserve for that asset
    /// * `oracle` - The prices for the pool's assets
    /// * `positions` - The user's share balances
    pub fn build(
        reserves: &HashMap<String, Reserve>,
        oracle: &PriceData,
        positions: &Positions,
    ) -> Result<PositionsEstimate, EstimateError> {
        let mut estimate = PositionsEstimate::default();
        let mut supply_interest = 0.0;
        let mut borrow_interest = 0.0;

        for (asset, reserve) in reserves.iter() {
            let index = reserve.config.index;
            let d_tokens = positions.liabilities.get(&index).copied().unwrap_or(0);
            let collateral = positions.collateral.get(&index).copied().unwrap_or(0);
            let supply = positions.supply.get(&index).copied().unwrap_or(0);
            if d_tokens == 0 && collateral == 0 && supply == 0 {
                continue;
            }
            let price = match oracle.price_float(asset) {
                Some(price) => price,
                None => {
                    debug!(asset = %asset, "skipping position without an oracle price");
                    continue;
                }
            };
            let decimals = reserve.config.decimals;

            let borrowed = to_float(reserve.to_asset_from_d_token(d_tokens)?, decimals) * price;
            let supplied =
                to_float(reserve.to_asset_from_b_token(collateral + supply)?, decimals) * price;
            let effective_liabilities =
                to_float(reserve.to_effective_asset_from_d_token(d_tokens)?, decimals) * price;
            let effective_collateral =
                to_float(reserve.to_effective_asset_from_b_token(collateral)?, decimals) * price;

            estimate.total_borrowed += borrowed;
            estimate.total_supplied += supplied;
            estimate.total_effective_liabilities += effective_liabilities;
            estimate.total_effective_collateral += effective_collateral;
            borrow_interest += borrowed * reserve.est_borrow_apy;
            supply_interest += supplied * reserve.est_supply_apy;
        }

        estimate.borrow_cap =
            estimate.total_effective_collateral - estimate.total_effective_liabilities;
        if estimate.total_effective_collateral != 0.0 {
            estimate.borrow_limit =
                estimate.total_effective_liabilities / estimate.total_effective_collateral;
        }
        if estimate.total_supplied != 0.0 {
            estimate.supply_apy = supply_interest / estimate.total_supplied;
            estimate.net_apy = (supply_interest - borrow_interest) / estimate.total_supplied;
        }
        if estimate.total_borrowed != 0.0 {
            estimate.borrow_apy = borrow_interest / estimate.total_borrowed;
        }
        Ok(estimate)
    }
}
