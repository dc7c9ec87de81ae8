use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{pool::Reserve, EstimateError, PriceData};

/// Pool-wide totals, denominated in the oracle's base asset
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PoolEstimate {
    pub total_supply: f64,
    pub total_borrowed: f64,
    pub avg_borrow_apy: f64, // the borrow APY weighted by borrowed value
}

impl PoolEstimate {
    /// Estimate the value supplied to and borrowed from a pool
    ///
    /// Reserves without an oracle price are skipped and do not contribute to any total.
    ///
    /// ### Arguments
    /// * `reserves` - Map of asset id to the pool's reserve for that asset
    /// * `oracle` - The prices for the pool's assets
    pub fn build(
        reserves: &HashMap<String, Reserve>,
        oracle: &PriceData,
    ) -> Result<PoolEstimate, EstimateError> {
        let mut total_supply = 0.0;
        let mut total_borrowed = 0.0;
        let mut total_interest = 0.0;
        for (asset, reserve) in reserves.iter() {
            let price = match oracle.price_float(asset) {
                Some(price) => price,
                None => {
                    debug!(asset = %asset, "skipping reserve without an oracle price");
                    continue;
                }
            };
            let supplied = reserve.total_supply_float()? * price;
            let borrowed = reserve.total_liabilities_float()? * price;

            total_supply += supplied;
            total_borrowed += borrowed;
            total_interest += borrowed * reserve.est_borrow_apy;
        }

        let avg_borrow_apy = if total_borrowed != 0.0 {
            total_interest / total_borrowed
        } else {
            0.0
        };
        Ok(PoolEstimate {
            total_supply,
            total_borrowed,
            avg_borrow_apy,
        })
    }
}
