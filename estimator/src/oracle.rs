use std::collections::HashMap;

use fixed_math::{to_float, Scaled};
use serde::{Deserialize, Serialize};

/// A snapshot of oracle prices sharing a single decimal precision
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    pub prices: HashMap<String, i128>, // Map of asset id to price
    pub decimals: u32,                 // the decimals of every price in the table
    pub latest_ledger: u32,            // the ledger the prices were read at
}

impl PriceData {
    pub fn new(decimals: u32, latest_ledger: u32) -> Self {
        PriceData {
            prices: HashMap::new(),
            decimals,
            latest_ledger,
        }
    }

    /// Set the price for an asset, replacing any existing price
    pub fn set_price(&mut self, asset: &str, price: i128) {
        self.prices.insert(asset.to_string(), price);
    }

    /// Fetch the price for an asset, if one exists
    pub fn price(&self, asset: &str) -> Option<Scaled> {
        self.prices
            .get(asset)
            .map(|price| Scaled::new(*price, self.decimals))
    }

    /// Fetch the price for an asset as a float, if one exists
    pub fn price_float(&self, asset: &str) -> Option<f64> {
        self.prices
            .get(asset)
            .map(|price| to_float(*price, self.decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_lookup() {
        let mut oracle = PriceData::new(14, 123);
        oracle.set_price("XLM", 0_12000000000000);

        assert_eq!(oracle.price("XLM"), Some(Scaled::new(0_12000000000000, 14)));
        assert_eq!(oracle.price_float("XLM"), Some(0.12));
        assert_eq!(oracle.price("USDC"), None);
        assert_eq!(oracle.price_float("USDC"), None);
        assert_eq!(oracle.latest_ledger, 123);
    }
}
