use fixed_math::to_float;
use serde::Serialize;

use crate::constants::{BACKSTOP_DECIMALS, LP_USDC_WEIGHT};

/// The composition of the 80/20 BLND:USDC LP token deposited into backstops
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BackstopToken {
    pub blnd: i128,   // the BLND held by the LP
    pub usdc: i128,   // the USDC held by the LP
    pub shares: i128, // the LP tokens issued
    pub blnd_per_lp_token: f64,
    pub usdc_per_lp_token: f64,
    pub lp_token_price: f64, // the spot price of one LP token in USDC
}

impl BackstopToken {
    pub fn new(blnd: i128, usdc: i128, shares: i128) -> BackstopToken {
        let mut token = BackstopToken {
            blnd,
            usdc,
            shares,
            ..Default::default()
        };
        if shares == 0 {
            return token;
        }
        let blnd_float = to_float(blnd, BACKSTOP_DECIMALS);
        let usdc_float = to_float(usdc, BACKSTOP_DECIMALS);
        let shares_float = to_float(shares, BACKSTOP_DECIMALS);

        token.blnd_per_lp_token = blnd_float / shares_float;
        token.usdc_per_lp_token = usdc_float / shares_float;
        token.lp_token_price = (usdc_float / LP_USDC_WEIGHT) / shares_float;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_backstop_token() {
        let token = BackstopToken::new(5_000_000_0000000, 100_000_0000000, 500_000_0000000);

        assert!((token.blnd_per_lp_token - 10.0).abs() < 1e-12);
        assert!((token.usdc_per_lp_token - 0.2).abs() < 1e-12);
        assert!((token.lp_token_price - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_new_backstop_token_no_shares() {
        let token = BackstopToken::new(0, 0, 0);

        assert_eq!(token.lp_token_price, 0.0);
        assert_eq!(token.blnd_per_lp_token, 0.0);
    }
}
