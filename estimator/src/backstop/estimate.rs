use fixed_math::to_float;
use serde::Serialize;

use crate::{
    backstop::{BackstopToken, PoolBalance, UserBalance},
    constants::BACKSTOP_DECIMALS,
    EstimateError,
};

/// The underlying value of a pool's backstop
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BackstopPoolEstimate {
    pub blnd: f64,
    pub usdc: f64,
    pub total_spot_value: f64,
    pub q4w_percentage: f64, // the fraction of backstop shares queued for withdrawal
}

impl BackstopPoolEstimate {
    /// Estimate the underlying value of a pool's backstop
    ///
    /// ### Arguments
    /// * `pool_balance` - The backstop balance of the pool
    /// * `blnd_per_lp_token` - BLND held per LP token
    /// * `usdc_per_lp_token` - USDC held per LP token
    /// * `lp_token_price` - The spot price of one LP token
    pub fn build(
        pool_balance: &PoolBalance,
        blnd_per_lp_token: f64,
        usdc_per_lp_token: f64,
        lp_token_price: f64,
    ) -> BackstopPoolEstimate {
        let tokens = to_float(pool_balance.tokens, BACKSTOP_DECIMALS);
        BackstopPoolEstimate {
            blnd: tokens * blnd_per_lp_token,
            usdc: tokens * usdc_per_lp_token,
            total_spot_value: tokens * lp_token_price,
            q4w_percentage: pool_balance.q4w_percent(),
        }
    }
}

/// The underlying value of a user's backstop deposit
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BackstopUserEstimate {
    pub tokens: f64, // LP tokens backing the user's shares, including queued shares
    pub blnd: f64,
    pub usdc: f64,
    pub total_spot_value: f64,
    pub total_q4w: f64,    // LP tokens queued for withdrawal
    pub unlocked_q4w: f64, // LP tokens queued for withdrawal that can be withdrawn
}

impl BackstopUserEstimate {
    /// Estimate the underlying value of a user's backstop deposit at `timestamp`
    ///
    /// ### Arguments
    /// * `pool_balance` - The backstop balance of the pool
    /// * `token` - The backstop LP token composition
    /// * `user_balance` - The user's backstop balance for the pool
    /// * `timestamp` - The time queued withdrawals are checked against
    pub fn build(
        pool_balance: &PoolBalance,
        token: &BackstopToken,
        user_balance: &UserBalance,
        timestamp: u64,
    ) -> Result<BackstopUserEstimate, EstimateError> {
        let total_q4w = user_balance.total_q4w();
        let tokens = to_float(
            pool_balance.convert_to_tokens(user_balance.shares + total_q4w)?,
            BACKSTOP_DECIMALS,
        );
        let q4w_tokens = to_float(
            pool_balance.convert_to_tokens(total_q4w)?,
            BACKSTOP_DECIMALS,
        );
        let unlocked_tokens = to_float(
            pool_balance.convert_to_tokens(user_balance.unlocked_q4w(timestamp))?,
            BACKSTOP_DECIMALS,
        );

        Ok(BackstopUserEstimate {
            tokens,
            blnd: tokens * token.blnd_per_lp_token,
            usdc: tokens * token.usdc_per_lp_token,
            total_spot_value: tokens * token.lp_token_price,
            total_q4w: q4w_tokens,
            unlocked_q4w: unlocked_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backstop::Q4W;

    #[test]
    fn test_build_pool_estimate() {
        let pool_balance = PoolBalance {
            shares: 100_000_0000000,
            tokens: 125_000_0000000,
            q4w: 25_000_0000000,
        };

        let estimate = BackstopPoolEstimate::build(&pool_balance, 10.0, 0.25, 1.25);

        assert!((estimate.blnd - 1_250_000.0).abs() < 1e-6);
        assert!((estimate.usdc - 31_250.0).abs() < 1e-6);
        assert!((estimate.total_spot_value - 156_250.0).abs() < 1e-6);
        assert!((estimate.q4w_percentage - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_build_pool_estimate_empty() {
        let estimate = BackstopPoolEstimate::build(&PoolBalance::default(), 10.0, 0.25, 1.25);

        assert_eq!(estimate, BackstopPoolEstimate::default());
    }

    #[test]
    fn test_build_user_estimate() {
        let pool_balance = PoolBalance {
            shares: 100_0000000,
            tokens: 200_0000000,
            q4w: 10_0000000,
        };
        let token = BackstopToken::new(5_000_000_0000000, 100_000_0000000, 500_000_0000000);
        let user_balance = UserBalance {
            shares: 5_0000000,
            q4w: vec![
                Q4W {
                    amount: 2_0000000,
                    exp: 1000,
                },
                Q4W {
                    amount: 3_0000000,
                    exp: 3000,
                },
            ],
        };

        let estimate =
            BackstopUserEstimate::build(&pool_balance, &token, &user_balance, 2000).unwrap();

        assert!((estimate.tokens - 20.0).abs() < 1e-9);
        assert!((estimate.blnd - 200.0).abs() < 1e-9);
        assert!((estimate.usdc - 4.0).abs() < 1e-9);
        assert!((estimate.total_spot_value - 20.0).abs() < 1e-9);
        assert!((estimate.total_q4w - 10.0).abs() < 1e-9);
        assert!((estimate.unlocked_q4w - 4.0).abs() < 1e-9);
    }
}
