#![cfg(test)]

use estimator::{BackstopPoolEstimate, BackstopToken, BackstopUserEstimate, UserBalance, Q4W};
use test_suites::{
    assertions::assert_approx_eq_abs,
    test_fixture::{TestFixture, SCALAR_7, SNAPSHOT_TIME},
};

/// Test the backstop is valued through the LP token composition
#[test]
fn test_backstop_pool_estimate() {
    let fixture = TestFixture::create();
    let token = &fixture.backstop.token;

    // 5M BLND and 100k USDC backing 500k LP tokens
    assert_approx_eq_abs(token.blnd_per_lp_token, 10.0, 1e-12);
    assert_approx_eq_abs(token.usdc_per_lp_token, 0.2, 1e-12);
    assert_approx_eq_abs(token.lp_token_price, 1.0, 1e-12);

    let estimate = BackstopPoolEstimate::build(
        &fixture.backstop.pool_balance,
        token.blnd_per_lp_token,
        token.usdc_per_lp_token,
        token.lp_token_price,
    );

    // 50k LP tokens in the backstop, 10% of shares queued
    assert_approx_eq_abs(estimate.blnd, 500_000.0, 1e-6);
    assert_approx_eq_abs(estimate.usdc, 10_000.0, 1e-6);
    assert_approx_eq_abs(estimate.total_spot_value, 50_000.0, 1e-6);
    assert_approx_eq_abs(estimate.q4w_percentage, 0.1, 1e-12);
}

/// Test the LP token price follows the USDC side of the pool
#[test]
fn test_backstop_token_price_moves_with_usdc() {
    let token = BackstopToken::new(5_000_000 * SCALAR_7, 150_000 * SCALAR_7, 500_000 * SCALAR_7);

    assert_approx_eq_abs(token.lp_token_price, 1.5, 1e-12);
    assert_approx_eq_abs(token.usdc_per_lp_token, 0.3, 1e-12);
}

/// Test a user's deposit and queued withdrawals are converted to tokens
#[test]
fn test_backstop_user_estimate() {
    let fixture = TestFixture::create();
    // 40k shares for 50k tokens
    let user_balance = UserBalance {
        shares: 8_000 * SCALAR_7,
        q4w: vec![
            Q4W {
                amount: 1_000 * SCALAR_7,
                exp: SNAPSHOT_TIME - 1,
            },
            Q4W {
                amount: 1_000 * SCALAR_7,
                exp: SNAPSHOT_TIME + 17 * 24 * 60 * 60,
            },
        ],
    };

    let estimate = BackstopUserEstimate::build(
        &fixture.backstop.pool_balance,
        &fixture.backstop.token,
        &user_balance,
        SNAPSHOT_TIME,
    )
    .unwrap();

    assert_approx_eq_abs(estimate.tokens, 12_500.0, 1e-6);
    assert_approx_eq_abs(estimate.blnd, 125_000.0, 1e-6);
    assert_approx_eq_abs(estimate.usdc, 2_500.0, 1e-6);
    assert_approx_eq_abs(estimate.total_spot_value, 12_500.0, 1e-6);
    assert_approx_eq_abs(estimate.total_q4w, 2_500.0, 1e-6);
    assert_approx_eq_abs(estimate.unlocked_q4w, 1_250.0, 1e-6);
}
