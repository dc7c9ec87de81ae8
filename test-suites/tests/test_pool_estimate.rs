#![cfg(test)]

use std::collections::HashMap;

use estimator::{PoolEstimate, Positions, PositionsEstimate, ReserveData};
use test_suites::{
    assertions::{assert_approx_eq_abs, assert_approx_eq_rel},
    test_fixture::{TestFixture, TokenIndex, SCALAR_12, SNAPSHOT_TIME},
};

/// Test pool totals are priced across reserves with different decimals
#[test]
fn test_pool_estimate() {
    let fixture = TestFixture::create();

    let estimate = PoolEstimate::build(&fixture.reserves, &fixture.oracle).unwrap();

    // XLM: 110k supplied, 78k borrowed @ 0.1
    // USDC: 10k supplied, 8k borrowed @ 1
    // wETH: 10 supplied, 5 borrowed @ 2000
    // STABLE: unpriced
    assert_approx_eq_abs(estimate.total_supply, 11_000.0 + 10_000.0 + 20_000.0, 1e-6);
    assert_approx_eq_abs(estimate.total_borrowed, 7_800.0 + 8_000.0 + 10_000.0, 1e-6);

    let xlm = fixture.reserve(TokenIndex::XLM);
    let usdc = fixture.reserve(TokenIndex::USDC);
    let weth = fixture.reserve(TokenIndex::WETH);
    let expected_apy = (7_800.0 * xlm.est_borrow_apy
        + 8_000.0 * usdc.est_borrow_apy
        + 10_000.0 * weth.est_borrow_apy)
        / 25_800.0;
    assert_approx_eq_rel(estimate.avg_borrow_apy, expected_apy, 1e-9);
    assert!(estimate.avg_borrow_apy > 0.0);
}

/// Test an unpriced reserve contributes nothing, even once it has liabilities
#[test]
fn test_pool_estimate_unpriced_reserve_ignored() {
    let mut fixture = TestFixture::create();
    let before = PoolEstimate::build(&fixture.reserves, &fixture.oracle).unwrap();

    fixture.set_reserve_data(
        TokenIndex::STABLE,
        ReserveData {
            d_rate: SCALAR_12,
            b_rate: SCALAR_12,
            ir_mod: 1_0000000,
            b_supply: 5_000_000_000,
            d_supply: 4_000_000_000,
            backstop_credit: 0,
            last_time: SNAPSHOT_TIME,
        },
    );
    let after = PoolEstimate::build(&fixture.reserves, &fixture.oracle).unwrap();

    assert_eq!(before, after);
}

/// Test removing every price zeroes the estimate
#[test]
fn test_pool_estimate_no_prices() {
    let mut fixture = TestFixture::create();
    fixture.oracle.prices.clear();

    let estimate = PoolEstimate::build(&fixture.reserves, &fixture.oracle).unwrap();

    assert_eq!(estimate, PoolEstimate::default());
    assert_eq!(
        PoolEstimate::build(&HashMap::new(), &fixture.oracle).unwrap(),
        PoolEstimate::default()
    );
}

/// Test the borrow rate tracks utilization across the interest curve
#[test]
fn test_reserve_rates_follow_utilization() {
    let mut fixture = TestFixture::create();
    let usdc = fixture.reserve(TokenIndex::USDC);
    // at the 80% target util: r_base + r_one
    assert_eq!(usdc.utilization().unwrap(), 0_8000000);
    assert_approx_eq_abs(usdc.borrow_apr, 0.07, 1e-12);
    // 0.07 * 0.8 * (1 - 0.1)
    assert_approx_eq_abs(usdc.supply_apr, 0.0504, 1e-12);

    let mut data = usdc.data.clone();
    data.d_supply = 9_750_0000000;
    fixture.set_reserve_data(TokenIndex::USDC, data);
    let usdc = fixture.reserve(TokenIndex::USDC);
    // above the 95% cutoff: 0.5 * r_three + r_base + r_one + r_two
    assert_eq!(usdc.utilization().unwrap(), 0_9750000);
    assert_approx_eq_abs(usdc.borrow_apr, 0.5 + 0.03 + 0.04 + 0.2, 1e-12);
    assert!(usdc.est_borrow_apy > usdc.borrow_apr);
}

/// Test a user's positions are valued through the collateral and liability factors
#[test]
fn test_positions_estimate() {
    let fixture = TestFixture::create();
    let mut positions = Positions::default();
    // 10k XLM b_tokens @ 1.1 rate, 1k USDC d_tokens @ 1.0 rate, 1 wETH non-collateral supply
    positions
        .collateral
        .insert(TokenIndex::XLM as u32, 10_000_0000000);
    positions
        .liabilities
        .insert(TokenIndex::USDC as u32, 1_000_0000000);
    positions
        .supply
        .insert(TokenIndex::WETH as u32, 1_000_000_000);
    positions
        .collateral
        .insert(TokenIndex::STABLE as u32, 1_000_000_000);

    let estimate =
        PositionsEstimate::build(&fixture.reserves, &fixture.oracle, &positions).unwrap();

    assert_approx_eq_abs(estimate.total_supplied, 1_100.0 + 2_000.0, 1e-6);
    assert_approx_eq_abs(estimate.total_borrowed, 1_000.0, 1e-6);
    assert_approx_eq_abs(estimate.total_effective_collateral, 1_100.0 * 0.75, 1e-6);
    assert_approx_eq_abs(estimate.total_effective_liabilities, 1_000.0 / 0.95, 1e-6);
    assert!(estimate.borrow_cap < 0.0);
    assert!(estimate.borrow_limit > 1.0);
}
