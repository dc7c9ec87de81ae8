use std::collections::HashMap;

use estimator::{
    BackstopToken, EmissionConfig, EmissionData, PoolBalance, PoolConfig, PriceData, Reserve,
    ReserveConfig, ReserveData,
};
use serde::Deserialize;

pub const SCALAR_7: i128 = 1_000_0000;
pub const SCALAR_12: i128 = 1_000_000_000_000;

/// The timestamp every reserve and emission index in the snapshot was last updated at
pub const SNAPSHOT_TIME: u64 = 1699885727;

const POOL_SNAPSHOT: &str = include_str!("../fixtures/pool_snapshot.json");

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TokenIndex {
    XLM = 0,
    USDC = 1,
    WETH = 2,
    STABLE = 3,
}

impl TokenIndex {
    pub fn asset(&self) -> &'static str {
        match self {
            TokenIndex::XLM => "XLM",
            TokenIndex::USDC => "USDC",
            TokenIndex::WETH => "WETH",
            TokenIndex::STABLE => "STABLE",
        }
    }
}

#[derive(Deserialize)]
struct ReserveSnapshot {
    asset: String,
    config: ReserveConfig,
    data: ReserveData,
}

#[derive(Deserialize)]
struct LpSnapshot {
    blnd: i128,
    usdc: i128,
    shares: i128,
}

#[derive(Deserialize)]
struct BackstopSnapshot {
    pool_balance: PoolBalance,
    lp: LpSnapshot,
    emission_config: EmissionConfig,
    emission_data: EmissionData,
}

#[derive(Deserialize)]
struct PoolSnapshot {
    pool_config: PoolConfig,
    reserves: Vec<ReserveSnapshot>,
    prices: PriceData,
    backstop: BackstopSnapshot,
}

pub struct BackstopFixture {
    pub pool_balance: PoolBalance,
    pub token: BackstopToken,
    pub emission_config: EmissionConfig,
    pub emission_data: EmissionData,
}

pub struct TestFixture {
    pub pool_config: PoolConfig,
    pub reserves: HashMap<String, Reserve>,
    pub oracle: PriceData,
    pub backstop: BackstopFixture,
}

impl TestFixture {
    /// Create a new TestFixture from the "Teapot" pool snapshot
    ///
    /// Loads XLM (0), USDC (1), wETH (2, 9 decimals), and STABLE (3, 6 decimals, unpriced)
    /// reserves, an oracle with 7 decimal prices, and the pool's backstop with its BLND:USDC LP
    /// token and emissions.
    pub fn create() -> TestFixture {
        let snapshot: PoolSnapshot =
            serde_json::from_str(POOL_SNAPSHOT).expect("invalid pool snapshot");

        let mut reserves = HashMap::new();
        for reserve in snapshot.reserves {
            let loaded = Reserve::load(
                &snapshot.pool_config,
                &reserve.asset,
                reserve.config,
                reserve.data,
            )
            .expect("invalid reserve");
            reserves.insert(reserve.asset, loaded);
        }

        let lp = snapshot.backstop.lp;
        TestFixture {
            pool_config: snapshot.pool_config,
            reserves,
            oracle: snapshot.prices,
            backstop: BackstopFixture {
                pool_balance: snapshot.backstop.pool_balance,
                token: BackstopToken::new(lp.blnd, lp.usdc, lp.shares),
                emission_config: snapshot.backstop.emission_config,
                emission_data: snapshot.backstop.emission_data,
            },
        }
    }

    pub fn reserve(&self, token: TokenIndex) -> &Reserve {
        &self.reserves[token.asset()]
    }

    /// Replace a reserve's data and reload its rates
    pub fn set_reserve_data(&mut self, token: TokenIndex, data: ReserveData) {
        let config = self.reserve(token).config.clone();
        let reserve = Reserve::load(&self.pool_config, token.asset(), config, data)
            .expect("invalid reserve");
        self.reserves.insert(token.asset().to_string(), reserve);
    }
}
