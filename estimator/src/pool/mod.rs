mod config;
pub use config::{PoolConfig, ReserveConfig, ReserveData};

mod interest;
pub use interest::calc_borrow_rate;

mod reserve;
pub use reserve::Reserve;

mod estimate;
pub use estimate::PoolEstimate;

mod positions;
pub use positions::{Positions, PositionsEstimate};
