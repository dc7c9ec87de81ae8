mod pool;
pub use pool::PoolBalance;

mod user;
pub use user::{UserBalance, Q4W};

mod token;
pub use token::BackstopToken;

mod estimate;
pub use estimate::{BackstopPoolEstimate, BackstopUserEstimate};
