mod config;
pub use config::{EmissionConfig, EmissionData, UserEmissions};

mod accrual;
pub use accrual::estimate_accrual;
