use fixed_math::MathError;
use thiserror::Error;

/// Error codes for estimation. Missing prices and emissions are not errors.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum EstimateError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("negative amount")]
    NegativeAmount,

    #[error("invalid decimals: {0}")]
    InvalidDecimals(u32),
}
