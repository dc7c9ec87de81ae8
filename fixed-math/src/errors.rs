use thiserror::Error;

/// Errors produced by scaled-integer arithmetic.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("scale mismatch: {left} decimals vs {right} decimals")]
    ScaleMismatch { left: u32, right: u32 },

    #[error("unsupported scale: {0} decimals")]
    UnsupportedScale(u32),
}
