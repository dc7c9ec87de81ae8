use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    convert::{scalar, to_fixed, to_float},
    mul_div::{checked_div_ceil, checked_div_floor, checked_mul_ceil, checked_mul_floor},
    MathError,
};

/// A fixed-point number that carries its own decimal places
///
/// Addition and subtraction require both operands to share the same decimals. Use
/// `rescale_floor` or `rescale_ceil` to convert between scales explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scaled {
    pub value: i128,
    pub decimals: u32,
}

impl Scaled {
    pub const fn new(value: i128, decimals: u32) -> Scaled {
        Scaled { value, decimals }
    }

    pub const fn zero(decimals: u32) -> Scaled {
        Scaled { value: 0, decimals }
    }

    /// Create a Scaled number from a float, flooring any precision past `decimals`
    pub fn from_float(value: f64, decimals: u32) -> Scaled {
        Scaled {
            value: to_fixed(value, decimals),
            decimals,
        }
    }

    pub fn to_float(&self) -> f64 {
        to_float(self.value, self.decimals)
    }

    /// The fixed-point scalar for this number, `10^decimals`
    pub fn scalar(&self) -> Result<i128, MathError> {
        scalar(self.decimals)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn require_same_scale(&self, other: &Scaled) -> Result<(), MathError> {
        if self.decimals != other.decimals {
            return Err(MathError::ScaleMismatch {
                left: self.decimals,
                right: other.decimals,
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &Scaled) -> Result<Scaled, MathError> {
        self.require_same_scale(other)?;
        let value = self
            .value
            .checked_add(other.value)
            .ok_or(MathError::Overflow)?;
        Ok(Scaled::new(value, self.decimals))
    }

    pub fn checked_sub(&self, other: &Scaled) -> Result<Scaled, MathError> {
        self.require_same_scale(other)?;
        let value = self
            .value
            .checked_sub(other.value)
            .ok_or(MathError::Overflow)?;
        Ok(Scaled::new(value, self.decimals))
    }

    /// Compare two numbers of the same scale
    pub fn checked_cmp(&self, other: &Scaled) -> Result<Ordering, MathError> {
        self.require_same_scale(other)?;
        Ok(self.value.cmp(&other.value))
    }

    /// Multiply by `factor`, rounding down. The result keeps this number's decimals.
    pub fn mul_floor(&self, factor: &Scaled) -> Result<Scaled, MathError> {
        let value = checked_mul_floor(self.value, factor.value, factor.scalar()?)?;
        Ok(Scaled::new(value, self.decimals))
    }

    /// Multiply by `factor`, rounding up. The result keeps this number's decimals.
    pub fn mul_ceil(&self, factor: &Scaled) -> Result<Scaled, MathError> {
        let value = checked_mul_ceil(self.value, factor.value, factor.scalar()?)?;
        Ok(Scaled::new(value, self.decimals))
    }

    /// Divide by `divisor`, rounding down. The result keeps this number's decimals.
    pub fn div_floor(&self, divisor: &Scaled) -> Result<Scaled, MathError> {
        let value = checked_div_floor(self.value, divisor.value, divisor.scalar()?)?;
        Ok(Scaled::new(value, self.decimals))
    }

    /// Divide by `divisor`, rounding up. The result keeps this number's decimals.
    pub fn div_ceil(&self, divisor: &Scaled) -> Result<Scaled, MathError> {
        let value = checked_div_ceil(self.value, divisor.value, divisor.scalar()?)?;
        Ok(Scaled::new(value, self.decimals))
    }

    /// Convert to `decimals` decimal places, rounding down
    pub fn rescale_floor(&self, decimals: u32) -> Result<Scaled, MathError> {
        let value = checked_mul_floor(self.value, scalar(decimals)?, self.scalar()?)?;
        Ok(Scaled::new(value, decimals))
    }

    /// Convert to `decimals` decimal places, rounding up
    pub fn rescale_ceil(&self, decimals: u32) -> Result<Scaled, MathError> {
        let value = checked_mul_ceil(self.value, scalar(decimals)?, self.scalar()?)?;
        Ok(Scaled::new(value, decimals))
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.decimals as usize;
        write!(f, "{:.*}", precision, self.to_float())
    }
}
