//! Exact fractional amounts
//!
//! Token quantities are kept as reduced rationals over big integers until a
//! caller asks for an integer or a decimal string. Rounding happens only at
//! that boundary.

use num::bigint::Sign;
use num::{BigInt, BigRational, Integer, One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SdkError, SdkResult};

/// Errors raised by fractional arithmetic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Denominator must not be zero")]
    ZeroDenominator,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Amount is negative: {0}")]
    Negative(String),

    #[error("Amount does not fit in 256 bits: {0}")]
    Overflow(String),

    #[error("Invalid integer: {0}")]
    InvalidInteger(String),
}

impl From<AmountError> for SdkError {
    fn from(e: AmountError) -> Self {
        SdkError::invalid_argument(e.to_string())
    }
}

/// How to turn a fraction into an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Toward zero
    #[default]
    Down,
    /// Nearest, halves away from zero
    HalfUp,
    /// Away from zero
    Up,
}

/// Exact rational amount; the denominator is always positive and the
/// fraction is kept reduced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FractionalAmount(BigRational);

impl FractionalAmount {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> SdkResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(AmountError::ZeroDenominator.into());
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Parse a decimal integer string such as an RPC balance
    pub fn parse_integer(value: &str) -> SdkResult<Self> {
        let parsed: BigInt = value
            .trim()
            .parse()
            .map_err(|_| AmountError::InvalidInteger(value.to_string()))?;
        Ok(Self::from_integer(parsed))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self(&self.0 - &other.0)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }

    pub fn div(&self, other: &Self) -> SdkResult<Self> {
        if other.is_zero() {
            return Err(AmountError::DivisionByZero.into());
        }
        Ok(Self(&self.0 / &other.0))
    }

    pub fn invert(&self) -> SdkResult<Self> {
        Self::from_integer(1).div(self)
    }

    /// Integer part, truncated toward zero
    pub fn quotient(&self) -> BigInt {
        self.0.to_integer()
    }

    /// What is left after removing the quotient
    pub fn remainder(&self) -> Self {
        Self(self.0.fract())
    }

    pub fn round(&self, rounding: Rounding) -> BigInt {
        match rounding {
            Rounding::Down => self.quotient(),
            Rounding::HalfUp => self.0.round().to_integer(),
            Rounding::Up => {
                let truncated = self.quotient();
                if self.0.is_integer() {
                    truncated
                } else if self.0.is_negative() {
                    truncated - BigInt::one()
                } else {
                    truncated + BigInt::one()
                }
            }
        }
    }

    /// Decimal string with exactly `decimal_places` digits after the point
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let scale = pow10(decimal_places);
        let scaled = Self(&self.0 * BigRational::from_integer(scale.clone())).round(rounding);
        format_scaled(&scaled, &scale, decimal_places)
    }
}

impl Default for FractionalAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for FractionalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FractionalAmount {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for FractionalAmount {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

pub(crate) fn pow10(exp: u32) -> BigInt {
    num::pow(BigInt::from(10u8), exp as usize)
}

/// Render `value / scale` where `scale = 10^places`
pub(crate) fn format_scaled(value: &BigInt, scale: &BigInt, places: u32) -> String {
    let sign = if value.sign() == Sign::Minus { "-" } else { "" };
    let abs = value.abs();
    let (int_part, frac_part) = abs.div_rem(scale);

    if places == 0 {
        return format!("{}{}", sign, int_part);
    }
    format!(
        "{}{}.{:0>width$}",
        sign,
        int_part,
        frac_part.to_string(),
        width = places as usize
    )
}
