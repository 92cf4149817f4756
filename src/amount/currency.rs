//! Amounts tagged with the asset they are denominated in

use ethers_core::types::U256;
use num::bigint::Sign;
use num::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

use super::fraction::{format_scaled, pow10, AmountError, FractionalAmount, Rounding};
use crate::error::{SdkError, SdkResult};
use crate::token::{equals, Token};

/// A quantity of one asset, in smallest units, kept as an exact fraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Token,
    raw: FractionalAmount,
}

impl CurrencyAmount {
    /// Wrap an integer amount of smallest units (e.g. wei)
    pub fn from_raw_amount(currency: Token, raw: impl Into<BigInt>) -> Self {
        Self {
            currency,
            raw: FractionalAmount::from_integer(raw),
        }
    }

    pub fn from_u256(currency: Token, raw: U256) -> Self {
        let mut bytes = [0u8; 32];
        raw.to_big_endian(&mut bytes);
        Self::from_raw_amount(currency, BigInt::from_bytes_be(Sign::Plus, &bytes))
    }

    /// Wrap a fractional amount of smallest units
    pub fn from_fractional_amount(
        currency: Token,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> SdkResult<Self> {
        Ok(Self {
            currency,
            raw: FractionalAmount::new(numerator, denominator)?,
        })
    }

    pub fn from_fraction(currency: Token, raw: FractionalAmount) -> Self {
        Self { currency, raw }
    }

    pub fn zero(currency: Token) -> Self {
        Self::from_fraction(currency, FractionalAmount::zero())
    }

    pub fn currency(&self) -> &Token {
        &self.currency
    }

    pub fn raw(&self) -> &FractionalAmount {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Fails with `AssetMismatch` unless `other` is denominated in the same asset
    pub fn ensure_same_currency(&self, other: &Token) -> SdkResult<()> {
        if equals(&self.currency, other) {
            Ok(())
        } else {
            Err(SdkError::asset_mismatch(format!(
                "amount in {} cannot be combined with {}",
                self.currency, other
            )))
        }
    }

    pub fn add(&self, other: &CurrencyAmount) -> SdkResult<CurrencyAmount> {
        self.ensure_same_currency(&other.currency)?;
        Ok(Self::from_fraction(self.currency.clone(), self.raw.add(&other.raw)))
    }

    pub fn sub(&self, other: &CurrencyAmount) -> SdkResult<CurrencyAmount> {
        self.ensure_same_currency(&other.currency)?;
        Ok(Self::from_fraction(self.currency.clone(), self.raw.sub(&other.raw)))
    }

    pub fn multiply(&self, factor: &FractionalAmount) -> CurrencyAmount {
        Self::from_fraction(self.currency.clone(), self.raw.mul(factor))
    }

    pub fn divide(&self, divisor: &FractionalAmount) -> SdkResult<CurrencyAmount> {
        Ok(Self::from_fraction(self.currency.clone(), self.raw.div(divisor)?))
    }

    /// Smallest units, truncated toward zero
    pub fn quotient(&self) -> BigInt {
        self.raw.quotient()
    }

    /// Smallest units as a uint256 contract argument
    pub fn to_u256(&self) -> SdkResult<U256> {
        let units = self.quotient();
        let (sign, bytes) = units.to_bytes_be();
        if sign == Sign::Minus {
            return Err(AmountError::Negative(units.to_string()).into());
        }
        if bytes.len() > 32 {
            return Err(AmountError::Overflow(units.to_string()).into());
        }
        Ok(U256::from_big_endian(&bytes))
    }

    /// Amount in whole tokens, i.e. smallest units over `10^decimals`
    pub fn to_decimal(&self) -> SdkResult<FractionalAmount> {
        self.raw
            .div(&FractionalAmount::from_integer(pow10(self.currency.decimals() as u32)))
    }

    /// Whole-token decimal string, truncated to the token's precision and
    /// without trailing zeros
    pub fn to_exact(&self) -> String {
        let places = self.currency.decimals() as u32;
        let rendered = format_scaled(&self.quotient(), &pow10(places), places);
        if places == 0 {
            return rendered;
        }
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> SdkResult<String> {
        Ok(self.to_decimal()?.to_fixed(decimal_places, rounding))
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency.symbol() {
            Some(symbol) => write!(f, "{} {}", self.to_exact(), symbol),
            None => write!(f, "{}", self.to_exact()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyAmountView<'a> {
    currency: &'a Token,
    raw_amount: String,
    exact: String,
}

impl Serialize for CurrencyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurrencyAmountView {
            currency: &self.currency,
            raw_amount: self.quotient().to_string(),
            exact: self.to_exact(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenInfo;
    use crate::types::Address;

    fn usdc() -> Token {
        Token::global(TokenInfo::new(42161, Address::repeat_byte(0xaa), 6).with_symbol("USDC"))
    }

    fn weth() -> Token {
        Token::global(TokenInfo::new(42161, Address::repeat_byte(0xbb), 18).with_symbol("WETH"))
    }

    #[test]
    fn test_add_same_currency() {
        let a = CurrencyAmount::from_raw_amount(usdc(), 1_500_000u64);
        let b = CurrencyAmount::from_raw_amount(usdc(), 250_000u64);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.quotient(), BigInt::from(1_750_000u64));
        assert_eq!(sum.to_exact(), "1.75");
    }

    #[test]
    fn test_add_different_currency_fails() {
        let a = CurrencyAmount::from_raw_amount(usdc(), 1u64);
        let b = CurrencyAmount::from_raw_amount(weth(), 1u64);
        let err = a.add(&b).unwrap_err();
        assert!(err.is_asset_mismatch());
        assert!(a.sub(&b).unwrap_err().is_asset_mismatch());
    }

    #[test]
    fn test_add_same_address_other_decimals_fails() {
        let usdc_18 = Token::global(TokenInfo::new(42161, Address::repeat_byte(0xaa), 18));
        let a = CurrencyAmount::from_raw_amount(usdc(), 1_000_000u64);
        let b = CurrencyAmount::from_raw_amount(usdc_18, 10u64.pow(18));
        assert!(a.add(&b).unwrap_err().is_asset_mismatch());
    }

    #[test]
    fn test_to_u256() {
        let amount = CurrencyAmount::from_raw_amount(weth(), 10u64.pow(18));
        assert_eq!(amount.to_u256().unwrap(), U256::exp10(18));

        let negative = CurrencyAmount::zero(weth())
            .sub(&CurrencyAmount::from_raw_amount(weth(), 1u64))
            .unwrap();
        assert!(negative.to_u256().unwrap_err().is_invalid_argument());

        let huge = CurrencyAmount::from_raw_amount(weth(), num::pow(BigInt::from(2u8), 256));
        assert!(huge.to_u256().is_err());
    }

    #[test]
    fn test_from_u256_max() {
        let amount = CurrencyAmount::from_u256(weth(), U256::MAX);
        assert_eq!(amount.to_u256().unwrap(), U256::MAX);
    }

    #[test]
    fn test_fractional_quotient_truncates() {
        let amount = CurrencyAmount::from_fractional_amount(usdc(), 10u64, 3u64).unwrap();
        assert_eq!(amount.quotient(), BigInt::from(3));
        assert_eq!(amount.to_exact(), "0.000003");
    }

    #[test]
    fn test_to_fixed() {
        let amount = CurrencyAmount::from_raw_amount(usdc(), 1_234_567u64);
        assert_eq!(amount.to_fixed(2, Rounding::Down).unwrap(), "1.23");
        assert_eq!(amount.to_fixed(2, Rounding::HalfUp).unwrap(), "1.23");
        assert_eq!(amount.to_fixed(4, Rounding::HalfUp).unwrap(), "1.2346");
    }

    #[test]
    fn test_display_and_serialize() {
        let amount = CurrencyAmount::from_raw_amount(usdc(), 2_000_000u64);
        assert_eq!(amount.to_string(), "2 USDC");

        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json["rawAmount"], "2000000");
        assert_eq!(json["exact"], "2");
        assert_eq!(json["currency"]["kind"], "global");
    }
}
