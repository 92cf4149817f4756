//! Vault share pricing
//!
//! ERC-4626 conversions with a virtual offset of one share and one asset:
//! an empty vault prices 1:1. Results stay exact; reading them as integers
//! rounds down.

use crate::amount::{CurrencyAmount, FractionalAmount};
use crate::error::SdkResult;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPricing {
    total_assets: CurrencyAmount,
    total_supply: CurrencyAmount,
}

impl VaultPricing {
    /// `total_assets` is denominated in the underlying, `total_supply` in the
    /// vault's share token.
    pub fn new(total_assets: CurrencyAmount, total_supply: CurrencyAmount) -> Self {
        Self {
            total_assets,
            total_supply,
        }
    }

    pub fn asset(&self) -> &Token {
        self.total_assets.currency()
    }

    pub fn share(&self) -> &Token {
        self.total_supply.currency()
    }

    /// Underlying smallest units per share smallest unit
    pub fn price_per_share(&self) -> SdkResult<FractionalAmount> {
        let one = FractionalAmount::from(1u64);
        self.total_assets
            .raw()
            .add(&one)
            .div(&self.total_supply.raw().add(&one))
    }

    pub fn convert_to_shares(&self, assets: &CurrencyAmount) -> SdkResult<CurrencyAmount> {
        assets.ensure_same_currency(self.asset())?;
        let shares = assets.raw().div(&self.price_per_share()?)?;
        Ok(CurrencyAmount::from_fraction(self.share().clone(), shares))
    }

    pub fn convert_to_assets(&self, shares: &CurrencyAmount) -> SdkResult<CurrencyAmount> {
        shares.ensure_same_currency(self.share())?;
        let assets = shares.raw().mul(&self.price_per_share()?);
        Ok(CurrencyAmount::from_fraction(self.asset().clone(), assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenInfo;
    use crate::types::Address;
    use num::BigInt;

    fn underlying() -> Token {
        Token::global(TokenInfo::new(42161, Address::repeat_byte(0x01), 18).with_symbol("LP"))
    }

    fn shares_token() -> Token {
        Token::global(TokenInfo::new(42161, Address::repeat_byte(0x02), 18).with_symbol("vLP"))
    }

    fn pricing(assets: u64, supply: u64) -> VaultPricing {
        VaultPricing::new(
            CurrencyAmount::from_raw_amount(underlying(), assets),
            CurrencyAmount::from_raw_amount(shares_token(), supply),
        )
    }

    #[test]
    fn test_empty_vault_prices_one_to_one() {
        let vault = pricing(0, 0);
        let shares = vault
            .convert_to_shares(&CurrencyAmount::from_raw_amount(underlying(), 1000u64))
            .unwrap();
        assert_eq!(shares.quotient(), BigInt::from(1000));
        assert_eq!(shares.currency(), &shares_token());
    }

    #[test]
    fn test_conversions_round_down() {
        // 2 assets per share (with the +1 offsets: 2001 / 1001)
        let vault = pricing(2000, 1000);
        let shares = vault
            .convert_to_shares(&CurrencyAmount::from_raw_amount(underlying(), 100u64))
            .unwrap();
        assert_eq!(shares.quotient(), BigInt::from(50));

        let assets = vault
            .convert_to_assets(&CurrencyAmount::from_raw_amount(shares_token(), 50u64))
            .unwrap();
        assert_eq!(assets.quotient(), BigInt::from(99));
    }

    #[test]
    fn test_wrong_token_rejected() {
        let vault = pricing(10, 10);
        let err = vault
            .convert_to_assets(&CurrencyAmount::from_raw_amount(underlying(), 1u64))
            .unwrap_err();
        assert!(err.is_asset_mismatch());
    }

    #[test]
    fn test_price_per_share() {
        let vault = pricing(2999, 999);
        assert_eq!(vault.price_per_share().unwrap(), FractionalAmount::from(3u64));
    }
}
