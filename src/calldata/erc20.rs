//! ERC-20 calls

use ethers_core::abi::Token as AbiToken;
use ethers_core::types::U256;

use super::encode::{address_arg, encode_function_data};
use crate::amount::CurrencyAmount;
use crate::error::SdkResult;

pub const APPROVE: &str = "approve(address,uint256)";
pub const TRANSFER: &str = "transfer(address,uint256)";
pub const TRANSFER_FROM: &str = "transferFrom(address,address,uint256)";

pub fn approve(spender: &str, amount: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(APPROVE, &[address_arg("spender", spender)?, AbiToken::Uint(amount)])
}

/// Approve exactly `amount` smallest units, truncated toward zero
pub fn approve_amount(spender: &str, amount: &CurrencyAmount) -> SdkResult<Vec<u8>> {
    approve(spender, amount.to_u256()?)
}

pub fn transfer(to: &str, amount: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(TRANSFER, &[address_arg("to", to)?, AbiToken::Uint(amount)])
}

pub fn transfer_from(from: &str, to: &str, amount: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(
        TRANSFER_FROM,
        &[
            address_arg("from", from)?,
            address_arg("to", to)?,
            AbiToken::Uint(amount),
        ],
    )
}
