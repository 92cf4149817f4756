//! bHermes gauge weights and vote delegation
//!
//! Gauge weights are `uint112` on chain; anything wider is rejected here
//! rather than reverting on chain.

use ethers_core::abi::Token as AbiToken;
use ethers_core::types::U256;

use super::encode::{address_arg, address_list_arg, encode_function_data, uint_arg};
use crate::error::{SdkError, SdkResult};

pub const WEIGHT_BITS: usize = 112;

pub const INCREMENT_GAUGE: &str = "incrementGauge(address,uint112)";
pub const INCREMENT_GAUGES: &str = "incrementGauges(address[],uint112[])";
pub const DECREMENT_GAUGE: &str = "decrementGauge(address,uint112)";
pub const DECREMENT_GAUGES: &str = "decrementGauges(address[],uint112[])";
pub const DELEGATE: &str = "delegate(address)";
pub const INCREMENT_DELEGATION: &str = "incrementDelegation(address,uint256)";
pub const UNDELEGATE: &str = "undelegate(address,uint256)";

pub fn increment_gauge(gauge: &str, weight: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(
        INCREMENT_GAUGE,
        &[address_arg("gauge", gauge)?, uint_arg("weight", weight, WEIGHT_BITS)?],
    )
}

pub fn decrement_gauge(gauge: &str, weight: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(
        DECREMENT_GAUGE,
        &[address_arg("gauge", gauge)?, uint_arg("weight", weight, WEIGHT_BITS)?],
    )
}

pub fn increment_gauges(gauges: &[&str], weights: &[U256]) -> SdkResult<Vec<u8>> {
    encode_function_data(INCREMENT_GAUGES, &gauge_list_args(gauges, weights)?)
}

pub fn decrement_gauges(gauges: &[&str], weights: &[U256]) -> SdkResult<Vec<u8>> {
    encode_function_data(DECREMENT_GAUGES, &gauge_list_args(gauges, weights)?)
}

pub fn delegate(delegatee: &str) -> SdkResult<Vec<u8>> {
    encode_function_data(DELEGATE, &[address_arg("delegatee", delegatee)?])
}

pub fn increment_delegation(delegatee: &str, amount: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(
        INCREMENT_DELEGATION,
        &[address_arg("delegatee", delegatee)?, AbiToken::Uint(amount)],
    )
}

pub fn undelegate(delegatee: &str, amount: U256) -> SdkResult<Vec<u8>> {
    encode_function_data(
        UNDELEGATE,
        &[address_arg("delegatee", delegatee)?, AbiToken::Uint(amount)],
    )
}

fn gauge_list_args(gauges: &[&str], weights: &[U256]) -> SdkResult<[AbiToken; 2]> {
    if gauges.is_empty() {
        return Err(SdkError::invalid_argument("gauge list is empty"));
    }
    if gauges.len() != weights.len() {
        return Err(SdkError::invalid_argument(format!(
            "{} gauges but {} weights",
            gauges.len(),
            weights.len()
        )));
    }

    let gauge_tokens = address_list_arg("gauges", gauges)?
        .into_iter()
        .map(AbiToken::Address)
        .collect();
    let weight_tokens = weights
        .iter()
        .enumerate()
        .map(|(i, w)| uint_arg(&format!("weights[{}]", i), *w, WEIGHT_BITS))
        .collect::<SdkResult<Vec<_>>>()?;

    Ok([AbiToken::Array(gauge_tokens), AbiToken::Array(weight_tokens)])
}
