//! Function-call encoding
//!
//! Selector from the canonical signature, arguments through the `ethers-core`
//! ABI encoder.

use ethers_core::abi::{self, Token as AbiToken};
use ethers_core::types::U256;

use crate::error::{SdkError, SdkResult};
use crate::log_debug;
use crate::types::{parse_address, Address};
use crate::utils::crypto::selector;

/// `selector(signature) ++ abi.encode(args)`
pub fn encode_function_data(signature: &str, args: &[AbiToken]) -> SdkResult<Vec<u8>> {
    validate_signature(signature)?;

    let mut data = selector(signature).to_vec();
    data.extend(abi::encode(args));

    log_debug!(
        "calldata",
        "encoded function call",
        signature = signature,
        calldata = to_hex(&data),
    );
    Ok(data)
}

/// 0x-prefixed hex, the form wallets and RPC endpoints expect
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

fn validate_signature(signature: &str) -> SdkResult<()> {
    let open = signature.find('(');
    let well_formed = match open {
        Some(idx) => {
            idx > 0
                && signature.ends_with(')')
                && !signature.contains(char::is_whitespace)
                && signature[..idx]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(SdkError::invalid_argument(format!(
            "malformed function signature: {:?}",
            signature
        )))
    }
}

pub(crate) fn address_arg(param: &str, value: &str) -> SdkResult<AbiToken> {
    Ok(AbiToken::Address(parse_address(param, value)?))
}

pub(crate) fn address_list_arg(param: &str, values: &[&str]) -> SdkResult<Vec<Address>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| parse_address(&format!("{}[{}]", param, i), v))
        .collect()
}

/// Reject values that do not fit an unsigned integer of `bits` bits
pub(crate) fn uint_arg(param: &str, value: U256, bits: usize) -> SdkResult<AbiToken> {
    if bits < 256 && value.bits() > bits {
        return Err(SdkError::invalid_argument(format!(
            "{} does not fit in uint{}: {}",
            param, bits, value
        )));
    }
    Ok(AbiToken::Uint(value))
}
