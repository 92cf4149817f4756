//! Deterministic vault addresses
//!
//! Vault factories deploy with CREATE2, so a vault's address is known before
//! it exists:
//!
//! `address = keccak256(0xff ++ factory ++ salt ++ init_code_hash)[12..]`
//!
//! where `salt` is the underlying token's 20 address bytes followed by 12
//! zero bytes.

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use crate::{log_debug, log_warn};
use crate::types::{checksummed, parse_address, Address, ChainId, InitCodeHash};
use crate::utils::crypto::keccak256;

const CREATE2_PREFIX: u8 = 0xff;

/// 32-byte CREATE2 salt for a vault wrapping `underlying`
pub fn derivation_salt(underlying: &Address) -> [u8; 32] {
    let mut salt = [0u8; 32];
    salt[..20].copy_from_slice(underlying.as_bytes());
    salt
}

/// CREATE2 address from already-validated inputs
pub fn create2_address(factory: &Address, salt: &[u8; 32], init_code_hash: &InitCodeHash) -> Address {
    let mut preimage = [0u8; 85];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..21].copy_from_slice(factory.as_bytes());
    preimage[21..53].copy_from_slice(salt);
    preimage[53..].copy_from_slice(init_code_hash.as_bytes());

    Address::from_slice(&keccak256(&preimage)[12..])
}

/// Vault address for `underlying` from typed inputs
pub fn derive_address_bytes(
    factory: &Address,
    underlying: &Address,
    init_code_hash: &InitCodeHash,
) -> Address {
    create2_address(factory, &derivation_salt(underlying), init_code_hash)
}

/// Vault address for `underlying`, as a checksummed hex string.
///
/// The factory address and init-code hash are validated before any hashing;
/// a malformed or empty value fails with `InvalidArgument` naming the
/// parameter.
pub fn derive_address(
    factory_address: &str,
    underlying_address: &str,
    init_code_hash: &str,
) -> SdkResult<String> {
    let factory = parse_address("factory_address", factory_address)?;
    let init_code_hash = InitCodeHash::parse("init_code_hash", init_code_hash)?;
    let underlying = parse_address("underlying_address", underlying_address)?;

    let derived = checksummed(&derive_address_bytes(&factory, &underlying, &init_code_hash));

    log_debug!(
        "address",
        "derived vault address",
        factory = checksummed(&factory),
        underlying = checksummed(&underlying),
        vault = derived,
    );

    Ok(derived)
}

/// Vault address for `underlying` using the factory deployed on `chain_id`
pub fn compute_vault_address(
    config: &SdkConfig,
    chain_id: ChainId,
    underlying_address: &str,
) -> SdkResult<String> {
    let Some(deployment) = config.deployment(chain_id) else {
        log_warn!("address", "no vault factory configured", chain_id = chain_id);
        return Err(SdkError::invalid_argument(format!(
            "no vault factory configured for chain {}",
            chain_id
        )));
    };
    let underlying = parse_address("underlying_address", underlying_address)?;

    Ok(checksummed(&derive_address_bytes(
        &deployment.vault_factory,
        &underlying,
        &deployment.vault_init_code_hash,
    )))
}
