//! Shared types for the SDK
//!
//! Data structures that cross module boundaries are defined here so that
//! parsing and rendering rules stay in one place.

use crate::error::{SdkError, SdkResult};
use crate::utils::crypto::to_checksum_address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use ethers_core::types::Address;

/// EVM chain id
pub type ChainId = u64;

// =============================================================================
// Chain Types
// =============================================================================

/// Networks the contract systems are deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
    Ethereum,
    Arbitrum,
    Optimism,
    Base,
    Polygon,
    Bnb,
    Avalanche,
    Metis,
    Sepolia,
    ArbitrumSepolia,
}

impl Chain {
    pub fn chain_id(&self) -> ChainId {
        match self {
            Chain::Ethereum => 1,
            Chain::Arbitrum => 42161,
            Chain::Optimism => 10,
            Chain::Base => 8453,
            Chain::Polygon => 137,
            Chain::Bnb => 56,
            Chain::Avalanche => 43114,
            Chain::Metis => 1088,
            Chain::Sepolia => 11155111,
            Chain::ArbitrumSepolia => 421614,
        }
    }

    pub fn from_chain_id(chain_id: ChainId) -> Option<Self> {
        Self::all().into_iter().find(|c| c.chain_id() == chain_id)
    }

    pub fn all() -> Vec<Chain> {
        vec![
            Chain::Ethereum,
            Chain::Arbitrum,
            Chain::Optimism,
            Chain::Base,
            Chain::Polygon,
            Chain::Bnb,
            Chain::Avalanche,
            Chain::Metis,
            Chain::Sepolia,
            Chain::ArbitrumSepolia,
        ]
    }

}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chain::Ethereum => "ethereum",
            Chain::Arbitrum => "arbitrum",
            Chain::Optimism => "optimism",
            Chain::Base => "base",
            Chain::Polygon => "polygon",
            Chain::Bnb => "bnb",
            Chain::Avalanche => "avalanche",
            Chain::Metis => "metis",
            Chain::Sepolia => "sepolia",
            Chain::ArbitrumSepolia => "arbitrum-sepolia",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Addresses and hashes
// =============================================================================

/// Parse a 20-byte hex address, reporting `param` on failure.
///
/// Accepts any casing with or without the `0x` prefix; checksum casing is not
/// enforced since equality is defined on the bytes.
pub fn parse_address(param: &str, value: &str) -> SdkResult<Address> {
    let bytes = decode_fixed_hex::<20>(param, value)?;
    Ok(Address::from(bytes))
}

/// Render an address in EIP-55 checksum form
pub fn checksummed(address: &Address) -> String {
    to_checksum_address(address.as_bytes())
}

/// Hash of the creation bytecode a factory deploys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitCodeHash(pub [u8; 32]);

impl InitCodeHash {
    pub fn parse(param: &str, value: &str) -> SdkResult<Self> {
        decode_fixed_hex::<32>(param, value).map(InitCodeHash)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for InitCodeHash {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("init_code_hash", s)
    }
}

impl fmt::Display for InitCodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for InitCodeHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InitCodeHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn decode_fixed_hex<const N: usize>(param: &str, value: &str) -> SdkResult<[u8; N]> {
    let trimmed = value.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex_part.is_empty() {
        return Err(SdkError::invalid_argument(format!("{} is empty", param)));
    }
    if hex_part.len() != N * 2 {
        return Err(SdkError::invalid_argument(format!(
            "{} must be {} bytes, got {} hex chars",
            param,
            N,
            hex_part.len()
        )));
    }

    let bytes = hex::decode(hex_part)
        .map_err(|e| SdkError::invalid_argument(format!("{} is not valid hex: {}", param, e)))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_ids_roundtrip() {
        for chain in Chain::all() {
            assert_eq!(Chain::from_chain_id(chain.chain_id()), Some(chain));
        }
        assert_eq!(Chain::from_chain_id(999_999), None);
    }

    #[test]
    fn test_parse_address_is_case_insensitive() {
        let lower = parse_address("token", "0xc71fae5853fa2416b37728d73b51e17a32691e45").unwrap();
        let mixed = parse_address("token", "C71FAe5853fa2416b37728D73B51E17A32691E45").unwrap();
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_parse_address_errors_name_parameter() {
        let err = parse_address("factory_address", "").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message.contains("factory_address"));

        let err = parse_address("factory_address", "0x1234").unwrap_err();
        assert!(err.message.contains("20 bytes"));

        let err = parse_address("factory_address", &format!("0x{}", "zz".repeat(20))).unwrap_err();
        assert!(err.message.contains("not valid hex"));
    }

    #[test]
    fn test_init_code_hash_parse_and_display() {
        let raw = format!("0x{}", "ab".repeat(32));
        let hash: InitCodeHash = raw.parse().unwrap();
        assert_eq!(hash.to_string(), raw);

        let err = "0x".parse::<InitCodeHash>().unwrap_err();
        assert!(err.message.contains("init_code_hash is empty"));
    }

    #[test]
    fn test_checksummed_known_address() {
        // EIP-55 reference vector
        let addr = parse_address("a", "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(checksummed(&addr), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }
}
