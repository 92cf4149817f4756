//! Token variants
//!
//! Assets exist in three shapes: the chain's native currency, the canonical
//! global token living on the root chain, and local hTokens that wrap the
//! global token on every other chain. A local token refers to its global
//! counterpart by `TokenId` only; resolution goes through a `TokenRegistry`.

use crate::error::{SdkError, SdkResult};
use crate::types::{checksummed, parse_address, Address, ChainId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies a token by chain and contract address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId {
    pub chain_id: ChainId,
    pub address: Address,
}

impl TokenId {
    pub fn new(chain_id: ChainId, address: Address) -> Self {
        Self { chain_id, address }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, checksummed(&self.address))
    }
}

/// Payload shared by every token variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl TokenInfo {
    pub fn new(chain_id: ChainId, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    pub fn parse(chain_id: ChainId, address: &str, decimals: u8) -> SdkResult<Self> {
        Ok(Self::new(chain_id, parse_address("token_address", address)?, decimals))
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> TokenId {
        TokenId::new(self.chain_id, self.address)
    }
}

/// Which variant a token is, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Native,
    Global,
    Local,
}

/// A currency the contract systems know about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    /// The chain's gas token; its address is the zero address
    Native { info: TokenInfo },
    /// Canonical representation on the root chain
    Global {
        info: TokenInfo,
        /// Local (hToken) address of this asset on each branch chain
        local_addresses: BTreeMap<ChainId, Address>,
    },
    /// Chain-local wrapped representation (hToken)
    Local { info: TokenInfo, global: TokenId },
}

impl Token {
    pub fn native(chain_id: ChainId, decimals: u8, symbol: impl Into<String>) -> Self {
        Token::Native {
            info: TokenInfo::new(chain_id, Address::zero(), decimals).with_symbol(symbol),
        }
    }

    pub fn global(info: TokenInfo) -> Self {
        Token::Global {
            info,
            local_addresses: BTreeMap::new(),
        }
    }

    pub fn local(info: TokenInfo, global: TokenId) -> Self {
        Token::Local { info, global }
    }

    /// Record the hToken address of a global token on a branch chain
    pub fn with_local_address(mut self, chain_id: ChainId, address: Address) -> SdkResult<Self> {
        match &mut self {
            Token::Global { local_addresses, .. } => {
                local_addresses.insert(chain_id, address);
                Ok(self)
            }
            other => Err(SdkError::invalid_argument(format!(
                "local addresses can only be attached to a global token, got {:?}",
                other.kind()
            ))),
        }
    }

    pub fn info(&self) -> &TokenInfo {
        match self {
            Token::Native { info } | Token::Global { info, .. } | Token::Local { info, .. } => info,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Native { .. } => TokenKind::Native,
            Token::Global { .. } => TokenKind::Global,
            Token::Local { .. } => TokenKind::Local,
        }
    }

    pub fn id(&self) -> TokenId {
        self.info().id()
    }

    pub fn chain_id(&self) -> ChainId {
        self.info().chain_id
    }

    pub fn address(&self) -> Address {
        self.info().address
    }

    pub fn decimals(&self) -> u8 {
        self.info().decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.info().symbol.as_deref()
    }

    pub fn is_native(&self) -> bool {
        self.kind() == TokenKind::Native
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{} ({})", symbol, self.id()),
            None => write!(f, "{}", self.id()),
        }
    }
}

/// Two tokens denote the same asset: same variant, chain, address and
/// decimals.
///
/// Metadata (symbol, name, local address tables) does not take part.
pub fn equals(a: &Token, b: &Token) -> bool {
    if a.kind() != b.kind() || a.chain_id() != b.chain_id() || a.decimals() != b.decimals() {
        return false;
    }
    match (a, b) {
        (Token::Native { .. }, Token::Native { .. }) => true,
        _ => a.address() == b.address(),
    }
}

/// Address ordering between two contract tokens on the same chain, as used
/// when sorting pool pairs.
pub fn sorts_before(a: &Token, b: &Token) -> SdkResult<bool> {
    if a.is_native() || b.is_native() {
        return Err(SdkError::invalid_argument("native currency has no address ordering"));
    }
    if a.chain_id() != b.chain_id() {
        return Err(SdkError::invalid_argument(format!(
            "tokens are on different chains: {} vs {}",
            a.chain_id(),
            b.chain_id()
        )));
    }
    if a.address() == b.address() {
        return Err(SdkError::invalid_argument(format!(
            "tokens share the address {}",
            checksummed(&a.address())
        )));
    }
    Ok(a.address().as_bytes() < b.address().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(chain_id: ChainId, byte: u8) -> TokenInfo {
        TokenInfo::new(chain_id, Address::repeat_byte(byte), 18)
    }

    #[test]
    fn test_equals_ignores_metadata() {
        let a = Token::global(info(42161, 0x11).with_symbol("USDC"));
        let b = Token::global(info(42161, 0x11).with_symbol("usdc"))
            .with_local_address(1, Address::repeat_byte(0x22))
            .unwrap();
        assert!(equals(&a, &b));
    }

    #[test]
    fn test_equals_distinguishes_variant_and_chain() {
        let global = Token::global(info(42161, 0x11));
        let local = Token::local(info(42161, 0x11), global.id());
        assert!(!equals(&global, &local));

        let other_chain = Token::global(info(1, 0x11));
        assert!(!equals(&global, &other_chain));
    }

    #[test]
    fn test_equals_distinguishes_decimals() {
        let six = Token::global(TokenInfo::new(42161, Address::repeat_byte(0x42), 6));
        let eighteen = Token::global(TokenInfo::new(42161, Address::repeat_byte(0x42), 18));
        assert!(!equals(&six, &eighteen));
        assert!(!equals(&Token::native(1, 18, "ETH"), &Token::native(1, 9, "ETH")));
    }

    #[test]
    fn test_native_equality_by_chain() {
        assert!(equals(&Token::native(1, 18, "ETH"), &Token::native(1, 18, "ETH")));
        assert!(!equals(&Token::native(1, 18, "ETH"), &Token::native(10, 18, "ETH")));
    }

    #[test]
    fn test_sorts_before() {
        let low = Token::global(info(1, 0x01));
        let high = Token::global(info(1, 0x02));
        assert!(sorts_before(&low, &high).unwrap());
        assert!(!sorts_before(&high, &low).unwrap());
    }

    #[test]
    fn test_sorts_before_rejects_invalid_pairs() {
        let a = Token::global(info(1, 0x01));
        assert!(sorts_before(&a, &a.clone()).unwrap_err().is_invalid_argument());
        assert!(sorts_before(&a, &Token::global(info(10, 0x02))).is_err());
        assert!(sorts_before(&a, &Token::native(1, 18, "ETH")).is_err());
    }

    #[test]
    fn test_local_address_only_on_global() {
        let local = Token::local(info(10, 0x05), TokenId::new(42161, Address::repeat_byte(0x11)));
        let err = local.with_local_address(1, Address::zero()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
