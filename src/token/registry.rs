//! Token lookup table
//!
//! Owns every known token keyed by `TokenId`. Local tokens point at their
//! global counterpart by id, so the graph never holds owning cycles.

use super::types::{Token, TokenId, TokenKind};
use crate::error::{SdkError, SdkResult};
use crate::types::{Address, ChainId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<TokenId, Token>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, replacing any earlier entry with the same id
    pub fn insert(&mut self, token: Token) -> Option<Token> {
        self.tokens.insert(token.id(), token)
    }

    pub fn get(&self, id: &TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens registered on `chain_id`
    pub fn on_chain(&self, chain_id: ChainId) -> Vec<&Token> {
        let mut tokens: Vec<&Token> = self
            .tokens
            .values()
            .filter(|t| t.chain_id() == chain_id)
            .collect();
        tokens.sort_by_key(|t| t.id());
        tokens
    }

    /// Resolve the global token behind a local or global token
    pub fn global_of(&self, token: &Token) -> SdkResult<&Token> {
        let id = match token {
            Token::Global { .. } => token.id(),
            Token::Local { global, .. } => *global,
            Token::Native { .. } => {
                return Err(SdkError::invalid_argument(format!(
                    "native currency {} has no global token",
                    token
                )))
            }
        };

        let global = self.tokens.get(&id).ok_or_else(|| {
            SdkError::invalid_argument(format!("global token {} is not registered", id))
        })?;
        if global.kind() != TokenKind::Global {
            return Err(SdkError::invalid_argument(format!(
                "token {} is registered as {:?}, not global",
                id,
                global.kind()
            )));
        }
        Ok(global)
    }

    /// Address of this asset's local representation on `chain_id`.
    ///
    /// On the global token's own chain this is the global address itself.
    pub fn local_address(&self, token: &Token, chain_id: ChainId) -> SdkResult<Address> {
        let global = self.global_of(token)?;
        if global.chain_id() == chain_id {
            return Ok(global.address());
        }
        match global {
            Token::Global { local_addresses, .. } => {
                local_addresses.get(&chain_id).copied().ok_or_else(|| {
                    SdkError::invalid_argument(format!(
                        "{} has no local token on chain {}",
                        global, chain_id
                    ))
                })
            }
            _ => Err(SdkError::internal("global_of returned a non-global token")),
        }
    }
}
