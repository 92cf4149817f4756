//! Hermes SDK
//!
//! Client-side helpers for the gauge voting, reward distribution, vault and
//! omnichain token contracts.
//!
//! # Architecture
//!
//! This crate provides:
//! - **address**: CREATE2 vault address derivation
//! - **amount**: exact fractional amounts tagged with their asset
//! - **balances**: aggregation of native, global, hToken and virtual-account balances
//! - **token**: native / global / local token variants and their lookup table
//! - **calldata**: ERC-20, bHermes gauge and flywheel call encoding
//! - **vault**: ERC-4626 share pricing
//! - **config**: per-chain deployment constants
//!
//! Nothing here talks to a node: balances and deployment constants are
//! supplied by the caller, and results are plain values or calldata bytes.
//!
//! # Example
//!
//! ```rust,ignore
//! use hermes_sdk::address::derive_address;
//!
//! let vault = derive_address(factory, underlying, init_code_hash)?;
//! println!("vault will deploy at {}", vault);
//! ```

pub mod utils;

pub mod address;
pub mod amount;
pub mod balances;
pub mod calldata;
pub mod config;
pub mod error;
pub mod token;
pub mod types;
pub mod vault;

pub use error::{ErrorCode, SdkError, SdkResult};
pub use types::*;

pub use address::{compute_vault_address, derive_address, derivation_salt};
pub use amount::{CurrencyAmount, FractionalAmount, Rounding};
pub use balances::{BalanceSet, CombinedBalance, CurrencyBalances, RawBalances, VirtualBalances};
pub use config::SdkConfig;
pub use token::{Token, TokenId, TokenInfo, TokenRegistry};
pub use utils::crypto::{keccak256, to_checksum_address};
