//! Balance Aggregation Module
//!
//! Composes native, global, hToken and virtual-account balances of one asset.

pub mod currency_balances;

pub use currency_balances::*;
