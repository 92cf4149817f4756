//! Address derivation
//!
//! Predicts CREATE2 vault addresses from a factory, an underlying token and
//! the factory's init-code hash.

pub mod derive;

pub use derive::*;
