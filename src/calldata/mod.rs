//! Calldata builders
//!
//! Free functions per contract family. Each validates its arguments, then
//! hands them to the ABI encoder.

pub mod encode;
pub mod erc20;
pub mod flywheel;
pub mod gauges;

pub use encode::{encode_function_data, to_hex};
