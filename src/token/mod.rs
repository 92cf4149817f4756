//! Token model
//!
//! Native, global and local (hToken) variants plus an external lookup table
//! for the relations between them.

pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
