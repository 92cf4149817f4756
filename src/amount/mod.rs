//! Fractional amount support
//!
//! `FractionalAmount` does exact rational arithmetic; `CurrencyAmount` tags it
//! with the asset it is denominated in.

pub mod currency;
pub mod fraction;

pub use currency::*;
pub use fraction::*;
