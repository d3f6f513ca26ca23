//! pionier-core
//!
//! Pure domain types: translation records, history grouping, the supported
//! language set, and request validation. No SDK dependency — this is the
//! shared vocabulary of the Pionier system.

pub mod error;
pub mod language;
pub mod models;
pub mod validate;
