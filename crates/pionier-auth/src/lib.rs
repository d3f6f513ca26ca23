//! pionier-auth
//!
//! Credential verification against a static user table and the explicit
//! session registry that replaces ambient logged-in state.

pub mod credentials;
pub mod error;
pub mod sessions;
