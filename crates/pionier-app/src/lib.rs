//! pionier-app
//!
//! The orchestration layer a UI talks to: configuration loaded at process
//! start, and the login / translate / history / logout operations wired
//! across the verifier, the gateway, and the history store.

pub mod config;
pub mod error;
pub mod service;
