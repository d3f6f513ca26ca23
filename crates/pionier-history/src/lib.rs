//! pionier-history
//!
//! The history store: one shared file-backed JSON table mapping username to
//! an append-only translation log.

pub mod error;
pub mod store;

pub use store::HistoryStore;
