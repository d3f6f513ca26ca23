//! pionier-bedrock
//!
//! The translation gateway: one Converse call per translation against a
//! Bedrock-hosted model. The provider is an opaque collaborator — this
//! crate builds the instruction, sends the text, and returns the reply.

pub mod config;
pub mod error;
pub mod translate;

pub use config::{build_sdk_config, CredentialSource};
pub use translate::{translate, translation_prompt, DEFAULT_MODEL_ID};
