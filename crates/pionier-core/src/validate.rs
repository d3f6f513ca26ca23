//! Request validation.
//!
//! Enforced before the translation gateway is ever invoked: the gateway
//! never sees an empty text, an oversized text, or an identical language
//! pair.

use thiserror::Error;

use crate::language::Language;

/// Character ceiling on the source text, matching the input field limit.
pub const MAX_TEXT_CHARS: usize = 5000;

/// A translation request as submitted by the user.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("text is empty")]
    EmptyText,

    #[error("text is too long: {chars} characters (limit {MAX_TEXT_CHARS})")]
    TextTooLong { chars: usize },

    #[error("source and target language are the same: {0}")]
    SameLanguage(Language),
}

impl TranslationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let chars = self.text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(ValidationError::TextTooLong { chars });
        }
        if self.source == self.target {
            return Err(ValidationError::SameLanguage(self.source));
        }
        Ok(())
    }
}
