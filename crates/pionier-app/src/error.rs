use thiserror::Error;

use pionier_auth::error::AuthError;
use pionier_bedrock::error::BedrockError;
use pionier_core::validate::ValidationError;
use pionier_history::error::HistoryError;

/// The failure taxonomy of one user interaction.
///
/// None of these is fatal to the process. History *read* failures never
/// appear here — the store masks them as empty history.
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong or unknown credentials, or a stale session token. One
    /// user-visible message for all of them.
    #[error("invalid credentials")]
    Authentication(#[from] AuthError),

    /// Rejected before the gateway is invoked.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The provider failed. The error is rendered as an error, never
    /// stored or shown as a translation.
    #[error("translation failed: {0}")]
    Provider(#[from] BedrockError),

    /// The completed translation could not be persisted.
    #[error("could not save history: {0}")]
    Persistence(#[from] HistoryError),
}
