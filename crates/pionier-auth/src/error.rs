use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password or unknown username — deliberately one variant, so
    /// callers cannot leak which part failed.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unknown or expired session")]
    UnknownSession,

    #[error("password hashing failed: {0}")]
    Hash(String),
}
