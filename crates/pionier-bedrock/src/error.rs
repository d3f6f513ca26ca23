use thiserror::Error;

/// Gateway failures are typed, never substituted for translation output.
/// The caller decides how to render them; they are not persisted to
/// history.
#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("AWS config error: {0}")]
    Config(String),
}
