//! One translation, one Converse call.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;

use pionier_core::language::Language;

use crate::error::BedrockError;

/// Inference profile used when the config does not name one.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// The fixed system instruction, with language names in the user's locale.
pub fn translation_prompt(source: Language, target: Language) -> String {
    format!(
        "Jesteś tłumaczem. Przetłumacz tekst z {} na {}. \
         Odpowiedz wyłącznie tłumaczeniem, bez komentarzy.",
        source.display_name(),
        target.display_name()
    )
}

/// Translate `text` from `source` to `target` and return the model's reply.
///
/// No retries and no timeout policy — one request, one response. Any
/// provider failure comes back as a typed error, never as error text posing
/// as a translation.
pub async fn translate(
    config: &aws_config::SdkConfig,
    model_id: &str,
    text: &str,
    source: Language,
    target: Language,
) -> Result<String, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(text.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(translation_prompt(source, target)))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let translation = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(
        source = source.code(),
        target = target.code(),
        chars_in = text.chars().count(),
        chars_out = translation.chars().count(),
        "translation completed"
    );

    Ok(translation)
}
