//! The UI-facing operations.
//!
//! One `App` per process. Every operation after login takes the session
//! token the caller got back — there is no ambient current-user state.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use pionier_auth::credentials::CredentialTable;
use pionier_auth::sessions::SessionStore;
use pionier_bedrock::error::BedrockError;
use pionier_core::language::Language;
use pionier_core::models::{group_by_date, DayGroup, Session, TranslationRecord};
use pionier_core::validate::TranslationRequest;
use pionier_history::HistoryStore;

use crate::config::AppConfig;
use crate::error::AppError;

/// The seam over the external translation provider.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BedrockError>;
}

/// Production translator: one Converse call per request.
pub struct BedrockTranslator {
    sdk_config: aws_config::SdkConfig,
    model_id: String,
}

impl BedrockTranslator {
    pub fn new(sdk_config: aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            sdk_config,
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl Translator for BedrockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BedrockError> {
        pionier_bedrock::translate(&self.sdk_config, &self.model_id, text, source, target).await
    }
}

pub struct App {
    credentials: CredentialTable,
    sessions: SessionStore,
    history: HistoryStore,
    translator: Arc<dyn Translator>,
}

impl App {
    pub fn new(
        credentials: CredentialTable,
        history: HistoryStore,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            credentials,
            sessions: SessionStore::new(),
            history,
            translator,
        }
    }

    /// Build the production app from loaded configuration.
    pub async fn from_config(config: AppConfig) -> Self {
        let sdk_config =
            pionier_bedrock::build_sdk_config(&config.region, &config.credentials).await;
        let translator = Arc::new(BedrockTranslator::new(sdk_config, config.model_id));
        Self::new(
            config.users,
            HistoryStore::new(config.history_path),
            translator,
        )
    }

    /// Verify credentials and open a session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        Ok(self.sessions.login(&self.credentials, username, password).await?)
    }

    /// Close a session. Idempotent.
    pub async fn logout(&self, token: Uuid) {
        self.sessions.logout(token).await;
    }

    /// Translate and log one request.
    ///
    /// Validation runs before the gateway is invoked; a provider failure
    /// surfaces as an error and leaves history untouched.
    pub async fn translate(
        &self,
        token: Uuid,
        request: TranslationRequest,
    ) -> Result<TranslationRecord, AppError> {
        let session = self.sessions.resolve(token).await?;
        request.validate()?;

        let translation = self
            .translator
            .translate(&request.text, request.source, request.target)
            .await
            .map_err(|e| {
                warn!(username = %session.username, error = %e, "provider call failed");
                e
            })?;

        let record = TranslationRecord::now(
            request.text,
            translation,
            request.source.display_name(),
            request.target.display_name(),
        );
        self.history.append(&session.username, record.clone()).await?;

        info!(
            username = %session.username,
            source = request.source.code(),
            target = request.target.code(),
            "translation logged"
        );
        Ok(record)
    }

    /// A user's full history, grouped by date, most recent date first.
    pub async fn history(&self, token: Uuid) -> Result<Vec<DayGroup>, AppError> {
        let session = self.sessions.resolve(token).await?;
        let log = self.history.load(&session.username).await;
        Ok(group_by_date(&log))
    }
}
