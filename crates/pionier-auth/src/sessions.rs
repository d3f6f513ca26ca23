//! The session registry.
//!
//! Login hands out an opaque token; every later operation resolves the
//! token back to a username. Sessions live in memory only — restarting the
//! process logs everyone out.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use pionier_core::models::Session;

use crate::credentials::CredentialTable;
use crate::error::AuthError;

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify credentials and open a session.
    ///
    /// Returns one generic error for both unknown usernames and wrong
    /// passwords.
    pub async fn login(
        &self,
        credentials: &CredentialTable,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if !credentials.verify(username, password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(username);
        self.sessions
            .lock()
            .await
            .insert(session.token, session.clone());

        info!(username, "session opened");
        Ok(session)
    }

    /// Resolve a token to its session.
    pub async fn resolve(&self, token: Uuid) -> Result<Session, AuthError> {
        self.sessions
            .lock()
            .await
            .get(&token)
            .cloned()
            .ok_or(AuthError::UnknownSession)
    }

    /// Close a session. Unknown tokens are a no-op — logout is idempotent.
    pub async fn logout(&self, token: Uuid) {
        if let Some(session) = self.sessions.lock().await.remove(&token) {
            info!(username = %session.username, "session closed");
        }
    }
}
