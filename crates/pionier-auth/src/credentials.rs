//! The static credential table.
//!
//! Users are provisioned out-of-band: the table maps username → bcrypt hash
//! and is loaded from configuration at process start. Nothing here creates,
//! deletes, or mutates users at runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

/// Username → bcrypt password hash.
///
/// The stored hash embeds its own salt and cost, so verification needs no
/// extra parameters. Plaintext is never stored or compared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check a login attempt.
    ///
    /// Unknown usernames fail without a hash comparison — there is nothing
    /// to compare against. A malformed stored hash also fails closed. The
    /// returned boolean does not distinguish the cases.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(stored) = self.users.get(username) else {
            debug!(username, "login attempt for unknown user");
            return false;
        };
        bcrypt::verify(password, stored).unwrap_or(false)
    }
}

/// Hash a password for provisioning the credential table.
///
/// Uses the default bcrypt cost. Only the provisioning path calls this;
/// login verification reads the cost out of the stored hash.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}
