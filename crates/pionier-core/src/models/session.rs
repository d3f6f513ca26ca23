use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session.
///
/// Issued by the session store on successful login and passed back by the
/// caller on every subsequent operation. Replaces the ambient logged-in
/// flag of the previous generation of this tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub username: String,
    pub logged_in_at: jiff::Timestamp,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            token: Uuid::new_v4(),
            username: username.into(),
            logged_in_at: jiff::Timestamp::now(),
        }
    }
}
