// src/state/session.rs
use crate::api::Credentials;

/// In-memory login session. Lives until the window closes.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub credentials: Credentials,
    pub is_authenticated: bool,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.credentials.username
    }
}
