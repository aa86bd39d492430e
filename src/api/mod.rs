// src/api/mod.rs
use std::fmt;
use std::path::Path;
use crate::config::{AnalysisSummary, RecordId, UploadRecord};

pub mod http;

pub use http::HttpApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("credentials were rejected")]
    Unauthorized,
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read upload: {0}")]
    File(#[from] std::io::Error),
}

/// Username and password sent as a Basic-Auth header on every call.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

// Never print the password
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// Core trait for the remote analytics service
pub trait AnalyticsApi: Send {
    /// Authorization probe. Succeeds only if the server accepts the credentials.
    fn verify_credentials(&self, credentials: &Credentials) -> Result<(), ApiError>;
    fn list_history(&self, credentials: &Credentials) -> Result<Vec<UploadRecord>, ApiError>;
    fn upload(&self, credentials: &Credentials, file: &Path) -> Result<AnalysisSummary, ApiError>;
    fn fetch_report(&self, credentials: &Credentials, id: RecordId) -> Result<Vec<u8>, ApiError>;
    fn delete_record(&self, credentials: &Credentials, id: RecordId) -> Result<(), ApiError>;
}
