// src/api/http.rs
use std::path::Path;
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::StatusCode;
use tracing::debug;

use super::{AnalyticsApi, ApiError, Credentials};
use crate::config::{AnalysisSummary, RecordId, Settings, UploadRecord};

/// Blocking HTTP client for the analytics backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    origin: String,
}

impl HttpApi {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        // The blocking client defaults to 30s; None waits indefinitely
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        Ok(Self {
            client,
            origin: settings.api_origin.trim_end_matches('/').to_string(),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload/", self.origin)
    }

    pub fn report_url(&self, id: RecordId) -> String {
        format!("{}/api/report/{}/", self.origin, id)
    }

    pub fn delete_url(&self, id: RecordId) -> String {
        format!("{}/api/delete/{}/", self.origin, id)
    }

    fn send(&self, request: RequestBuilder, credentials: &Credentials) -> Result<Response, ApiError> {
        let response = request
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()?;
        check_status(response.status())?;
        Ok(response)
    }
}

fn check_status(status: StatusCode) -> Result<(), ApiError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        s => Err(ApiError::Status(s.as_u16())),
    }
}

impl AnalyticsApi for HttpApi {
    fn verify_credentials(&self, credentials: &Credentials) -> Result<(), ApiError> {
        debug!(username = %credentials.username, "probing credentials");
        self.send(self.client.get(self.upload_url()), credentials)?;
        Ok(())
    }

    fn list_history(&self, credentials: &Credentials) -> Result<Vec<UploadRecord>, ApiError> {
        debug!("fetching upload history");
        let body = self.send(self.client.get(self.upload_url()), credentials)?.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn upload(&self, credentials: &Credentials, file: &Path) -> Result<AnalysisSummary, ApiError> {
        debug!(file = %file.display(), "uploading dataset");
        let form = multipart::Form::new().file("file", file)?;
        let request = self.client.post(self.upload_url()).multipart(form);
        let body = self.send(request, credentials)?.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn fetch_report(&self, credentials: &Credentials, id: RecordId) -> Result<Vec<u8>, ApiError> {
        debug!(id, "fetching report");
        let body = self.send(self.client.get(self.report_url(id)), credentials)?.bytes()?;
        Ok(body.to_vec())
    }

    fn delete_record(&self, credentials: &Credentials, id: RecordId) -> Result<(), ApiError> {
        debug!(id, "deleting record");
        self.send(self.client.delete(self.delete_url(id)), credentials)?;
        Ok(())
    }
}
