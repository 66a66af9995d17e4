// src/api/mod.rs
//! Blocking client for the anomaly-detection backend.
//!
//! Every method is one request/response cycle. Calls are made from worker
//! threads (see `worker`), never from the UI thread. No timeouts are set:
//! requests run until the server answers or the transport fails.

use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;

pub mod models;
pub mod multipart;
pub mod worker;

use models::{
    AnalysisSummary, AnalyzeRequest, ConfigSections, ErrorBody, GenerateSampleRequest,
    GenerateSampleResponse, HealthResponse, ResultsResponse, UploadResponse, UserDetail,
};
use multipart::MultipartForm;

#[derive(Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/config`
    pub fn fetch_config(&self) -> Result<ConfigSections> {
        self.get_json("/api/config", "Failed to load configuration")
    }

    /// `GET /api/health`
    pub fn fetch_health(&self) -> Result<HealthResponse> {
        self.get_json("/api/health", "Health check failed")
    }

    /// `GET /api/results`
    pub fn fetch_results(&self) -> Result<ResultsResponse> {
        self.get_json("/api/results", "Failed to load results")
    }

    /// `GET /api/user/{id}`
    pub fn fetch_user_details(&self, user_id: &str) -> Result<UserDetail> {
        self.get_json(
            &format!("/api/user/{}", user_id),
            "Failed to load user details",
        )
    }

    /// `POST /api/upload`: one multipart request carrying a single `file`
    /// field, the way the backend expects uploads.
    pub fn upload_file(&self, path: &Path) -> Result<UploadResponse> {
        let data = std::fs::read(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.log");

        let mut form = MultipartForm::new();
        form.add_file("file", filename, content_type_for(filename), &data);
        let content_type = form.content_type();
        let body = form.finish();

        let response = self
            .agent
            .post(&self.url("/api/upload"))
            .set("Content-Type", &content_type)
            .send_bytes(&body);
        read_json(response, "/api/upload", "Upload failed")
    }

    /// `POST /api/generate-sample`
    pub fn generate_sample(
        &self,
        num_users: u32,
        logs_per_user: u32,
    ) -> Result<GenerateSampleResponse> {
        let response = self
            .agent
            .post(&self.url("/api/generate-sample"))
            .send_json(GenerateSampleRequest {
                num_users,
                logs_per_user,
            });
        read_json(response, "/api/generate-sample", "Sample generation failed")
    }

    /// `POST /api/analyze`
    pub fn analyze(
        &self,
        files: Vec<String>,
        threshold: f64,
        contamination: f64,
    ) -> Result<AnalysisSummary> {
        let response = self
            .agent
            .post(&self.url("/api/analyze"))
            .send_json(AnalyzeRequest {
                files,
                threshold,
                contamination,
            });
        read_json(response, "/api/analyze", "Analysis failed")
    }

    /// `GET /api/download-report`: returns the raw report payload. A
    /// failure status carries a JSON `{error}` body instead.
    pub fn download_report(&self) -> Result<Vec<u8>> {
        match self.agent.get(&self.url("/api/download-report")).call() {
            Ok(response) => {
                let mut payload = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut payload)
                    .context("malformed response from /api/download-report")?;
                Ok(payload)
            }
            Err(err) => Err(request_error(err, "Download failed")),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        let response = self.agent.get(&self.url(path)).call();
        read_json(response, path, fallback)
    }
}

/// Decode a JSON success body, or convert the failure into the message the
/// banner should carry.
fn read_json<T: DeserializeOwned>(
    response: Result<ureq::Response, ureq::Error>,
    path: &str,
    fallback: &str,
) -> Result<T> {
    match response {
        Ok(response) => response
            .into_json()
            .with_context(|| format!("malformed response from {}", path)),
        Err(err) => Err(request_error(err, fallback)),
    }
}

/// The server's `error` field when the status carries one, the transport
/// error text when the request never completed, else the per-action
/// fallback string.
fn request_error(err: ureq::Error, fallback: &str) -> anyhow::Error {
    match err {
        ureq::Error::Status(code, response) => {
            tracing::debug!(code, "request rejected by backend");
            match response.into_json::<ErrorBody>() {
                Ok(body) => anyhow!(body.error),
                Err(_) => anyhow!("{}", fallback),
            }
        }
        ureq::Error::Transport(transport) => anyhow!("{}", transport),
    }
}

/// MIME type for an upload, by extension, like a browser would attach.
fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("txt") | Some("log") => "text/plain",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.url("/api/config"), "http://127.0.0.1:5000/api/config");
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for("auth.log"), "text/plain");
        assert_eq!(content_type_for("notes.txt"), "text/plain");
        assert_eq!(content_type_for("events.csv"), "text/csv");
        assert_eq!(content_type_for("archive.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noextension"), "application/octet-stream");
    }

    #[test]
    fn status_errors_surface_the_server_error_field() {
        let response =
            ureq::Response::new(400, "Bad Request", r#"{"error":"Invalid file type"}"#).unwrap();
        let err = request_error(ureq::Error::Status(400, response), "Upload failed");
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn status_errors_without_json_bodies_use_the_fallback() {
        let response = ureq::Response::new(
            500,
            "Internal Server Error",
            "<html>Internal Server Error</html>",
        )
        .unwrap();
        let err = request_error(ureq::Error::Status(500, response), "Upload failed");
        assert_eq!(err.to_string(), "Upload failed");
    }
}
