// src/api/worker.rs
//! Background execution of API calls.
//!
//! Each user action spawns one worker thread; the thread performs the
//! blocking request(s) and delivers a single completion event back to the
//! UI thread, then wakes egui. Operations are not coordinated with each
//! other: overlapping requests are allowed and the last event applied wins.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Context;
use chrono::Local;
use eframe::egui;

use super::models::{
    AnalysisSummary, ConfigSections, GenerateSampleResponse, HealthResponse, ResultsResponse,
    UserDetail,
};
use super::ApiClient;
use crate::format;

/// Completion of one backend operation. Errors are the message the banner
/// should show (after its per-action prefix).
#[derive(Debug)]
pub enum ApiEvent {
    HealthChecked(Result<HealthResponse, String>),
    ConfigLoaded(Result<ConfigSections, String>),
    FilesUploaded(Result<Vec<String>, String>),
    SampleGenerated(Result<GenerateSampleResponse, String>),
    AnalysisFinished(Result<AnalysisSummary, String>),
    ResultsLoaded(Result<ResultsResponse, String>),
    UserDetailLoaded(Result<UserDetail, String>),
    ReportDownloaded(Result<PathBuf, String>),
}

impl ApiEvent {
    /// Action label and message when the event is a failure.
    fn failure(&self) -> Option<(&'static str, &str)> {
        match self {
            ApiEvent::HealthChecked(Err(err)) => Some(("health check", err)),
            ApiEvent::ConfigLoaded(Err(err)) => Some(("config fetch", err)),
            ApiEvent::FilesUploaded(Err(err)) => Some(("upload", err)),
            ApiEvent::SampleGenerated(Err(err)) => Some(("sample generation", err)),
            ApiEvent::AnalysisFinished(Err(err)) => Some(("analysis", err)),
            ApiEvent::ResultsLoaded(Err(err)) => Some(("results fetch", err)),
            ApiEvent::UserDetailLoaded(Err(err)) => Some(("user detail fetch", err)),
            ApiEvent::ReportDownloaded(Err(err)) => Some(("report download", err)),
            _ => None,
        }
    }
}

/// Cheap-to-clone handle the views use to fire requests.
#[derive(Clone)]
pub struct ApiHandle {
    client: ApiClient,
    events: Sender<ApiEvent>,
    ctx: egui::Context,
}

impl ApiHandle {
    pub fn new(client: ApiClient, events: Sender<ApiEvent>, ctx: egui::Context) -> Self {
        Self {
            client,
            events,
            ctx,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn check_health(&self) {
        let this = self.clone();
        thread::spawn(move || {
            let result = this.client.fetch_health().map_err(stringify);
            this.deliver(ApiEvent::HealthChecked(result));
        });
    }

    pub fn load_config(&self) {
        let this = self.clone();
        thread::spawn(move || {
            tracing::debug!("fetching configuration");
            let result = this.client.fetch_config().map_err(stringify);
            this.deliver(ApiEvent::ConfigLoaded(result));
        });
    }

    /// Upload files one request at a time; the first failure aborts the
    /// rest of the sequence. Already-uploaded files stay on the server.
    pub fn upload_files(&self, paths: Vec<PathBuf>) {
        let this = self.clone();
        thread::spawn(move || {
            tracing::debug!(count = paths.len(), "uploading files");
            let result = upload_sequence(&paths, |path| {
                this.client
                    .upload_file(path)
                    .map(|response| response.filename)
                    .map_err(stringify)
            });
            this.deliver(ApiEvent::FilesUploaded(result));
        });
    }

    pub fn generate_sample(&self, num_users: u32, logs_per_user: u32) {
        let this = self.clone();
        thread::spawn(move || {
            tracing::debug!(num_users, logs_per_user, "generating sample data");
            let result = this
                .client
                .generate_sample(num_users, logs_per_user)
                .map_err(stringify);
            this.deliver(ApiEvent::SampleGenerated(result));
        });
    }

    pub fn start_analysis(&self, files: Vec<String>, threshold: f64, contamination: f64) {
        let this = self.clone();
        thread::spawn(move || {
            tracing::info!(files = files.len(), threshold, contamination, "starting analysis");
            let result = this
                .client
                .analyze(files, threshold, contamination)
                .map_err(stringify);
            this.deliver(ApiEvent::AnalysisFinished(result));
        });
    }

    pub fn load_results(&self) {
        let this = self.clone();
        thread::spawn(move || {
            let result = this.client.fetch_results().map_err(stringify);
            this.deliver(ApiEvent::ResultsLoaded(result));
        });
    }

    pub fn load_user_details(&self, user_id: String) {
        let this = self.clone();
        thread::spawn(move || {
            let result = this
                .client
                .fetch_user_details(&user_id)
                .map_err(stringify);
            this.deliver(ApiEvent::UserDetailLoaded(result));
        });
    }

    /// Fetch the report and write it straight into the downloads folder
    /// under a timestamped name, like a browser download would land.
    pub fn download_report(&self) {
        let this = self.clone();
        thread::spawn(move || {
            let result = this
                .client
                .download_report()
                .and_then(|payload| {
                    let path = report_destination().join(format::report_filename(Local::now()));
                    std::fs::write(&path, &payload)
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = payload.len(), "report saved");
                    Ok(path)
                })
                .map_err(stringify);
            this.deliver(ApiEvent::ReportDownloaded(result));
        });
    }

    fn deliver(&self, event: ApiEvent) {
        if let Some((action, err)) = event.failure() {
            tracing::warn!(action, err, "request failed");
        }
        if self.events.send(event).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

fn stringify(err: anyhow::Error) -> String {
    err.to_string()
}

/// Run the per-file uploads sequentially, stopping at the first failure.
/// Returns the uploaded names in request order.
fn upload_sequence<F>(paths: &[PathBuf], mut upload_one: F) -> Result<Vec<String>, String>
where
    F: FnMut(&Path) -> Result<String, String>,
{
    let mut uploaded = Vec::with_capacity(paths.len());
    for path in paths {
        uploaded.push(upload_one(path)?);
    }
    Ok(uploaded)
}

fn report_destination() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn upload_sequence_collects_names_in_order() {
        let result = upload_sequence(&paths(&["a.log", "b.log", "c.log"]), |path| {
            Ok(path.display().to_string())
        });
        assert_eq!(
            result.unwrap(),
            vec!["a.log".to_string(), "b.log".to_string(), "c.log".to_string()]
        );
    }

    #[test]
    fn upload_sequence_stops_at_first_failure() {
        let mut attempts = Vec::new();
        let result = upload_sequence(&paths(&["a.log", "b.log", "c.log", "d.log"]), |path| {
            attempts.push(path.to_path_buf());
            if attempts.len() == 3 {
                Err("Invalid file type".to_string())
            } else {
                Ok(path.display().to_string())
            }
        });
        assert_eq!(result.unwrap_err(), "Invalid file type");
        // two succeeded, the third failed, the fourth was never attempted
        assert_eq!(attempts, paths(&["a.log", "b.log", "c.log"]));
    }

    #[test]
    fn upload_sequence_of_nothing_is_empty_success() {
        let result = upload_sequence(&[], |_| Err("never called".to_string()));
        assert_eq!(result.unwrap(), Vec::<String>::new());
    }
}
