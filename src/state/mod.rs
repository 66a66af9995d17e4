// src/state/mod.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::api::models::{AnalysisSummary, ConfigSections, ResultsResponse, UserDetail, UserResult};
use crate::api::worker::ApiEvent;
use crate::format;

pub mod notice;

use notice::Notice;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    Results,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendStatus {
    Unknown,
    Connected,
    Offline,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // File selection & form values
    pub picked_files: Vec<PathBuf>,
    pub selected_files: Vec<String>,
    pub threshold: f64,
    pub contamination: f64,
    pub num_users: u32,
    pub logs_per_user: u32,

    // Fetched data
    pub summary: Option<AnalysisSummary>,
    pub results: ResultsResponse,
    pub config: Option<ConfigSections>,
    pub user_detail: Option<UserDetail>,

    // Chart datasets, mutated in place
    pub distribution: [u64; 2],
    pub histogram: [usize; 5],

    // Minimal UI state
    pub current_screen: Screen,
    pub notices: Vec<Notice>,
    pub loading: Option<String>,
    pub backend_status: BackendStatus,
    pub backend_version: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            picked_files: Vec::new(),
            selected_files: Vec::new(),
            threshold: 0.6,
            contamination: 0.1,
            num_users: 50,
            logs_per_user: 100,
            summary: None,
            results: ResultsResponse::default(),
            config: None,
            user_detail: None,
            distribution: [0, 0],
            histogram: [0; 5],
            current_screen: Screen::Dashboard,
            notices: Vec::new(),
            loading: None,
            backend_status: BackendStatus::Unknown,
            backend_version: None,
        }
    }

    /// Store a fresh picker selection, wholesale. The analyze control keys
    /// off the selection being non-empty.
    pub fn select_files(&mut self, paths: Vec<PathBuf>) {
        self.selected_files = paths
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        self.picked_files = paths;
        if !self.selected_files.is_empty() {
            self.push_notice(Notice::info(format!(
                "Selected {} file(s)",
                self.selected_files.len()
            )));
        }
    }

    pub fn analyze_enabled(&self) -> bool {
        !self.selected_files.is_empty()
    }

    pub fn result_users(&self) -> &[UserResult] {
        &self.results.users
    }

    /// Newest notices go on top, like alerts prepended to the page.
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.insert(0, notice);
    }

    pub fn prune_notices(&mut self) {
        self.notices.retain(|notice| !notice.is_expired());
    }

    /// Shortest time until a banner auto-dismisses, for repaint scheduling.
    pub fn next_notice_expiry(&self) -> Option<Duration> {
        self.notices.iter().map(Notice::remaining).min()
    }

    /// The histogram is always re-derived from the scores of the current
    /// result set, never adjusted incrementally.
    fn recompute_histogram(&mut self) {
        self.histogram =
            format::bin_scores(self.results.users.iter().map(|user| user.anomaly_score));
    }

    /// Fold one completed backend operation into the state. Returns true
    /// when a results reload should be issued next (after a successful
    /// analysis). Events are applied in arrival order; when operations
    /// overlap, the last one applied wins.
    pub fn apply_event(&mut self, event: ApiEvent) -> bool {
        match event {
            ApiEvent::HealthChecked(Ok(health)) => {
                self.backend_status = BackendStatus::Connected;
                if !health.version.is_empty() {
                    self.backend_version = Some(health.version);
                }
            }
            ApiEvent::HealthChecked(Err(_)) => {
                self.backend_status = BackendStatus::Offline;
            }
            ApiEvent::ConfigLoaded(Ok(config)) => {
                self.config = Some(config);
            }
            ApiEvent::ConfigLoaded(Err(_)) => {
                self.push_notice(Notice::danger("Failed to load configuration"));
            }
            ApiEvent::FilesUploaded(Ok(filenames)) => {
                self.loading = None;
                self.selected_files = filenames;
                self.push_notice(Notice::success("Files uploaded successfully!"));
            }
            ApiEvent::FilesUploaded(Err(message)) => {
                self.loading = None;
                self.push_notice(Notice::danger(format!("Upload failed: {}", message)));
            }
            ApiEvent::SampleGenerated(Ok(response)) => {
                self.loading = None;
                self.selected_files = response.files;
                self.push_notice(Notice::success("Sample data generated successfully!"));
            }
            ApiEvent::SampleGenerated(Err(message)) => {
                self.loading = None;
                self.push_notice(Notice::danger(format!(
                    "Sample generation failed: {}",
                    message
                )));
            }
            ApiEvent::AnalysisFinished(Ok(summary)) => {
                self.loading = None;
                self.distribution = [summary.normal_users, summary.abnormal_users];
                self.summary = Some(summary);
                self.recompute_histogram();
                self.push_notice(Notice::success("Analysis completed successfully!"));
                return true;
            }
            ApiEvent::AnalysisFinished(Err(message)) => {
                self.loading = None;
                self.push_notice(Notice::danger(format!("Analysis failed: {}", message)));
            }
            ApiEvent::ResultsLoaded(Ok(results)) => {
                self.results = results;
                self.recompute_histogram();
            }
            ApiEvent::ResultsLoaded(Err(message)) => {
                self.push_notice(Notice::danger(format!(
                    "Failed to load results: {}",
                    message
                )));
            }
            ApiEvent::UserDetailLoaded(Ok(detail)) => {
                self.user_detail = Some(detail);
            }
            ApiEvent::UserDetailLoaded(Err(message)) => {
                self.push_notice(Notice::danger(format!(
                    "Failed to load user details: {}",
                    message
                )));
            }
            ApiEvent::ReportDownloaded(Ok(path)) => {
                self.push_notice(Notice::success(format!(
                    "Report downloaded successfully! Saved to {}",
                    path.display()
                )));
            }
            ApiEvent::ReportDownloaded(Err(message)) => {
                self.push_notice(Notice::danger(format!("Download failed: {}", message)));
            }
        }
        false
    }
}
