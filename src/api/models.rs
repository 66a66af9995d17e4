// src/api/models.rs
//! Typed payloads for the anomaly-detection backend REST API.
//!
//! Response structs mirror what the backend actually sends; fields the
//! minimal contract does not guarantee are optional with serde defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/config`: nested mapping of section name to settings object.
pub type ConfigSections = BTreeMap<String, Value>;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// `POST /api/analyze` request body.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub files: Vec<String>,
    pub threshold: f64,
    pub contamination: f64,
}

/// `POST /api/generate-sample` request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSampleRequest {
    pub num_users: u32,
    pub logs_per_user: u32,
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// `POST /api/upload` success response (one per uploaded file).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    pub filename: String,
    #[serde(default)]
    pub filepath: String,
}

/// `POST /api/generate-sample` success response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSampleResponse {
    #[serde(default)]
    pub message: String,
    pub files: Vec<String>,
    #[serde(default)]
    pub num_users: u32,
    #[serde(default)]
    pub logs_per_user: u32,
}

/// Summary counters, returned by `POST /api/analyze` and embedded in
/// `GET /api/results`. The rate is a percentage (20.0 means 20%).
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSummary {
    pub total_users: u64,
    pub normal_users: u64,
    pub abnormal_users: u64,
    pub anomaly_rate: f64,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub contamination: Option<f64>,
    #[serde(default)]
    pub analysis_timestamp: Option<String>,
}

/// `GET /api/results` success response. A well-formed body with no
/// `users` array is a defined empty state, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub summary: Option<AnalysisSummary>,
    #[serde(default)]
    pub users: Vec<UserResult>,
}

/// One row of the results table.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResult {
    pub user_id: String,
    pub anomaly_score: f64,
    pub classification: String,
    pub total_logs: u64,
    #[serde(default)]
    pub features: BTreeMap<String, Value>,
}

/// `GET /api/user/{id}` success response: a `UserResult` plus the user's
/// most recent log lines (absent when the backend has none to show).
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    pub user_id: String,
    pub anomaly_score: f64,
    pub classification: String,
    pub total_logs: u64,
    #[serde(default)]
    pub features: BTreeMap<String, Value>,
    #[serde(default)]
    pub recent_logs: Option<Vec<LogEntry>>,
}

/// A single parsed log line inside a user detail. Every field is optional;
/// the view substitutes "N/A" for anything missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub response_time: Option<u64>,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub cors_enabled: bool,
}

/// Error body the backend attaches to non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl UserDetail {
    /// Logs to render in the modal, capped at ten. `None` means the whole
    /// section is omitted, matching an absent or empty `recent_logs`.
    pub fn visible_logs(&self) -> Option<&[LogEntry]> {
        match self.recent_logs.as_deref() {
            Some(logs) if !logs.is_empty() => Some(&logs[..logs.len().min(10)]),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_request_serializes() {
        let req = AnalyzeRequest {
            files: vec!["sample_logs.txt".to_string()],
            threshold: 0.6,
            contamination: 0.1,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"files\":[\"sample_logs.txt\"]"));
        assert!(json.contains("\"threshold\":0.6"));
        assert!(json.contains("\"contamination\":0.1"));
    }

    #[test]
    fn summary_parses_minimal_contract() {
        let json = r#"{"total_users":10,"normal_users":8,"abnormal_users":2,"anomaly_rate":20.0}"#;
        let summary: AnalysisSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_users, 10);
        assert_eq!(summary.normal_users, 8);
        assert_eq!(summary.abnormal_users, 2);
        assert_eq!(summary.anomaly_rate, 20.0);
        assert!(summary.threshold.is_none());
        assert!(summary.analysis_timestamp.is_none());
    }

    #[test]
    fn summary_parses_extended_fields() {
        let json = r#"{
            "total_users": 50, "normal_users": 45, "abnormal_users": 5,
            "anomaly_rate": 10.0, "threshold": 0.6, "contamination": 0.1,
            "analysis_timestamp": "2025-03-14T09:26:53"
        }"#;
        let summary: AnalysisSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.threshold, Some(0.6));
        assert_eq!(
            summary.analysis_timestamp.as_deref(),
            Some("2025-03-14T09:26:53")
        );
    }

    #[test]
    fn results_parse_with_summary_and_users() {
        let json = r#"{
            "summary": {"total_users":2,"normal_users":1,"abnormal_users":1,"anomaly_rate":50.0},
            "users": [
                {"user_id":"user001","anomaly_score":0.12,"classification":"Normal",
                 "total_logs":100,"features":{"failed_login_ratio":0.01}},
                {"user_id":"user002","anomaly_score":0.91,"classification":"Abnormal",
                 "total_logs":87,"features":{"failed_login_ratio":0.4,"note":"spike"}}
            ]
        }"#;
        let results: ResultsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(results.users.len(), 2);
        assert_eq!(results.users[0].user_id, "user001");
        assert_eq!(results.users[1].classification, "Abnormal");
        assert_eq!(
            results.users[1].features.get("note"),
            Some(&Value::String("spike".to_string()))
        );
        assert_eq!(results.summary.unwrap().anomaly_rate, 50.0);
    }

    #[test]
    fn results_default_to_empty_users_when_missing() {
        let results: ResultsResponse = serde_json::from_str("{}").unwrap();
        assert!(results.users.is_empty());
        assert!(results.summary.is_none());
    }

    #[test]
    fn user_detail_without_recent_logs_has_no_visible_logs() {
        let json = r#"{"user_id":"user003","anomaly_score":0.75,
                       "classification":"Abnormal","total_logs":42}"#;
        let detail: UserDetail = serde_json::from_str(json).unwrap();
        assert!(detail.recent_logs.is_none());
        assert!(detail.visible_logs().is_none());
    }

    #[test]
    fn user_detail_with_empty_recent_logs_has_no_visible_logs() {
        let json = r#"{"user_id":"user003","anomaly_score":0.75,
                       "classification":"Abnormal","total_logs":42,"recent_logs":[]}"#;
        let detail: UserDetail = serde_json::from_str(json).unwrap();
        assert!(detail.visible_logs().is_none());
    }

    #[test]
    fn visible_logs_cap_at_ten() {
        let logs: Vec<LogEntry> = (0..15).map(|_| LogEntry::default()).collect();
        let detail = UserDetail {
            user_id: "user004".to_string(),
            anomaly_score: 0.2,
            classification: "Normal".to_string(),
            total_logs: 15,
            features: BTreeMap::new(),
            recent_logs: Some(logs),
        };
        assert_eq!(detail.visible_logs().unwrap().len(), 10);
    }

    #[test]
    fn log_entry_tolerates_missing_fields() {
        let json = r#"{"timestamp":"2025-03-14 09:26:53","status_code":403}"#;
        let log: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(log.timestamp.as_deref(), Some("2025-03-14 09:26:53"));
        assert_eq!(log.status_code, Some(403));
        assert!(log.action.is_none());
        assert!(log.resource.is_none());
    }

    #[test]
    fn error_body_parses() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Invalid file type"}"#).unwrap();
        assert_eq!(body.error, "Invalid file type");
    }
}
