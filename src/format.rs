// src/format.rs
//! Pure display helpers shared by the views. Everything here is plain
//! data-to-string (or data-to-bin) logic so it stays testable away from
//! any UI context.

use chrono::{DateTime, Local};
use serde_json::Value;

/// Histogram bin labels, in bin order.
pub const BIN_LABELS: [&str; 5] = ["0.0-0.2", "0.2-0.4", "0.4-0.6", "0.6-0.8", "0.8-1.0"];

/// Bin index for an anomaly score: floor(s*5) clamped to [0,4], so 1.0
/// lands in the top bin.
pub fn score_bin(score: f64) -> usize {
    ((score * 5.0).floor() as isize).clamp(0, 4) as usize
}

/// Re-bin a full score set into the five fixed ranges.
pub fn bin_scores<I: IntoIterator<Item = f64>>(scores: I) -> [usize; 5] {
    let mut bins = [0usize; 5];
    for score in scores {
        bins[score_bin(score)] += 1;
    }
    bins
}

/// Score as shown in the results table.
pub fn table_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Score as shown in the detail modal.
pub fn modal_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Progress-bar percentage text for a score, one decimal.
pub fn progress_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Anomaly-rate counter text; the backend already sends a percentage.
pub fn anomaly_rate_label(rate: f64) -> String {
    format!("{:.1}%", rate)
}

pub fn is_normal(classification: &str) -> bool {
    classification == "Normal"
}

/// Feature keys display with underscores as spaces, upper-cased.
pub fn feature_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Feature values: numbers to three decimals, strings as-is, anything
/// else via its JSON form.
pub fn feature_value(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => format!("{:.3}", f),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Config values: objects and arrays as their JSON text, strings bare,
/// scalars via their JSON form.
pub fn config_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Key/value rows for one config section, in key order. `None` when the
/// section is not an object and renders as a single bare value.
pub fn config_rows(settings: &Value) -> Option<Vec<(String, String)>> {
    settings.as_object().map(|entries| {
        entries
            .iter()
            .map(|(key, value)| (key.clone(), config_value(value)))
            .collect()
    })
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Missing log fields render as a literal placeholder.
pub fn text_or_na(field: Option<&str>) -> &str {
    field.unwrap_or("N/A")
}

pub fn status_label(code: Option<u16>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "N/A".to_string(),
    }
}

/// Statuses from 400 up get the danger badge; everything else, including
/// a missing status, gets the success badge.
pub fn status_is_danger(code: Option<u16>) -> bool {
    matches!(code, Some(code) if code >= 400)
}

/// File name for a downloaded report, matching the attachment name the
/// backend itself uses.
pub fn report_filename(now: DateTime<Local>) -> String {
    format!(
        "anomaly_detection_report_{}.txt",
        now.format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn score_bins_cover_fixed_ranges() {
        assert_eq!(score_bin(0.0), 0);
        assert_eq!(score_bin(0.19), 0);
        assert_eq!(score_bin(0.2), 1);
        assert_eq!(score_bin(0.39), 1);
        assert_eq!(score_bin(0.4), 2);
        assert_eq!(score_bin(0.6), 3);
        assert_eq!(score_bin(0.79), 3);
        assert_eq!(score_bin(0.8), 4);
        assert_eq!(score_bin(0.99), 4);
    }

    #[test]
    fn top_boundary_is_inclusive() {
        assert_eq!(score_bin(1.0), 4);
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(score_bin(-0.1), 0);
        assert_eq!(score_bin(1.7), 4);
    }

    #[test]
    fn bin_scores_counts_each_range() {
        let bins = bin_scores([0.05, 0.1, 0.25, 0.55, 0.85, 1.0]);
        assert_eq!(bins, [2, 1, 1, 0, 2]);
    }

    #[test]
    fn score_text_precision_differs_by_surface() {
        assert_eq!(table_score(0.123456), "0.123");
        assert_eq!(modal_score(0.123456), "0.1235");
        assert_eq!(table_score(1.0), "1.000");
    }

    #[test]
    fn progress_percent_is_one_decimal() {
        assert_eq!(progress_percent(0.724), "72.4%");
        assert_eq!(progress_percent(0.0), "0.0%");
        assert_eq!(progress_percent(1.0), "100.0%");
    }

    #[test]
    fn anomaly_rate_renders_like_the_summary_card() {
        assert_eq!(anomaly_rate_label(20.0), "20.0%");
        assert_eq!(anomaly_rate_label(33.333), "33.3%");
        assert_eq!(anomaly_rate_label(0.0), "0.0%");
    }

    #[test]
    fn feature_labels_uppercase_and_unsnake() {
        assert_eq!(feature_label("failed_login_ratio"), "FAILED LOGIN RATIO");
        assert_eq!(feature_label("error_rate"), "ERROR RATE");
        assert_eq!(feature_label("plain"), "PLAIN");
    }

    #[test]
    fn feature_values_round_numbers_only() {
        assert_eq!(feature_value(&json!(0.123456)), "0.123");
        assert_eq!(feature_value(&json!(2)), "2.000");
        assert_eq!(feature_value(&json!("spike")), "spike");
        assert_eq!(feature_value(&json!(true)), "true");
    }

    #[test]
    fn config_values_stringify_compound_types() {
        assert_eq!(
            config_value(&json!({"enabled": false, "type": "sqlite"})),
            r#"{"enabled":false,"type":"sqlite"}"#
        );
        assert_eq!(config_value(&json!(["txt", "log", "csv"])), r#"["txt","log","csv"]"#);
        assert_eq!(config_value(&json!("uploads")), "uploads");
        assert_eq!(config_value(&json!(5000)), "5000");
        assert_eq!(config_value(&json!(true)), "true");
    }

    #[test]
    fn config_rows_split_objects_into_pairs() {
        let rows = config_rows(&json!({"x": 1, "y": "z"})).unwrap();
        assert_eq!(
            rows,
            vec![
                ("x".to_string(), "1".to_string()),
                ("y".to_string(), "z".to_string()),
            ]
        );
        assert!(config_rows(&json!("bare value")).is_none());
    }

    #[test]
    fn every_config_section_and_pair_reaches_the_view() {
        let config: std::collections::BTreeMap<String, Value> =
            serde_json::from_value(json!({"upload": {"x": 1}, "flask": {"y": "z"}})).unwrap();

        let mut headers = Vec::new();
        let mut pairs = Vec::new();
        for (section, settings) in &config {
            headers.push(capitalize_first(section));
            pairs.extend(config_rows(settings).unwrap());
        }

        assert_eq!(headers, vec!["Flask", "Upload"]);
        assert_eq!(
            pairs,
            vec![
                ("y".to_string(), "z".to_string()),
                ("x".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn capitalize_first_touches_only_the_first_letter() {
        assert_eq!(capitalize_first("upload"), "Upload");
        assert_eq!(capitalize_first("anomaly_detection"), "Anomaly_detection");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn missing_log_fields_become_na() {
        assert_eq!(text_or_na(Some("LOGIN")), "LOGIN");
        assert_eq!(text_or_na(None), "N/A");
        assert_eq!(status_label(Some(200)), "200");
        assert_eq!(status_label(None), "N/A");
    }

    #[test]
    fn status_badge_splits_at_400() {
        assert!(!status_is_danger(Some(200)));
        assert!(!status_is_danger(Some(399)));
        assert!(status_is_danger(Some(400)));
        assert!(status_is_danger(Some(503)));
        assert!(!status_is_danger(None));
    }

    #[test]
    fn report_filename_embeds_timestamp() {
        let when = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(
            report_filename(when),
            "anomaly_detection_report_20250314_092653.txt"
        );
    }
}
