// src/ui/dashboard.rs
use eframe::egui;
use rfd::FileDialog;

use crate::api::worker::ApiHandle;
use crate::format;
use crate::state::notice::Notice;
use crate::state::AppState;

use super::charts;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState, api: &ApiHandle) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // Data input
            ui.horizontal(|ui| {
                draw_upload_card(ui, state, api);
                draw_sample_card(ui, state, api);
            });

            ui.add_space(16.0);
            draw_analysis_controls(ui, state, api);

            ui.add_space(16.0);
            draw_summary_cards(ui, state);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.set_min_width(ui.available_width() / 2.0 - 8.0);
                    ui.vertical(|ui| {
                        ui.heading("User Distribution");
                        ui.add_space(8.0);
                        charts::draw_distribution_chart(ui, state.distribution);
                    });
                });
                ui.group(|ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical(|ui| {
                        ui.heading("Anomaly Scores");
                        ui.add_space(8.0);
                        charts::draw_score_histogram(ui, &state.histogram);
                    });
                });
            });
        });
}

fn draw_upload_card(ui: &mut egui::Ui, state: &mut AppState, api: &ApiHandle) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width() / 2.0 - 8.0);
        ui.set_min_height(140.0);
        ui.vertical(|ui| {
            ui.heading("Upload Log Files");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Select Files...").clicked() {
                    let picked = FileDialog::new()
                        .add_filter("Log files", &["txt", "log", "csv"])
                        .set_title("Select Log Files")
                        .pick_files();
                    if let Some(paths) = picked {
                        state.select_files(paths);
                    }
                }
                if state.selected_files.is_empty() {
                    ui.weak("No files selected");
                } else {
                    ui.label(format!("{} file(s) selected", state.selected_files.len()));
                }
            });

            for name in state.selected_files.iter().take(3) {
                ui.label(format!("• {}", name));
            }
            if state.selected_files.len() > 3 {
                ui.weak(format!("... and {} more", state.selected_files.len() - 3));
            }

            ui.add_space(8.0);
            if ui.button("Upload").clicked() {
                if state.picked_files.is_empty() {
                    state.push_notice(Notice::warning("Please select files to upload"));
                } else {
                    state.loading = Some("Uploading files...".to_string());
                    api.upload_files(state.picked_files.clone());
                }
            }
        });
    });
}

fn draw_sample_card(ui: &mut egui::Ui, state: &mut AppState, api: &ApiHandle) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.set_min_height(140.0);
        ui.vertical(|ui| {
            ui.heading("Generate Sample Data");
            ui.add_space(8.0);

            egui::Grid::new("sample_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Number of users:");
                    ui.add(egui::DragValue::new(&mut state.num_users).clamp_range(1..=1000));
                    ui.end_row();

                    ui.label("Logs per user:");
                    ui.add(egui::DragValue::new(&mut state.logs_per_user).clamp_range(1..=10_000));
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Generate").clicked() {
                state.loading = Some("Generating sample data...".to_string());
                api.generate_sample(state.num_users, state.logs_per_user);
            }
        });
    });
}

fn draw_analysis_controls(ui: &mut egui::Ui, state: &mut AppState, api: &ApiHandle) {
    ui.group(|ui| {
        ui.heading("Analysis Controls");
        ui.add_space(8.0);

        egui::Grid::new("analysis_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Threshold:");
                ui.add(egui::Slider::new(&mut state.threshold, 0.0..=1.0).step_by(0.05));
                ui.end_row();

                ui.label("Contamination:");
                ui.add(egui::Slider::new(&mut state.contamination, 0.01..=0.5).step_by(0.01));
                ui.end_row();
            });

        ui.add_space(8.0);
        let analyze = egui::Button::new("Run Analysis");
        if ui.add_enabled(state.analyze_enabled(), analyze).clicked() {
            state.loading = Some("Analyzing logs... This may take a few moments.".to_string());
            api.start_analysis(
                state.selected_files.clone(),
                state.threshold,
                state.contamination,
            );
        }
    });
}

fn draw_summary_cards(ui: &mut egui::Ui, state: &AppState) {
    let (normal, abnormal, total, rate) = match &state.summary {
        Some(summary) => (
            summary.normal_users.to_string(),
            summary.abnormal_users.to_string(),
            summary.total_users.to_string(),
            format::anomaly_rate_label(summary.anomaly_rate),
        ),
        None => (
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
            "0.0%".to_string(),
        ),
    };

    ui.horizontal(|ui| {
        summary_card(ui, "Normal Users", &normal, super::SUCCESS);
        summary_card(ui, "Abnormal Users", &abnormal, super::DANGER);
        summary_card(ui, "Total Users", &total, super::PRIMARY);
        summary_card(ui, "Anomaly Rate", &rate, super::WARNING);
    });

    if let Some(timestamp) = state
        .summary
        .as_ref()
        .and_then(|summary| summary.analysis_timestamp.as_deref())
    {
        ui.add_space(4.0);
        ui.weak(format!("Last analysis: {}", timestamp));
    }
}

fn summary_card(ui: &mut egui::Ui, title: &str, value: &str, accent: egui::Color32) {
    ui.group(|ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            ui.label(title);
            ui.heading(egui::RichText::new(value).color(accent).size(28.0));
        });
    });
}
