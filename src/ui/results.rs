// src/ui/results.rs
use eframe::egui;

use crate::api::worker::ApiHandle;
use crate::format;
use crate::state::AppState;

pub fn show_results_view(ui: &mut egui::Ui, state: &mut AppState, api: &ApiHandle) {
    ui.horizontal(|ui| {
        ui.heading("Analysis Results");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Download Report").clicked() {
                api.download_report();
            }
            if ui.button("Refresh").clicked() {
                api.load_results();
            }
        });
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("results_table")
                .num_columns(5)
                .spacing([24.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("User ID");
                    ui.strong("Anomaly Score");
                    ui.strong("Classification");
                    ui.strong("Total Logs");
                    ui.strong("Actions");
                    ui.end_row();

                    if state.result_users().is_empty() {
                        // the one placeholder row of the empty state
                        ui.weak("No results available. Please run an analysis first.");
                        ui.label("");
                        ui.label("");
                        ui.label("");
                        ui.label("");
                        ui.end_row();
                        return;
                    }

                    for user in state.result_users() {
                        let abnormal = !format::is_normal(&user.classification);

                        // abnormal rows carry the danger tint across cells
                        if abnormal {
                            ui.label(
                                egui::RichText::new(&user.user_id)
                                    .strong()
                                    .color(super::DANGER),
                            );
                        } else {
                            ui.strong(&user.user_id);
                        }

                        super::score_bar(ui, user.anomaly_score, abnormal);
                        super::classification_badge(ui, &user.classification);

                        if abnormal {
                            ui.colored_label(super::DANGER, user.total_logs.to_string());
                        } else {
                            ui.label(user.total_logs.to_string());
                        }

                        if ui.small_button("Details").clicked() {
                            api.load_user_details(user.user_id.clone());
                        }
                        ui.end_row();
                    }
                });
        });
}
