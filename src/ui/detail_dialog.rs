// src/ui/detail_dialog.rs
use eframe::egui;

use crate::api::models::UserDetail;
use crate::format;
use crate::state::AppState;

/// Feature ratios surfaced in the detail window, in display order. Other
/// features returned by the backend are not shown here.
const KEY_FEATURES: [&str; 4] = [
    "failed_login_ratio",
    "error_rate",
    "night_activity_ratio",
    "admin_access_ratio",
];

/// Modal window for the user selected in the results table.
pub fn show_user_details_window(ctx: &egui::Context, state: &mut AppState) {
    let mut close_requested = false;

    if let Some(detail) = &state.user_detail {
        egui::Window::new("User Details")
            .collapsible(false)
            .resizable(true)
            .default_width(520.0)
            .show(ctx, |ui| {
                draw_user_detail(ui, detail);
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close_requested = true;
                }
            });
    }

    if close_requested {
        state.user_detail = None;
    }
}

fn draw_user_detail(ui: &mut egui::Ui, detail: &UserDetail) {
    ui.columns(2, |columns| {
        columns[0].strong("User Information");
        columns[0].add_space(4.0);
        egui::Grid::new("user_info")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(&mut columns[0], |ui| {
                ui.weak("User ID:");
                ui.strong(&detail.user_id);
                ui.end_row();

                ui.weak("Classification:");
                super::classification_badge(ui, &detail.classification);
                ui.end_row();

                ui.weak("Anomaly Score:");
                ui.strong(format::modal_score(detail.anomaly_score));
                ui.end_row();

                ui.weak("Total Logs:");
                ui.strong(detail.total_logs.to_string());
                ui.end_row();
            });

        columns[1].strong("Key Features");
        columns[1].add_space(4.0);
        egui::Grid::new("key_features")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(&mut columns[1], |ui| {
                for key in &KEY_FEATURES {
                    if let Some(value) = detail.features.get(*key) {
                        ui.weak(format!("{}:", format::feature_label(key)));
                        ui.strong(format::feature_value(value));
                        ui.end_row();
                    }
                }
            });
    });

    // The whole section is omitted when the backend sent no logs.
    if let Some(logs) = detail.visible_logs() {
        ui.add_space(12.0);
        ui.strong("Recent Logs (Last 10)");
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("recent_logs")
                    .num_columns(4)
                    .spacing([16.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Timestamp");
                        ui.strong("Action");
                        ui.strong("Resource");
                        ui.strong("Status");
                        ui.end_row();

                        for log in logs {
                            ui.small(format::text_or_na(log.timestamp.as_deref()));
                            super::badge(
                                ui,
                                format::text_or_na(log.action.as_deref()),
                                super::SECONDARY,
                            );
                            ui.small(format::text_or_na(log.resource.as_deref()));
                            let fill = if format::status_is_danger(log.status_code) {
                                super::DANGER
                            } else {
                                super::SUCCESS
                            };
                            super::badge(ui, &format::status_label(log.status_code), fill);
                            ui.end_row();
                        }
                    });
            });
    }
}
