// src/ui/configuration.rs
use eframe::egui;

use crate::api::worker::ApiHandle;
use crate::format;
use crate::state::AppState;

/// Read-only view of the backend's configuration sections.
pub fn show_configuration_view(ui: &mut egui::Ui, state: &mut AppState, api: &ApiHandle) {
    ui.horizontal(|ui| {
        ui.heading("Configuration");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reload").clicked() {
                api.load_config();
            }
        });
    });
    ui.add_space(4.0);
    ui.separator();

    match &state.config {
        None => {
            ui.add_space(8.0);
            ui.weak("Configuration not loaded yet.");
        }
        Some(config) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for (section, settings) in config {
                        ui.add_space(8.0);
                        ui.strong(format::capitalize_first(section));
                        ui.add_space(4.0);

                        match format::config_rows(settings) {
                            Some(rows) => {
                                egui::Grid::new(section)
                                    .num_columns(2)
                                    .spacing([24.0, 4.0])
                                    .show(ui, |ui| {
                                        for (key, value) in &rows {
                                            ui.weak(format!("{}:", key));
                                            ui.label(value);
                                            ui.end_row();
                                        }
                                    });
                            }
                            None => {
                                ui.label(format::config_value(settings));
                            }
                        }
                    }
                });
        }
    }
}
