// src/ui/mod.rs
use eframe::egui;

use crate::format;

pub mod charts;
pub mod configuration;
pub mod dashboard;
pub mod detail_dialog;
pub mod notices;
pub mod results;

// Shared palette, matching the badge/chart colors of the web dashboard
// this replaces.
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0x19, 0x87, 0x54);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(0xdc, 0x35, 0x45);
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x0d, 0x6e, 0xfd);
pub const INFO: egui::Color32 = egui::Color32::from_rgb(0x17, 0xa2, 0xb8);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(0xff, 0xc1, 0x07);
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(0x6c, 0x75, 0x7d);

/// Small filled pill with white text, the badge style used for
/// classifications and log statuses.
pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .color(egui::Color32::WHITE)
                    .small(),
            );
        });
}

/// "Normal" gets the success badge; any other classification the danger one.
pub fn classification_badge(ui: &mut egui::Ui, classification: &str) {
    let fill = if format::is_normal(classification) {
        SUCCESS
    } else {
        DANGER
    };
    badge(ui, classification, fill);
}

/// Score cell: a fixed-width bar filled to the score, colored by
/// classification, with the three-decimal score text beside it.
pub fn score_bar(ui: &mut egui::Ui, score: f64, danger: bool) {
    ui.horizontal(|ui| {
        let fill = if danger { DANGER } else { SUCCESS };
        let bar = egui::ProgressBar::new(score as f32)
            .desired_width(100.0)
            .fill(fill);
        ui.add(bar)
            .on_hover_text(format::progress_percent(score));
        ui.small(format::table_score(score));
    });
}

/// Centered spinner window shown while an upload, sample generation, or
/// analysis is in flight.
pub fn show_loading_overlay(ctx: &egui::Context, loading: &Option<String>) {
    if let Some(message) = loading {
        egui::Window::new("loading_overlay")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(message);
                });
            });
    }
}
