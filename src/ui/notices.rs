// src/ui/notices.rs
use eframe::egui;

use crate::state::notice::NoticeLevel;
use crate::state::AppState;

/// Banner stack at the top of the central layout, newest first. Each
/// banner can be dismissed by hand; expiry is handled by the frame loop.
pub fn show_notices(ui: &mut egui::Ui, state: &mut AppState) {
    if state.notices.is_empty() {
        return;
    }

    let mut dismissed = None;
    for (index, notice) in state.notices.iter().enumerate() {
        let (fill, text_color) = level_colors(notice.level);
        egui::Frame::none()
            .fill(fill)
            .rounding(4.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&notice.message).color(text_color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            dismissed = Some(index);
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }

    if let Some(index) = dismissed {
        state.notices.remove(index);
    }
    ui.add_space(4.0);
}

fn level_colors(level: NoticeLevel) -> (egui::Color32, egui::Color32) {
    match level {
        NoticeLevel::Info => (super::INFO, egui::Color32::WHITE),
        NoticeLevel::Success => (super::SUCCESS, egui::Color32::WHITE),
        NoticeLevel::Warning => (super::WARNING, egui::Color32::BLACK),
        NoticeLevel::Danger => (super::DANGER, egui::Color32::WHITE),
    }
}
