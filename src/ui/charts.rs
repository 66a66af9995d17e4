// src/ui/charts.rs
use eframe::egui;

use crate::format;

/// Doughnut of normal vs abnormal user counts, with a legend underneath.
/// `counts` is `[normal, abnormal]`.
pub fn draw_distribution_chart(ui: &mut egui::Ui, counts: [u64; 2]) {
    let desired = egui::vec2(ui.available_width().max(160.0), 170.0);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let outer = rect.height().min(rect.width()) * 0.45;
        let inner = outer * 0.55;
        let total = counts[0] + counts[1];

        if total == 0 {
            // nothing analyzed yet; keep the slot with a faint ring
            paint_ring_segment(
                &painter,
                center,
                inner,
                outer,
                0.0,
                std::f32::consts::TAU,
                ui.visuals().faint_bg_color,
            );
        } else {
            let start = -std::f32::consts::FRAC_PI_2;
            let normal_sweep = std::f32::consts::TAU * (counts[0] as f32 / total as f32);
            paint_ring_segment(&painter, center, inner, outer, start, normal_sweep, super::SUCCESS);
            paint_ring_segment(
                &painter,
                center,
                inner,
                outer,
                start + normal_sweep,
                std::f32::consts::TAU - normal_sweep,
                super::DANGER,
            );
        }
    }

    legend_row(ui, super::SUCCESS, &format!("Normal Users ({})", counts[0]));
    legend_row(ui, super::DANGER, &format!("Abnormal Users ({})", counts[1]));
}

/// Bar chart of the five fixed score bins.
pub fn draw_score_histogram(ui: &mut egui::Ui, bins: &[usize; 5]) {
    let plot = egui_plot::Plot::new("score_histogram")
        .height(170.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0)
        .include_x(0.0)
        .include_x(5.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = bins
            .iter()
            .enumerate()
            .map(|(bin, &count)| {
                egui_plot::Bar::new(bin as f64 + 0.5, count as f64)
                    .width(0.85)
                    .name(format::BIN_LABELS[bin])
                    .fill(super::PRIMARY)
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });

    // bin range labels under the matching bars
    ui.columns(5, |columns| {
        for (bin, label) in format::BIN_LABELS.iter().enumerate() {
            columns[bin].vertical_centered(|ui| {
                ui.small(*label);
            });
        }
    });
}

/// Fill one arc of the ring as a fan of thin quads; each quad is convex
/// even though the whole segment is not.
fn paint_ring_segment(
    painter: &egui::Painter,
    center: egui::Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    sweep: f32,
    color: egui::Color32,
) {
    if sweep <= 0.0 {
        return;
    }
    let steps = ((sweep / 0.05).ceil() as usize).max(1);
    let mut previous = radial_points(center, inner, outer, start);
    for step in 1..=steps {
        let angle = start + sweep * (step as f32 / steps as f32);
        let next = radial_points(center, inner, outer, angle);
        painter.add(egui::Shape::convex_polygon(
            vec![previous.0, previous.1, next.1, next.0],
            color,
            egui::Stroke::NONE,
        ));
        previous = next;
    }
}

fn radial_points(center: egui::Pos2, inner: f32, outer: f32, angle: f32) -> (egui::Pos2, egui::Pos2) {
    let direction = egui::vec2(angle.cos(), angle.sin());
    (center + direction * outer, center + direction * inner)
}

fn legend_row(ui: &mut egui::Ui, color: egui::Color32, label: &str) {
    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, color);
        ui.label(label);
    });
}
