//! Ergebnis-Bereich: Hinweise, Fehler, Gleichung und Plot.

use glam::DVec2;

use crate::app::{AnalysisStatus, AppState};
use crate::render::PlotScene;
use crate::shared::AppOptions;

const PLOT_HEIGHT: f32 = 360.0;
const PLOT_MIN_WIDTH: f32 = 400.0;
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_BOTTOM: f32 = 28.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_RIGHT: f32 = 12.0;
const TICK_LENGTH: f32 = 4.0;

const SCATTER_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);
const FIT_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 39, 40);
const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 150, 0);
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 160, 70);

/// Rendert den Ergebnis-Bereich passend zum Analyse-Status.
pub fn render_result(ui: &mut egui::Ui, state: &AppState, scene: Option<&PlotScene>) {
    match &state.analysis {
        AnalysisStatus::Idle => {}
        AnalysisStatus::Queued { point_count } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.heading(format!(
                    "🧮 Sending data to AI backend... ({} points)",
                    point_count
                ));
            });
        }
        AnalysisStatus::Failed(error) if error.is_warning() => {
            ui.colored_label(WARNING_COLOR, format!("⚠ {}", error));
        }
        AnalysisStatus::Failed(error) => {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        AnalysisStatus::Completed(_) => {
            let Some(scene) = scene else {
                return;
            };
            ui.colored_label(
                SUCCESS_COLOR,
                egui::RichText::new(format!("Predicted Equation: {}", scene.equation)).strong(),
            );
            if let Some(caption) = &scene.caption {
                ui.label(egui::RichText::new(caption).italics());
            }
            ui.add_space(6.0);
            paint_plot(ui, scene, &state.options);
        }
    }
}

/// Zeichnet Streupunkte, Fit-Kurve, Achsen und Legende.
fn paint_plot(ui: &mut egui::Ui, scene: &PlotScene, options: &AppOptions) {
    let width = ui.available_width().max(PLOT_MIN_WIDTH);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, PLOT_HEIGHT), egui::Sense::hover());
    let outer = response.rect;

    let plot_rect = egui::Rect::from_min_max(
        egui::pos2(outer.min.x + MARGIN_LEFT, outer.min.y + MARGIN_TOP),
        egui::pos2(outer.max.x - MARGIN_RIGHT, outer.max.y - MARGIN_BOTTOM),
    );
    let origin = [plot_rect.min.x, plot_rect.min.y];
    let size = [plot_rect.width(), plot_rect.height()];
    let to_screen = |p: DVec2| {
        let [x, y] = scene.bounds.to_screen(p, origin, size);
        egui::pos2(x, y)
    };

    painter.rect_filled(plot_rect, 0.0, egui::Color32::WHITE);

    // ── Achsenteilung ──
    let axis_stroke = egui::Stroke::new(1.0, egui::Color32::DARK_GRAY);
    let label_font = egui::FontId::proportional(11.0);
    for &tick in &scene.x_ticks {
        let x = to_screen(DVec2::new(tick, scene.bounds.min.y)).x;
        let base = egui::pos2(x, plot_rect.max.y);
        painter.line_segment([base, base + egui::vec2(0.0, TICK_LENGTH)], axis_stroke);
        painter.text(
            base + egui::vec2(0.0, TICK_LENGTH + 1.0),
            egui::Align2::CENTER_TOP,
            format_tick(tick),
            label_font.clone(),
            ui.visuals().text_color(),
        );
    }
    for &tick in &scene.y_ticks {
        let y = to_screen(DVec2::new(scene.bounds.min.x, tick)).y;
        let base = egui::pos2(plot_rect.min.x, y);
        painter.line_segment([base, base - egui::vec2(TICK_LENGTH, 0.0)], axis_stroke);
        painter.text(
            base - egui::vec2(TICK_LENGTH + 2.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            format_tick(tick),
            label_font.clone(),
            ui.visuals().text_color(),
        );
    }

    let clipped = painter.with_clip_rect(plot_rect);

    // ── Nullachsen ──
    let zero_stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(140));
    if scene.zero_axes.horizontal {
        let y = to_screen(DVec2::ZERO).y;
        clipped.line_segment(
            [egui::pos2(plot_rect.min.x, y), egui::pos2(plot_rect.max.x, y)],
            zero_stroke,
        );
    }
    if scene.zero_axes.vertical {
        let x = to_screen(DVec2::ZERO).x;
        clipped.line_segment(
            [egui::pos2(x, plot_rect.min.y), egui::pos2(x, plot_rect.max.y)],
            zero_stroke,
        );
    }

    // ── Daten ──
    for &point in &scene.scatter {
        clipped.circle_filled(to_screen(point), options.scatter_radius, SCATTER_COLOR);
    }
    if scene.fit_line.len() > 1 {
        let line: Vec<egui::Pos2> = scene.fit_line.iter().map(|&p| to_screen(p)).collect();
        clipped.add(egui::Shape::line(
            line,
            egui::Stroke::new(options.fit_line_width, FIT_COLOR),
        ));
    }

    painter.rect_stroke(plot_rect, 0.0, axis_stroke, egui::StrokeKind::Outside);
    paint_legend(&painter, plot_rect, options);
}

/// Legende oben rechts im Plot.
fn paint_legend(painter: &egui::Painter, plot_rect: egui::Rect, options: &AppOptions) {
    let font = egui::FontId::proportional(12.0);
    let legend_rect = egui::Rect::from_min_size(
        egui::pos2(plot_rect.max.x - 130.0, plot_rect.min.y + 8.0),
        egui::vec2(122.0, 44.0),
    );
    painter.rect_filled(legend_rect, 3.0, egui::Color32::from_white_alpha(230));
    painter.rect_stroke(
        legend_rect,
        3.0,
        egui::Stroke::new(1.0, egui::Color32::LIGHT_GRAY),
        egui::StrokeKind::Inside,
    );

    let row_1 = legend_rect.min + egui::vec2(14.0, 13.0);
    painter.circle_filled(row_1, options.scatter_radius.max(3.0), SCATTER_COLOR);
    painter.text(
        row_1 + egui::vec2(14.0, 0.0),
        egui::Align2::LEFT_CENTER,
        "Drawn Points",
        font.clone(),
        egui::Color32::BLACK,
    );

    let row_2 = legend_rect.min + egui::vec2(14.0, 31.0);
    painter.line_segment(
        [row_2 - egui::vec2(8.0, 0.0), row_2 + egui::vec2(8.0, 0.0)],
        egui::Stroke::new(options.fit_line_width, FIT_COLOR),
    );
    painter.text(
        row_2 + egui::vec2(14.0, 0.0),
        egui::Align2::LEFT_CENTER,
        "Predicted Fit",
        font,
        egui::Color32::BLACK,
    );
}

/// Achsenbeschriftung ohne Rundungsrauschen (z.B. `0.30000000000000004`).
fn format_tick(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    format!("{}", rounded)
}
