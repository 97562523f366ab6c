//! Seitenleiste "Canvas Settings" mit Pinsel-Einstellungen und Analyse-Button.

use crate::app::{AppIntent, AppState};
use crate::shared::{GRID_SIZE_RANGE, STROKE_WIDTH_RANGE};

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("canvas_settings")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Canvas Settings");
            ui.separator();

            // Arbeitskopien, Änderungen gehen als Intents raus
            let mut width = state.canvas.stroke_width;
            if ui
                .add(egui::Slider::new(&mut width, STROKE_WIDTH_RANGE).text("Stroke width"))
                .changed()
            {
                events.push(AppIntent::StrokeWidthChanged { width });
            }

            ui.horizontal(|ui| {
                ui.label("Stroke color");
                let mut color = state.canvas.stroke_color;
                if ui.color_edit_button_srgb(&mut color).changed() {
                    events.push(AppIntent::StrokeColorChanged { color });
                }
            });

            ui.separator();

            let mut show_grid = state.canvas.show_grid;
            if ui.checkbox(&mut show_grid, "Grid background").changed() {
                events.push(AppIntent::GridToggled { enabled: show_grid });
            }
            let mut grid_size = state.canvas.grid_size;
            if ui
                .add_enabled(
                    show_grid,
                    egui::Slider::new(&mut grid_size, GRID_SIZE_RANGE).text("Grid size"),
                )
                .changed()
            {
                events.push(AppIntent::GridSizeChanged { size: grid_size });
            }

            ui.separator();

            let has_drawing = state.canvas.payload.is_some();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(has_drawing, egui::Button::new("↶ Undo"))
                    .clicked()
                {
                    events.push(AppIntent::UndoStrokeRequested);
                }
                if ui
                    .add_enabled(has_drawing, egui::Button::new("🗑 Clear"))
                    .clicked()
                {
                    events.push(AppIntent::ClearCanvasRequested);
                }
            });

            ui.separator();

            let busy = state.analysis.is_queued();
            let analyze = egui::Button::new(egui::RichText::new("Analyze Graph").strong())
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add_enabled(!busy, analyze).clicked() {
                events.push(AppIntent::AnalyzeRequested);
            }
        });

    events
}
