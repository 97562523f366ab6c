//! Top-Menü (File, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Drawing...").clicked() {
                    events.push(AppIntent::ImportDrawingRequested);
                    ui.close();
                }

                let has_drawing = state.canvas.payload.is_some();
                if ui
                    .add_enabled(has_drawing, egui::Button::new("Export Drawing..."))
                    .clicked()
                {
                    events.push(AppIntent::ExportDrawingRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let has_drawing = state.canvas.payload.is_some();
                if ui
                    .add_enabled(has_drawing, egui::Button::new("Undo Stroke"))
                    .clicked()
                {
                    events.push(AppIntent::UndoStrokeRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(has_drawing, egui::Button::new("Clear Canvas"))
                    .clicked()
                {
                    events.push(AppIntent::ClearCanvasRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
