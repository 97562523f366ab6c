//! Optionen-Dialog für Backend, Zeichenflaeche und Plot.

use crate::app::{AppIntent, AppState};
use crate::core::Rgb;
use crate::shared::{GRID_SIZE_RANGE, STROKE_WIDTH_RANGE};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Backend ─────────────────────────────────────
                    ui.collapsing("Backend", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("URL:");
                            changed |= ui.text_edit_singleline(&mut opts.backend_url).changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Timeout (s):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.request_timeout_secs)
                                        .range(1..=300)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                    });

                    // ── Zeichenflaeche ──────────────────────────────
                    ui.collapsing("Zeichenfläche", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Breite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.canvas_width)
                                        .range(100..=2000)
                                        .speed(5.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Höhe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.canvas_height)
                                        .range(100..=2000)
                                        .speed(5.0),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        ui.horizontal(|ui| {
                            ui.label("Linienbreite (Start):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.default_stroke_width)
                                        .range(STROKE_WIDTH_RANGE)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |=
                            color_edit(ui, "Linienfarbe (Start):", &mut opts.default_stroke_color);
                        changed |= ui
                            .checkbox(&mut opts.show_grid, "Raster beim Start")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Rasterweite (Start):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.grid_size)
                                        .range(GRID_SIZE_RANGE)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                    });

                    // ── Plot ────────────────────────────────────────
                    ui.collapsing("Plot", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.show_zero_axes, "Nullachsen anzeigen")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Punktradius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.scatter_radius)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke Fit:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.fit_line_width)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für RGB-Werte.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Rgb) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui.color_edit_button_srgb(color).changed();
    });
    changed
}
