//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::predict_endpoint;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Objects: {} | Points: {}",
                state.canvas.object_count(),
                state.canvas.point_count()
            ));

            ui.separator();

            ui.label(format!(
                "Backend: {} ({} s)",
                predict_endpoint(&state.options.backend_url),
                state.options.request_timeout().as_secs()
            ));

            if let Some(path) = &state.ui.current_drawing_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Drawing: {}", filename));
            }

            let history: Vec<String> = state
                .command_log
                .recent(3)
                .map(ToString::to_string)
                .collect();
            if !history.is_empty() {
                ui.separator();
                ui.label(egui::RichText::new(history.join(" ← ")).weak());
            }

            // Statusnachricht (z.B. laufender Request, Import/Export)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }
        });
    });
}
