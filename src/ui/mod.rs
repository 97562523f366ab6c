//! UI-Komponenten: Menü, Seitenleiste, Zeichenflaeche, Ergebnis, Dialoge.

/// UI-Layer mit egui
///
/// Zeichenflaeche und Ergebnis-Plot liegen in eigenen Dateien.
/// Alle Komponenten lesen nur den AppState und liefern `AppIntent`s.
pub mod canvas;
pub mod dialogs;
pub mod menu;
pub mod options_dialog;
pub mod result_panel;
pub mod sidebar;
pub mod status;

pub use canvas::CanvasView;
pub use dialogs::handle_file_dialogs;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use result_panel::render_result;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;

use crate::core::Rgb;

/// Wandelt eine RGB-Farbe in eine egui-Farbe.
pub(crate) fn rgb_to_color32([r, g, b]: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}
