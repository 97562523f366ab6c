//! Handler für Import und Export von Zeichnungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Import-Dialog.
pub fn request_import(state: &mut AppState) {
    use_cases::file_io::request_import_dialog(state);
}

/// Öffnet den Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export_dialog(state);
}

/// Lädt eine Zeichnung aus einer Payload-Datei.
pub fn import(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::import_drawing(state, &path)
}

/// Schreibt die aktuelle Zeichnung als Payload-Datei.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::export_drawing(state, &path)
}
