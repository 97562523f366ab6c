//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use anyhow::Context;

use crate::app::AppState;
use crate::core::CanvasPayload;

/// Öffnet den Import-Dialog über UI-State.
pub fn request_import_dialog(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Öffnet den Export-Dialog über UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Lädt einen Canvas-Payload (JSON) und ersetzt die aktuelle Zeichnung.
pub fn import_drawing(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Zeichnung nicht lesbar: {}", path))?;
    let payload = CanvasPayload::from_json(&json)
        .with_context(|| format!("Zeichnung fehlerhaft: {}", path))?;

    let msg = format!(
        "Zeichnung geladen: {} Objekte ({} Pfade)",
        payload.objects.len(),
        payload.path_count()
    );
    log::info!("{} aus {}", msg, path);

    state.canvas.payload = Some(payload);
    state.canvas.active_stroke.clear();
    state.canvas.drawing = false;
    state.ui.current_drawing_path = Some(path.to_string());
    state.ui.status_message = Some(msg);
    Ok(())
}

/// Schreibt die aktuelle Zeichnung als Canvas-Payload (JSON).
pub fn export_drawing(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let payload = state
        .canvas
        .payload
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Keine Zeichnung vorhanden"))?;

    let json = payload.to_json_pretty()?;
    std::fs::write(path, json).with_context(|| format!("Schreiben fehlgeschlagen: {}", path))?;

    log::info!("Zeichnung gespeichert als: {}", path);
    state.ui.current_drawing_path = Some(path.to_string());
    state.ui.status_message = Some(format!("Zeichnung gespeichert: {}", path));
    Ok(())
}
