//! Handler für Zeichenflaeche und Pinsel-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Rgb, StrokePoint};

/// Beginnt einen neuen Stroke.
pub fn begin_stroke(state: &mut AppState, pos: StrokePoint) {
    use_cases::canvas::begin_stroke(state, pos);
}

/// Verlängert den laufenden Stroke.
pub fn extend_stroke(state: &mut AppState, pos: StrokePoint) {
    use_cases::canvas::extend_stroke(state, pos);
}

/// Schließt den laufenden Stroke ab.
pub fn finish_stroke(state: &mut AppState) {
    use_cases::canvas::finish_stroke(state);
}

/// Entfernt das zuletzt gezeichnete Objekt.
pub fn undo_stroke(state: &mut AppState) {
    use_cases::canvas::undo_last_object(state);
}

/// Leert die Zeichenflaeche.
pub fn clear(state: &mut AppState) {
    use_cases::canvas::clear_canvas(state);
}

/// Setzt die Linienbreite für folgende Strokes.
pub fn set_stroke_width(state: &mut AppState, width: u8) {
    state.canvas.stroke_width = width;
}

/// Setzt die Linienfarbe für folgende Strokes.
pub fn set_stroke_color(state: &mut AppState, color: Rgb) {
    state.canvas.stroke_color = color;
}

/// Schaltet den Raster-Hintergrund.
pub fn set_grid_visible(state: &mut AppState, enabled: bool) {
    state.canvas.show_grid = enabled;
}

/// Setzt die Rasterweite.
pub fn set_grid_size(state: &mut AppState, size: u32) {
    state.canvas.grid_size = size;
}
