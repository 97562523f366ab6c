//! Use-Case-Funktionen für die Zeichenflaeche.

use glam::DVec2;

use crate::app::AppState;
use crate::core::{CanvasObject, StrokePoint};

/// Samples, die näher als dieser Abstand (Pixel) am vorigen liegen, werden verworfen.
pub const MIN_SAMPLE_DISTANCE_PX: f64 = 1.0;

/// Begrenzt eine Position auf die Zeichenflaeche.
fn clamp_to_canvas(state: &AppState, pos: StrokePoint) -> StrokePoint {
    let [w, h] = state.options.canvas_size();
    pos.clamp(DVec2::ZERO, DVec2::new(w as f64, h as f64))
}

/// Beginnt einen neuen Stroke; ein unterbrochener Stroke wird verworfen.
pub fn begin_stroke(state: &mut AppState, pos: StrokePoint) {
    let pos = clamp_to_canvas(state, pos);
    state.canvas.active_stroke.clear();
    state.canvas.active_stroke.push(pos);
    state.canvas.drawing = true;
}

/// Hängt ein Sample an den laufenden Stroke.
pub fn extend_stroke(state: &mut AppState, pos: StrokePoint) {
    if !state.canvas.drawing {
        return;
    }
    let pos = clamp_to_canvas(state, pos);
    if let Some(last) = state.canvas.active_stroke.last() {
        if last.distance(pos) < MIN_SAMPLE_DISTANCE_PX {
            return;
        }
    }
    state.canvas.active_stroke.push(pos);
}

/// Übernimmt den laufenden Stroke als Freihand-Pfad in den Payload.
pub fn finish_stroke(state: &mut AppState) {
    if !state.canvas.drawing {
        return;
    }
    state.canvas.drawing = false;

    let samples = std::mem::take(&mut state.canvas.active_stroke);
    if samples.is_empty() {
        return;
    }

    let object = CanvasObject::freehand(
        &samples,
        f64::from(state.canvas.stroke_width),
        state.canvas.stroke_color,
    );
    let payload = state.canvas.payload.get_or_insert_with(Default::default);
    payload.objects.push(object);

    log::debug!(
        "Stroke mit {} Samples übernommen ({} Objekte)",
        samples.len(),
        payload.objects.len()
    );
}

/// Entfernt das zuletzt gezeichnete Objekt. Ohne Objekte gilt die Flaeche als leer.
pub fn undo_last_object(state: &mut AppState) {
    let Some(payload) = state.canvas.payload.as_mut() else {
        return;
    };
    payload.objects.pop();
    if payload.objects.is_empty() {
        state.canvas.payload = None;
    }
}

/// Entfernt alle Objekte und einen evtl. laufenden Stroke.
pub fn clear_canvas(state: &mut AppState) {
    state.canvas.payload = None;
    state.canvas.active_stroke.clear();
    state.canvas.drawing = false;
    log::info!("Zeichenflaeche geleert");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(state: &mut AppState, points: &[(f64, f64)]) {
        let (first, rest) = points.split_first().expect("mind. ein Punkt");
        begin_stroke(state, DVec2::new(first.0, first.1));
        for &(x, y) in rest {
            extend_stroke(state, DVec2::new(x, y));
        }
        finish_stroke(state);
    }

    #[test]
    fn test_finished_stroke_becomes_path_object() {
        let mut state = AppState::new();

        draw(&mut state, &[(10.0, 10.0), (20.0, 15.0), (30.0, 25.0)]);

        assert!(!state.canvas.drawing);
        assert_eq!(state.canvas.object_count(), 1);
        assert_eq!(state.canvas.point_count(), 3);
    }

    #[test]
    fn test_close_samples_are_dropped() {
        let mut state = AppState::new();

        draw(&mut state, &[(10.0, 10.0), (10.2, 10.3), (15.0, 10.0)]);

        assert_eq!(state.canvas.point_count(), 2);
    }

    #[test]
    fn test_samples_are_clamped_to_canvas() {
        let mut state = AppState::new();

        draw(&mut state, &[(-5.0, 10.0), (700.0, 900.0)]);

        let payload = state.canvas.payload.as_ref().expect("Payload erwartet");
        let points: Vec<_> = payload.objects[0].points().collect();
        assert_eq!(points, vec![DVec2::new(0.0, 10.0), DVec2::new(600.0, 400.0)]);
    }

    #[test]
    fn test_undo_last_object_empties_payload() {
        let mut state = AppState::new();
        draw(&mut state, &[(1.0, 1.0), (5.0, 5.0)]);
        draw(&mut state, &[(50.0, 50.0), (60.0, 60.0)]);

        undo_last_object(&mut state);
        assert_eq!(state.canvas.object_count(), 1);

        undo_last_object(&mut state);
        assert!(state.canvas.payload.is_none());
    }

    #[test]
    fn test_stroke_uses_current_brush() {
        let mut state = AppState::new();
        state.canvas.stroke_width = 4;
        state.canvas.stroke_color = [0x12, 0x34, 0x56];

        draw(&mut state, &[(1.0, 1.0), (9.0, 9.0)]);

        let object = &state.canvas.payload.as_ref().expect("Payload erwartet").objects[0];
        assert_eq!(object.stroke_width, Some(4.0));
        assert_eq!(object.stroke.as_deref(), Some("#123456"));
    }
}
