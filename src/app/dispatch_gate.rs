//! Frame-Steuerung für den blockierenden Analyse-Request.
//!
//! Der Request blockiert den UI-Thread. Er darf erst starten, wenn ein
//! Frame mit Spinner und "Sending data to AI backend..." tatsächlich
//! gezeichnet wurde. Maßgeblich ist der Status beim Zeichnen, nicht der
//! Status nach der Event-Verarbeitung desselben Frames.

use super::AppState;

/// Merkt sich, ob der zuletzt gezeichnete Frame den Queued-Status zeigte.
#[derive(Debug, Default)]
pub struct DispatchGate {
    queued_painted: bool,
}

impl DispatchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame-Anfang: `true`, wenn der Request jetzt abgesetzt werden soll.
    pub fn take_ready(&mut self, state: &AppState) -> bool {
        let ready = self.queued_painted && state.analysis.is_queued();
        self.queued_painted = false;
        ready
    }

    /// Frame-Ende: `queued_at_render` ist der Queued-Status beim Zeichnen.
    pub fn frame_rendered(&mut self, queued_at_render: bool) {
        self.queued_painted = queued_at_render;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AnalysisStatus;

    #[test]
    fn test_queued_after_render_waits_one_more_frame() {
        let mut gate = DispatchGate::new();
        let mut state = AppState::new();

        // Frame N: gezeichnet ohne Queued, danach Klick verarbeitet
        assert!(!gate.take_ready(&state));
        let queued_at_render = state.analysis.is_queued();
        state.analysis = AnalysisStatus::Queued { point_count: 20 };
        gate.frame_rendered(queued_at_render);

        // Frame N+1: noch kein Request, jetzt wird der Spinner gezeichnet
        assert!(!gate.take_ready(&state));
        gate.frame_rendered(state.analysis.is_queued());

        // Frame N+2: Request
        assert!(gate.take_ready(&state));
    }

    #[test]
    fn test_dispatch_happens_only_once() {
        let mut gate = DispatchGate::new();
        let state = AppState {
            analysis: AnalysisStatus::Queued { point_count: 12 },
            ..AppState::new()
        };

        gate.frame_rendered(true);

        assert!(gate.take_ready(&state));
        assert!(!gate.take_ready(&state));
    }

    #[test]
    fn test_no_dispatch_when_queue_was_cleared() {
        let mut gate = DispatchGate::new();
        let state = AppState::new();

        gate.frame_rendered(true);

        assert!(!gate.take_ready(&state));
    }
}
