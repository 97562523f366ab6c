//! Use-Case-Funktionen für die Analyse.
//!
//! Ablauf in zwei Frames: `queue_analysis` prüft die Vorbedingungen und
//! setzt die Statusmeldung, `run_analysis` setzt im Folgeframe den
//! blockierenden Request ab. So ist die Meldung sichtbar, solange die UI
//! auf das Backend wartet.

use crate::app::{AnalysisStatus, AppState};
use crate::core::{self, FitClient};

/// Statusmeldung während des Requests.
pub const SENDING_MESSAGE: &str = "Sending data to AI backend...";

/// Prüft Zeichnung und Punktanzahl; bei Erfolg wird die Analyse vorgemerkt.
pub fn queue_analysis(state: &mut AppState) {
    match core::analysis::prepare(state.canvas.payload.as_ref()) {
        Ok(points) => {
            state.analysis = AnalysisStatus::Queued {
                point_count: points.len(),
            };
            state.ui.status_message = Some(SENDING_MESSAGE.to_string());
        }
        Err(e) => {
            log::warn!("Analyse nicht möglich: {}", e);
            state.analysis = AnalysisStatus::Failed(e);
        }
    }
}

/// Führt die Analyse aus und legt Ergebnis oder Fehler im State ab.
///
/// Scheitert nie nach außen: jeder Fehler landet als `AnalysisStatus::Failed`.
pub fn run_analysis(state: &mut AppState, client: &dyn FitClient) {
    state.ui.status_message = None;

    state.analysis = match core::analyze(state.canvas.payload.as_ref(), client) {
        Ok(result) => {
            log::info!(
                "Fit von {} für {} Punkte: {}",
                client.endpoint(),
                result.points.len(),
                result.response.equation
            );
            AnalysisStatus::Completed(result)
        }
        Err(e) if e.is_warning() => {
            log::warn!("Analyse nicht möglich: {}", e);
            AnalysisStatus::Failed(e)
        }
        Err(e) => {
            log::error!("Analyse gegen {} fehlgeschlagen: {}", client.endpoint(), e);
            AnalysisStatus::Failed(e)
        }
    };
}
