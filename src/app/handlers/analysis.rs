//! Handler für den Analyse-Ablauf.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FitClient;

/// Prüft die Vorbedingungen und merkt die Analyse vor.
pub fn queue(state: &mut AppState) {
    use_cases::analysis::queue_analysis(state);
}

/// Führt die vorgemerkte Analyse gegen das Backend aus.
pub fn run(state: &mut AppState, client: &dyn FitClient) {
    use_cases::analysis::run_analysis(state, client);
}
