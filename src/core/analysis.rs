//! Analyse-Ablauf: Punkte extrahieren, Mindestanzahl pruefen, Fit anfragen.

use super::canvas_payload::{extract_points, CanvasPayload};
use super::fit::FitResponse;
use super::fit_client::{FitClient, FitError};
use super::stroke::{StrokeCollection, MIN_STROKE_POINTS};

/// Fehler einer einzelnen Analyse. Jede Analyse scheitert unabhaengig.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeError {
    /// Es liegt kein Payload vor (noch nichts gezeichnet).
    #[error("Please draw something first.")]
    NoDrawing,
    /// Zu wenige Punkte fuer eine Fit-Anfrage.
    #[error("Please draw a bigger curve.")]
    InsufficientPoints { found: usize, required: usize },
    /// Fehler beim Backend-Aufruf.
    #[error(transparent)]
    Fit(#[from] FitError),
}

impl AnalyzeError {
    /// Hinweise (Zeichnung fehlt/zu klein) statt echter Fehler.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            AnalyzeError::NoDrawing | AnalyzeError::InsufficientPoints { .. }
        )
    }
}

/// Ergebnis einer erfolgreichen Analyse: Originalpunkte plus Backend-Antwort.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Extrahierte Punkte (Grundlage des Requests)
    pub points: StrokeCollection,
    /// Validierte Backend-Antwort
    pub response: FitResponse,
}

/// Prueft die Vorbedingungen und liefert die extrahierten Punkte.
///
/// Ohne Payload → `NoDrawing`, mit hoechstens 10 Punkten → `InsufficientPoints`.
pub fn prepare(payload: Option<&CanvasPayload>) -> Result<StrokeCollection, AnalyzeError> {
    let payload = payload.ok_or(AnalyzeError::NoDrawing)?;

    let points = extract_points(payload);
    if !points.meets_minimum() {
        return Err(AnalyzeError::InsufficientPoints {
            found: points.len(),
            required: MIN_STROKE_POINTS,
        });
    }
    Ok(points)
}

/// Fuehrt eine komplette Analyse aus.
///
/// Scheitern die Vorbedingungen, wird kein Request abgesetzt.
pub fn analyze(
    payload: Option<&CanvasPayload>,
    client: &dyn FitClient,
) -> Result<AnalysisResult, AnalyzeError> {
    let points = prepare(payload)?;

    let request = points.to_fit_request();
    let response = client.predict(&request)?;

    Ok(AnalysisResult { points, response })
}
