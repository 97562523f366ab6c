//! Core-Domänentypen: Stroke-Punkte, Canvas-Payload, Fit-Request/-Response, Backend-Client.

pub mod analysis;
pub mod canvas_grid;
/// Payload der Zeichenflaeche
///
/// Enthaelt das JSON-kompatible Objektmodell und die Punkt-Extraktion:
/// - CanvasPayload: alle gezeichneten Objekte
/// - CanvasObject: ein Objekt (nur `path` liefert Punkte)
/// - PathCommand: ein Pfad-Befehl, ab drei Elementen mit Koordinate
pub mod canvas_payload;
pub mod fit;
pub mod fit_client;
pub mod stroke;

pub use analysis::{analyze, prepare, AnalysisResult, AnalyzeError};
pub use canvas_grid::{render_grid_image, GRID_LINE_COLOR};
pub use canvas_payload::{
    extract_points, rgb_from_hex, rgb_to_hex, CanvasObject, CanvasPayload, PathCommand, Rgb,
};
pub use fit::{FitRequest, FitResponse};
pub use fit_client::{predict_endpoint, FitClient, FitError, HttpFitClient};
pub use stroke::{StrokeCollection, StrokePoint, MIN_STROKE_POINTS};
