//! Application State: zentrale Datenhaltung.
//!
//! Saemtlicher Sitzungszustand (Zeichenflaeche, Seitenleisten-Werte,
//! Analyse-Status) liegt explizit hier und wird an Handler und Use-Cases
//! uebergeben.

use std::path::PathBuf;

use super::CommandLog;
use crate::core::{AnalysisResult, AnalyzeError, CanvasPayload, Rgb, StrokePoint};
use crate::shared::AppOptions;

/// Zustand der Zeichenflaeche inkl. Pinsel-Einstellungen.
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// Gezeichnete Objekte; `None` solange nichts gezeichnet wurde
    pub payload: Option<CanvasPayload>,
    /// Samples des laufenden Strokes
    pub active_stroke: Vec<StrokePoint>,
    /// Ob gerade ein Stroke gezeichnet wird
    pub drawing: bool,
    /// Linienbreite in Pixeln
    pub stroke_width: u8,
    /// Linienfarbe
    pub stroke_color: Rgb,
    /// Raster-Hintergrund anzeigen
    pub show_grid: bool,
    /// Rasterweite in Pixeln
    pub grid_size: u32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::from_options(&AppOptions::default())
    }
}

impl CanvasState {
    /// Erstellt eine leere Zeichenflaeche mit den Start-Einstellungen der Optionen.
    pub fn from_options(options: &AppOptions) -> Self {
        Self {
            payload: None,
            active_stroke: Vec::new(),
            drawing: false,
            stroke_width: options.default_stroke_width,
            stroke_color: options.default_stroke_color,
            show_grid: options.show_grid,
            grid_size: options.grid_size,
        }
    }

    /// Anzahl gezeichneter Objekte.
    pub fn object_count(&self) -> usize {
        self.payload.as_ref().map_or(0, |p| p.objects.len())
    }

    /// Anzahl koordinaten-tragender Punkte aller Pfad-Objekte.
    pub fn point_count(&self) -> usize {
        self.payload
            .as_ref()
            .map_or(0, |p| p.objects.iter().map(|o| o.points().count()).sum())
    }
}

/// Status der letzten Analyse.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisStatus {
    /// Noch keine Analyse angefordert
    #[default]
    Idle,
    /// Analyse angefordert, Request folgt im naechsten Frame
    Queued { point_count: usize },
    /// Backend hat geantwortet
    Completed(AnalysisResult),
    /// Analyse gescheitert (Hinweis oder Fehler)
    Failed(AnalyzeError),
}

impl AnalysisStatus {
    /// Gibt `true` zurueck, solange ein Request aussteht.
    pub fn is_queued(&self) -> bool {
        matches!(self, AnalysisStatus::Queued { .. })
    }

    /// Ergebnis der letzten erfolgreichen Analyse.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisStatus::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// Fehler der letzten Analyse.
    pub fn error(&self) -> Option<&AnalyzeError> {
        match self {
            AnalysisStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Import-Dialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Ob der Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Zuletzt verwendeter Zeichnungs-Pfad
    pub current_drawing_path: Option<String>,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

/// Gesamter Anwendungszustand.
pub struct AppState {
    /// Zeichenflaeche
    pub canvas: CanvasState,
    /// Analyse-Status
    pub analysis: AnalysisStatus,
    /// UI-Zustand
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Pfad, unter dem Optionen persistiert werden (`None` = nicht speichern)
    pub options_path: Option<PathBuf>,
    /// Ausgeführte Commands
    pub command_log: CommandLog,
    /// Ob der Options-Dialog sichtbar ist
    pub show_options_dialog: bool,
    /// Anwendung im nächsten Frame beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den gegebenen Optionen.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            canvas: CanvasState::from_options(&options),
            analysis: AnalysisStatus::Idle,
            ui: UiState::default(),
            options,
            options_path: None,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }
}
