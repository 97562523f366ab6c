use crate::core::{Rgb, StrokePoint};
use crate::shared::AppOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Stroke an Canvas-Position beginnen
    BeginStroke { pos: StrokePoint },
    /// Laufenden Stroke um ein Sample verlängern
    ExtendStroke { pos: StrokePoint },
    /// Laufenden Stroke als Pfad-Objekt übernehmen
    FinishStroke,
    /// Letztes Objekt entfernen
    UndoStroke,
    /// Alle Objekte entfernen
    ClearCanvas,
    /// Linienbreite setzen
    SetStrokeWidth { width: u8 },
    /// Linienfarbe setzen
    SetStrokeColor { color: Rgb },
    /// Raster-Hintergrund ein-/ausschalten
    SetGridVisible { enabled: bool },
    /// Rasterweite setzen
    SetGridSize { size: u32 },
    /// Analyse vormerken (Vorbedingungen prüfen, Statusmeldung setzen)
    QueueAnalysis,
    /// Vorgemerkte Analyse ausführen (blockierender Request)
    RunAnalysis,
    /// Import-Dialog anfordern
    RequestImportDialog,
    /// Export-Dialog anfordern
    RequestExportDialog,
    /// Zeichnung aus Datei laden
    ImportDrawing { path: String },
    /// Zeichnung in Datei schreiben
    ExportDrawing { path: String },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen
    ApplyOptions { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname für Verlauf und Status-Bar (ohne Nutzdaten wie Positionen oder Optionen).
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::BeginStroke { .. } => "BeginStroke",
            AppCommand::ExtendStroke { .. } => "ExtendStroke",
            AppCommand::FinishStroke => "FinishStroke",
            AppCommand::UndoStroke => "UndoStroke",
            AppCommand::ClearCanvas => "ClearCanvas",
            AppCommand::SetStrokeWidth { .. } => "SetStrokeWidth",
            AppCommand::SetStrokeColor { .. } => "SetStrokeColor",
            AppCommand::SetGridVisible { .. } => "SetGridVisible",
            AppCommand::SetGridSize { .. } => "SetGridSize",
            AppCommand::QueueAnalysis => "QueueAnalysis",
            AppCommand::RunAnalysis => "RunAnalysis",
            AppCommand::RequestImportDialog => "RequestImportDialog",
            AppCommand::RequestExportDialog => "RequestExportDialog",
            AppCommand::ImportDrawing { .. } => "ImportDrawing",
            AppCommand::ExportDrawing { .. } => "ExportDrawing",
            AppCommand::OpenOptionsDialog => "OpenOptionsDialog",
            AppCommand::CloseOptionsDialog => "CloseOptionsDialog",
            AppCommand::ApplyOptions { .. } => "ApplyOptions",
            AppCommand::ResetOptions => "ResetOptions",
            AppCommand::RequestExit => "RequestExit",
        }
    }
}
