use crate::core::{Rgb, StrokePoint};
use crate::shared::AppOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeichenflaeche ──────────────────────────────────────────
    /// Maustaste auf der Zeichenflaeche gedrückt (Canvas-Pixel)
    StrokeStarted { pos: StrokePoint },
    /// Maus bei gedrückter Taste bewegt
    StrokeExtended { pos: StrokePoint },
    /// Maustaste losgelassen
    StrokeFinished,
    /// Letzten Stroke entfernen
    UndoStrokeRequested,
    /// Zeichenflaeche leeren
    ClearCanvasRequested,

    // ── Seitenleiste ────────────────────────────────────────────
    /// Linienbreite per Slider geändert
    StrokeWidthChanged { width: u8 },
    /// Linienfarbe per Color-Picker geändert
    StrokeColorChanged { color: Rgb },
    /// Raster-Hintergrund ein-/ausgeschaltet
    GridToggled { enabled: bool },
    /// Rasterweite geändert
    GridSizeChanged { size: u32 },

    // ── Analyse ─────────────────────────────────────────────────
    /// "Analyze Graph" gedrückt
    AnalyzeRequested,
    /// Statusmeldung wurde gezeichnet, Request kann abgesetzt werden
    AnalysisDispatchReady,

    // ── Datei-I/O ───────────────────────────────────────────────
    /// Zeichnung importieren (zeigt Dateidialog)
    ImportDrawingRequested,
    /// Zeichnung exportieren (zeigt Dateidialog)
    ExportDrawingRequested,
    /// Import-Datei wurde im Dialog ausgewählt
    DrawingFileSelected { path: String },
    /// Export-Pfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },

    // ── Optionen & Anwendung ────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen im Dialog geändert (Live-Preview)
    OptionsChanged { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
