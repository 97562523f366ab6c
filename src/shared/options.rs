//! Zentrale Konfiguration fuer Reverse Desmos.
//!
//! `AppOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::Rgb;

// ── Backend ─────────────────────────────────────────────────────────

/// Basis-URL des Fit-Backends (Endpunkt: `<url>/predict`).
pub const DEFAULT_BACKEND_URL: &str = "https://alekhah-ai.onrender.com";
/// Request-Timeout in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ── Zeichenflaeche ─────────────────────────────────────────────────

/// Breite der Zeichenflaeche in Pixeln.
pub const CANVAS_WIDTH: u32 = 600;
/// Hoehe der Zeichenflaeche in Pixeln.
pub const CANVAS_HEIGHT: u32 = 400;
/// Hintergrundfarbe der Zeichenflaeche (Weiss).
pub const CANVAS_BACKGROUND: Rgb = [0xff, 0xff, 0xff];
/// Standard-Linienbreite.
pub const STROKE_WIDTH_DEFAULT: u8 = 2;
/// Erlaubter Bereich der Linienbreite.
pub const STROKE_WIDTH_RANGE: std::ops::RangeInclusive<u8> = 1..=5;
/// Standard-Linienfarbe (Schwarz).
pub const STROKE_COLOR_DEFAULT: Rgb = [0, 0, 0];
/// Standard-Rasterweite in Pixeln.
pub const GRID_SIZE_DEFAULT: u32 = 20;
/// Erlaubter Bereich der Rasterweite.
pub const GRID_SIZE_RANGE: std::ops::RangeInclusive<u32> = 10..=100;

// ── Plot ───────────────────────────────────────────────────────────

/// Radius der Streupunkte im Ergebnis-Plot.
pub const SCATTER_RADIUS: f32 = 2.5;
/// Linienstaerke der Fit-Kurve.
pub const FIT_LINE_WIDTH: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Optionen.
/// Wird als `reverse_desmos.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    // ── Backend ─────────────────────────────────────────────────
    /// Basis-URL des Fit-Backends
    pub backend_url: String,
    /// Timeout fuer den Fit-Request in Sekunden
    pub request_timeout_secs: u64,

    // ── Zeichenflaeche ──────────────────────────────────────────
    /// Breite der Zeichenflaeche in Pixeln
    pub canvas_width: u32,
    /// Hoehe der Zeichenflaeche in Pixeln
    pub canvas_height: u32,
    /// Hintergrundfarbe der Zeichenflaeche
    pub background_color: Rgb,
    /// Linienbreite beim Start
    pub default_stroke_width: u8,
    /// Linienfarbe beim Start
    pub default_stroke_color: Rgb,
    /// Raster-Hintergrund beim Start anzeigen
    pub show_grid: bool,
    /// Rasterweite beim Start
    pub grid_size: u32,

    // ── Plot ────────────────────────────────────────────────────
    /// Nullachsen im Ergebnis-Plot einzeichnen
    pub show_zero_axes: bool,
    /// Radius der Streupunkte
    pub scatter_radius: f32,
    /// Linienstaerke der Fit-Kurve
    pub fit_line_width: f32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            background_color: CANVAS_BACKGROUND,
            default_stroke_width: STROKE_WIDTH_DEFAULT,
            default_stroke_color: STROKE_COLOR_DEFAULT,
            show_grid: false,
            grid_size: GRID_SIZE_DEFAULT,

            show_zero_axes: true,
            scatter_radius: SCATTER_RADIUS,
            fit_line_width: FIT_LINE_WIDTH,
        }
    }
}

impl AppOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen nicht als TOML serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("reverse_desmos"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("reverse_desmos.toml")
    }

    /// Request-Timeout als `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Canvas-Groesse als `[Breite, Hoehe]` in Pixeln.
    pub fn canvas_size(&self) -> [u32; 2] {
        [self.canvas_width.max(1), self.canvas_height.max(1)]
    }
}
