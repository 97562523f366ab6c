//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod analysis;
pub mod canvas;
pub mod dialog;
pub mod file_io;
