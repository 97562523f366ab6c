//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod dispatch_gate;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Zeichenflaeche, Analyse, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, LogEntry};
pub use controller::AppController;
pub use dispatch_gate::DispatchGate;
pub use events::{AppCommand, AppIntent};
pub use state::{AnalysisStatus, AppState, CanvasState, UiState};
