//! Reverse Desmos AI Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use crate::core::{
    analyze, extract_points, AnalysisResult, AnalyzeError, CanvasObject, CanvasPayload,
    FitClient, FitError, FitRequest, FitResponse, HttpFitClient, StrokeCollection,
};
pub use app::{
    AnalysisStatus, AppCommand, AppController, AppIntent, AppState, CanvasState, DispatchGate,
    UiState,
};
pub use render::PlotScene;
pub use shared::AppOptions;
