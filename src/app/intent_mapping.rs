//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::{GRID_SIZE_RANGE, STROKE_WIDTH_RANGE};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StrokeStarted { pos } => vec![AppCommand::BeginStroke { pos }],
        AppIntent::StrokeExtended { pos } => {
            if state.canvas.drawing {
                vec![AppCommand::ExtendStroke { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::StrokeFinished => {
            if state.canvas.drawing {
                vec![AppCommand::FinishStroke]
            } else {
                vec![]
            }
        }
        AppIntent::UndoStrokeRequested => vec![AppCommand::UndoStroke],
        AppIntent::ClearCanvasRequested => vec![AppCommand::ClearCanvas],

        AppIntent::StrokeWidthChanged { width } => vec![AppCommand::SetStrokeWidth {
            width: width.clamp(*STROKE_WIDTH_RANGE.start(), *STROKE_WIDTH_RANGE.end()),
        }],
        AppIntent::StrokeColorChanged { color } => vec![AppCommand::SetStrokeColor { color }],
        AppIntent::GridToggled { enabled } => vec![AppCommand::SetGridVisible { enabled }],
        AppIntent::GridSizeChanged { size } => vec![AppCommand::SetGridSize {
            size: size.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end()),
        }],

        // Nur ein Request gleichzeitig
        AppIntent::AnalyzeRequested => {
            if state.analysis.is_queued() {
                vec![]
            } else {
                vec![AppCommand::FinishStroke, AppCommand::QueueAnalysis]
            }
        }
        AppIntent::AnalysisDispatchReady => {
            if state.analysis.is_queued() {
                vec![AppCommand::RunAnalysis]
            } else {
                vec![]
            }
        }

        AppIntent::ImportDrawingRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ExportDrawingRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::DrawingFileSelected { path } => vec![AppCommand::ImportDrawing { path }],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportDrawing { path }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
