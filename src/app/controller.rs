//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{FitClient, HttpFitClient};
use crate::render::{self, PlotScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Ohne injizierten Client wird pro Analyse ein `HttpFitClient` aus den
/// aktuellen Optionen gebaut (URL und Timeout sind so live änderbar).
#[derive(Default)]
pub struct AppController {
    fit_client: Option<Box<dyn FitClient>>,
}

impl AppController {
    /// Erstellt einen neuen Controller mit HTTP-Backend laut Optionen.
    pub fn new() -> Self {
        Self { fit_client: None }
    }

    /// Erstellt einen Controller mit fest vorgegebenem Fit-Client (Tests, Stubs).
    pub fn with_fit_client(client: impl FitClient + 'static) -> Self {
        Self {
            fit_client: Some(Box::new(client)),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenflaeche ===
            AppCommand::BeginStroke { pos } => handlers::canvas::begin_stroke(state, pos),
            AppCommand::ExtendStroke { pos } => handlers::canvas::extend_stroke(state, pos),
            AppCommand::FinishStroke => handlers::canvas::finish_stroke(state),
            AppCommand::UndoStroke => handlers::canvas::undo_stroke(state),
            AppCommand::ClearCanvas => handlers::canvas::clear(state),
            AppCommand::SetStrokeWidth { width } => handlers::canvas::set_stroke_width(state, width),
            AppCommand::SetStrokeColor { color } => handlers::canvas::set_stroke_color(state, color),
            AppCommand::SetGridVisible { enabled } => {
                handlers::canvas::set_grid_visible(state, enabled)
            }
            AppCommand::SetGridSize { size } => handlers::canvas::set_grid_size(state, size),

            // === Analyse ===
            AppCommand::QueueAnalysis => handlers::analysis::queue(state),
            AppCommand::RunAnalysis => match self.fit_client.as_deref() {
                Some(client) => handlers::analysis::run(state, client),
                None => {
                    let client = HttpFitClient::new(
                        &state.options.backend_url,
                        state.options.request_timeout(),
                    );
                    handlers::analysis::run(state, &client)
                }
            },

            // === Datei-I/O ===
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::ImportDrawing { path } => handlers::file_io::import(state, path)?,
            AppCommand::ExportDrawing { path } => handlers::file_io::export(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Plot-Szene der letzten erfolgreichen Analyse.
    pub fn build_plot_scene(&self, state: &AppState) -> Option<PlotScene> {
        state
            .analysis
            .result()
            .map(|result| render::build_plot_scene(result, state.options.show_zero_axes))
    }
}
