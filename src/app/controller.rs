//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::CanvasScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, werden die folgenden nicht mehr ausgeführt
    /// (z.B. kein Beenden nach fehlgeschlagenem Export).
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
            // === Zeichnen ===
            AppCommand::BeginStroke { position, at } => {
                handlers::drawing::begin(state, position, at)
            }
            AppCommand::PollSample { position, at } => handlers::drawing::poll(state, position, at),
            AppCommand::EndStroke { position, at } => handlers::drawing::end(state, position, at),
            AppCommand::ClearSession => handlers::drawing::clear(state),

            // === Datei-I/O ===
            AppCommand::ExportStrokes => handlers::file_io::export_strokes(state)?,
            AppCommand::RequestImageDialog => handlers::file_io::request_image(state),
            AppCommand::VectorizeImage { path } => handlers::file_io::vectorize_image(state, path)?,
            AppCommand::CancelImageImport => handlers::file_io::cancel_image(state)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Canvas-Szene aus dem aktuellen AppState.
    pub fn build_canvas_scene(&self, state: &AppState) -> CanvasScene {
        render_scene::build(state)
    }
}
