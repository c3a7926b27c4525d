//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { position, at } => {
            // Klicks außerhalb des logischen Canvas starten keinen Strich
            if state.options.canvas().contains(position) {
                vec![AppCommand::BeginStroke { position, at }]
            } else {
                log::debug!("Pointer-Down außerhalb des Canvas ignoriert: {:?}", position);
                vec![]
            }
        }
        AppIntent::PointerReleased { position, at } => {
            if state.recorder.is_recording() {
                vec![AppCommand::EndStroke { position, at }]
            } else {
                vec![]
            }
        }
        AppIntent::SamplingTick { position, at } => {
            if state.recorder.is_recording() {
                vec![AppCommand::PollSample { position, at }]
            } else {
                vec![]
            }
        }
        AppIntent::TerminateRequested => {
            vec![AppCommand::ExportStrokes, AppCommand::RequestExit]
        }
        AppIntent::ExportRequested => vec![AppCommand::ExportStrokes],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ImageUploadRequested => vec![AppCommand::RequestImageDialog],
        AppIntent::ImageSelected { path } => vec![AppCommand::VectorizeImage { path }],
        AppIntent::ImageSelectionCancelled => vec![AppCommand::CancelImageImport],
        AppIntent::ClearRequested => vec![AppCommand::ClearSession],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
