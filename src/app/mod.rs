//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod sampling;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, Recorder, UI).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_canvas_scene;
pub use sampling::SamplingTask;
pub use state::{AppState, ExportKind, ExportReport, ImagePreview, UiState};
