//! Application State: zentrale Datenhaltung.

mod app_state;
mod ui;

pub use app_state::{AppState, ImagePreview};
pub use ui::{ExportKind, ExportReport, UiState};
