//! UI-Komponenten: Toolbar, Zeichenfläche, Statusleiste, Dialoge.

/// UI-Layer mit egui
///
/// Die Komponenten lesen nur den AppState und liefern AppIntents zurück.
mod canvas;
pub mod dialogs;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::CanvasInput;
pub use dialogs::handle_file_dialogs;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
