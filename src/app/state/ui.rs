use std::path::PathBuf;

/// Herkunft eines Exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Gezeichnete Striche
    Strokes,
    /// Vektorisiertes Bild
    Image,
}

/// Ergebnis des letzten erfolgreichen Exports (für die Status-Bar).
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub kind: ExportKind,
    pub path: PathBuf,
    pub segment_count: usize,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Bild-Auswahldialog anzeigen (wird vom UI-Layer zurückgesetzt)
    pub show_image_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Status- oder Fehlermeldung für die Status-Bar
    pub status_message: Option<String>,
    /// Letzter erfolgreicher Export
    pub last_export: Option<ExportReport>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
