use crate::app::sampling::SamplingTask;
use crate::app::CommandLog;
use crate::core::{PixelRun, Session, StrokeRecorder};
use crate::shared::SketchOptions;

use super::UiState;

/// Pixel-Läufe des zuletzt vektorisierten Bildes (für die Vorschau).
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    pub runs: Vec<PixelRun>,
    pub image_width: u32,
    pub image_height: u32,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Zeichensitzung (versiegelte Striche + final_time)
    pub session: Session,
    /// Recorder mit dem offenen Strich
    pub recorder: StrokeRecorder,
    /// Abtast-Task, läuft solange ein Strich offen ist
    pub sampling: SamplingTask,
    /// Vorschau der letzten Bild-Vektorisierung
    pub image_preview: Option<ImagePreview>,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: SketchOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(SketchOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: SketchOptions) -> Self {
        let interval = options.sampling_interval();
        Self {
            session: Session::new(),
            recorder: StrokeRecorder::new(interval),
            sampling: SamplingTask::new(interval),
            image_preview: None,
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl versiegelter Striche (für UI-Anzeige)
    pub fn stroke_count(&self) -> usize {
        self.session.stroke_count()
    }

    /// Ob gerade gezeichnet wird.
    pub fn is_drawing(&self) -> bool {
        self.recorder.is_recording()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
