use crate::shared::SketchOptions;
use glam::DVec2;
use std::path::PathBuf;
use std::time::Instant;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maustaste auf dem Canvas gedrückt
    PointerPressed { position: DVec2, at: Instant },
    /// Maustaste losgelassen
    PointerReleased { position: DVec2, at: Instant },
    /// Abtast-Task ist fällig (aktuelle Zeigerposition)
    SamplingTick { position: DVec2, at: Instant },
    /// Striche exportieren und Anwendung beenden
    TerminateRequested,
    /// Striche exportieren, Fenster bleibt offen
    ExportRequested,
    /// Anwendung ohne Export beenden (Fenster über die Titelleiste geschlossen)
    ExitRequested,
    /// Bild-Auswahldialog öffnen
    ImageUploadRequested,
    /// Bilddatei wurde im Dialog ausgewählt
    ImageSelected { path: PathBuf },
    /// Bild-Auswahldialog ohne Auswahl geschlossen
    ImageSelectionCancelled,
    /// Canvas leeren (neue Sitzung)
    ClearRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: SketchOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
