use crate::shared::SketchOptions;
use glam::DVec2;
use std::path::PathBuf;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Strich öffnen
    BeginStroke { position: DVec2, at: Instant },
    /// Abtastpunkt aufnehmen (ratenbegrenzt)
    PollSample { position: DVec2, at: Instant },
    /// Strich mit Endpunkt versiegeln
    EndStroke { position: DVec2, at: Instant },
    /// Sitzung verwerfen (Striche, Uhr, Bild-Vorschau)
    ClearSession,
    /// Striche der Sitzung in die Ausgabedatei schreiben
    ExportStrokes,
    /// Anwendung beenden
    RequestExit,
    /// Bild-Dateidialog anfordern
    RequestImageDialog,
    /// Bild laden, vektorisieren und exportieren
    VectorizeImage { path: PathBuf },
    /// Bildauswahl abgebrochen
    CancelImageImport,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: SketchOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
