use std::path::PathBuf;
use thiserror::Error;

/// Fehlerklassen beim Export und Bildimport.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Dateiauswahl abgebrochen
    #[error("Auswahl abgebrochen")]
    Cancelled,
    /// Bild konnte nicht dekodiert werden
    #[error("Bild konnte nicht dekodiert werden: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Ausgabedatei konnte nicht geschrieben werden
    #[error("Ausgabedatei konnte nicht geschrieben werden: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Keine Striche bzw. `final_time <= 0`
    #[error("Sitzung enthält keine exportierbaren Striche")]
    EmptySession,
}
