//! Use-Case-Funktionen für den Strich-Export.
//! Alle Dateisystem-Schreibzugriffe des Exports laufen hier durch.

use crate::app::state::{ExportKind, ExportReport};
use crate::app::AppState;
use crate::desmos::{self, ExportDocument, ExportError, ExportSource};
use std::path::Path;

/// Exportiert alle versiegelten Striche in die konfigurierte Ausgabedatei.
///
/// Eine leere oder degenerierte Sitzung (`final_time <= 0`) erzeugt eine
/// leere Datei. Ein noch offener Strich wird nicht berücksichtigt.
pub fn export_strokes(state: &mut AppState) -> anyhow::Result<()> {
    if state.recorder.is_recording() {
        log::debug!("Offener Strich wird beim Export nicht berücksichtigt");
    }

    let canvas = state.options.canvas();
    let document = match desmos::build_export(
        ExportSource::Strokes(&state.session),
        &canvas,
        &state.options.stroke_guard,
    ) {
        Ok(document) => document,
        Err(ExportError::EmptySession) => {
            log::warn!(
                "Keine exportierbaren Striche (final_time={:.3}), schreibe leere Datei",
                state.session.final_time()
            );
            ExportDocument {
                content: String::new(),
                segment_count: 0,
            }
        }
        Err(e) => return Err(e.into()),
    };

    let path = state.options.output_path.clone();
    write_document(state, &path, &document, ExportKind::Strokes)?;

    log::info!("Output saved to {}", path.display());
    log::info!("Final time recorded: {}", state.session.final_time());
    Ok(())
}

/// Schreibt ein fertiges Dokument und aktualisiert den Export-Status.
///
/// Schreibfehler werden als Statusmeldung angezeigt und weitergereicht;
/// bei Erfolg wird eine alte Fehlermeldung entfernt.
pub(crate) fn write_document(
    state: &mut AppState,
    path: &Path,
    document: &ExportDocument,
    kind: ExportKind,
) -> anyhow::Result<()> {
    if let Err(e) = desmos::write_export_file(path, &document.content) {
        let err = anyhow::Error::from(e);
        state.ui.status_message = Some(format!("{:#}", err));
        return Err(err);
    }

    log::debug!(
        "{} Segmente nach {} geschrieben",
        document.segment_count,
        path.display()
    );
    state.ui.status_message = None;
    state.ui.last_export = Some(ExportReport {
        kind,
        path: path.to_path_buf(),
        segment_count: document.segment_count,
    });
    Ok(())
}
