//! Desmos-Export: Segmentbildung und Zeilenformat.

mod error;
pub mod segment;
pub mod writer;

pub use error::ExportError;
pub use segment::{segments_from_runs, segments_from_session, ParametricSegment, SegmentDomain};
pub use writer::{format_segment, write_desmos_lines, write_export_file, DomainGuard};

use crate::core::{CanvasSpace, PixelRun, Session};

/// Quelle eines Exports. Beide Quellen werden nie in einem Aufruf gemischt.
#[derive(Debug, Clone, Copy)]
pub enum ExportSource<'a> {
    /// Gezeichnete Striche einer Sitzung
    Strokes(&'a Session),
    /// Vektorisierte Pixel-Läufe eines Bildes
    Image {
        runs: &'a [PixelRun],
        width: u32,
        height: u32,
    },
}

/// Ergebnis eines Export-Formatierungsdurchlaufs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    /// Dateiinhalt
    pub content: String,
    /// Anzahl geschriebener Zeilen
    pub segment_count: usize,
}

/// Formatiert eine Quelle vollständig im Speicher.
pub fn build_export(
    source: ExportSource<'_>,
    canvas: &CanvasSpace,
    guard: &DomainGuard,
) -> Result<ExportDocument, ExportError> {
    let segments = match source {
        ExportSource::Strokes(session) => segments_from_session(session, canvas)?,
        ExportSource::Image {
            runs,
            width,
            height,
        } => segments_from_runs(runs, width, height, canvas),
    };

    Ok(ExportDocument {
        content: write_desmos_lines(&segments, guard),
        segment_count: segments.len(),
    })
}
