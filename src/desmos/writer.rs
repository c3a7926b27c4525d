//! Writer für das Desmos-Zeilenformat.
//!
//! Jede Zeile ist ein Paar `(f(t,T0,T1,D,B), g(t,T0,T1,D,B))`, optional gefolgt
//! von einer Bereichsbedingung. Zahlen werden immer mit sechs Nachkommastellen
//! geschrieben; der feste Bildbereich als `0,1`.

use super::{ExportError, ParametricSegment, SegmentDomain};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Bereichsbedingung am Zeilenende (für alle Zeilen eines Exports gleich).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainGuard {
    /// Keine Bedingung
    None,
    /// ` { 0 < t < 1 }`
    #[default]
    UnitInterval,
    /// ` { 0 < t < a }` mit Slider-Variable als Obergrenze
    UpperBound { bound: String },
}

impl fmt::Display for DomainGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainGuard::None => Ok(()),
            DomainGuard::UnitInterval => f.write_str(" { 0 < t < 1 }"),
            DomainGuard::UpperBound { bound } => write!(f, " {{ 0 < t < {} }}", bound),
        }
    }
}

/// Formatiert die beiden Bereichsparameter.
fn domain_args(domain: &SegmentDomain) -> String {
    match domain {
        SegmentDomain::Normalized { start, end } => format!("{:.6},{:.6}", start, end),
        SegmentDomain::Unit => "0,1".to_string(),
    }
}

/// Formatiert ein einzelnes Segment als Desmos-Zeile.
pub fn format_segment(segment: &ParametricSegment, guard: &DomainGuard) -> String {
    let domain = domain_args(&segment.domain);
    format!(
        "(f(t,{domain},{:.6},{:.6}), g(t,{domain},{:.6},{:.6})){guard}",
        segment.dx, segment.x0, segment.dy, segment.y0
    )
}

/// Baut den vollständigen Dateiinhalt (Zeilen mit `\n` verbunden, ohne Abschluss-Newline).
pub fn write_desmos_lines(segments: &[ParametricSegment], guard: &DomainGuard) -> String {
    segments
        .iter()
        .map(|segment| format_segment(segment, guard))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Schreibt den Inhalt in einem Zug und überschreibt die Zieldatei vollständig.
pub fn write_export_file(path: &Path, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
