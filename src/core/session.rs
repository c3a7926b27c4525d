//! Zeichensitzung: abgeschlossene Striche und gemeinsamer Zeitnenner.

use super::Stroke;
use std::time::Instant;

/// Alle abgeschlossenen Striche einer Sitzung.
///
/// `final_time` ist der Zeitstempel des zuletzt versiegelten Abtastpunkts und
/// dient beim Export als Nenner für die Zeitnormierung.
#[derive(Debug, Clone, Default)]
pub struct Session {
    strokes: Vec<Stroke>,
    final_time: f64,
    /// Sitzungs-Nullpunkt (erste Interaktion)
    origin: Option<Instant>,
}

impl Session {
    /// Erstellt eine leere Sitzung ohne Uhr-Nullpunkt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Sitzung aus fertigen Strichen (Tests, Benchmarks).
    pub fn from_strokes(strokes: Vec<Stroke>, final_time: f64) -> Self {
        Self {
            strokes,
            final_time,
            origin: None,
        }
    }

    /// Relative Zeit in Sekunden seit der ersten Interaktion.
    ///
    /// Beim allerersten Aufruf wird `now` zum Nullpunkt der Sitzung.
    pub fn relative_time(&mut self, now: Instant) -> f64 {
        let origin = *self.origin.get_or_insert(now);
        now.saturating_duration_since(origin).as_secs_f64()
    }

    /// Ob die Sitzungsuhr bereits gestartet wurde.
    pub fn has_started(&self) -> bool {
        self.origin.is_some()
    }

    /// Versiegelt einen Strich und aktualisiert `final_time`.
    pub(crate) fn seal(&mut self, stroke: Stroke) {
        if let Some(last) = stroke.last() {
            self.final_time = last.time;
        }
        self.strokes.push(stroke);
    }

    /// Abgeschlossene Striche in Aufnahmereihenfolge.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Zeitstempel des letzten versiegelten Abtastpunkts.
    pub fn final_time(&self) -> f64 {
        self.final_time
    }

    /// Anzahl der Striche.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Gesamtzahl der Abtastpunkte über alle Striche.
    pub fn sample_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Ob die Sitzung exportierbar ist (mind. ein Strich, `final_time > 0`).
    pub fn is_exportable(&self) -> bool {
        !self.strokes.is_empty() && self.final_time.is_finite() && self.final_time > 0.0
    }
}
