//! Abtastpunkte und Striche einer Zeichensitzung.

use glam::DVec2;

/// Einzelner Abtastpunkt eines Strichs (unveränderlich nach Aufnahme).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Sekunden seit der ersten Interaktion der Sitzung
    pub time: f64,
    /// Position in Canvas-Pixeln (y wächst nach unten)
    pub position: DVec2,
}

impl Sample {
    /// Erstellt einen neuen Abtastpunkt.
    pub fn new(time: f64, position: DVec2) -> Self {
        Self { time, position }
    }
}

/// Ein zusammenhängender Strich von Pointer-Down bis Pointer-Up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    samples: Vec<Sample>,
}

impl Stroke {
    /// Erstellt einen Strich mit dem ersten Abtastpunkt.
    pub fn starting_at(sample: Sample) -> Self {
        Self {
            samples: vec![sample],
        }
    }

    /// Erstellt einen Strich aus einer fertigen Punktfolge.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Hängt einen Abtastpunkt an.
    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Alle Abtastpunkte in Aufnahmereihenfolge.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Letzter aufgenommener Abtastpunkt.
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Anzahl der Abtastpunkte.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Gibt `true` zurück, wenn der Strich keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Aufeinanderfolgende Punktpaare (`len - 1` Stück, leer bei < 2 Punkten).
    pub fn pairs(&self) -> impl Iterator<Item = (&Sample, &Sample)> {
        self.samples.windows(2).map(|w| (&w[0], &w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_count_is_len_minus_one() {
        let stroke = Stroke::from_samples(vec![
            Sample::new(0.0, DVec2::new(0.0, 0.0)),
            Sample::new(0.1, DVec2::new(1.0, 0.0)),
            Sample::new(0.2, DVec2::new(2.0, 1.0)),
        ]);
        assert_eq!(stroke.pairs().count(), 2);
    }

    #[test]
    fn test_single_sample_has_no_pairs() {
        let stroke = Stroke::starting_at(Sample::new(0.0, DVec2::new(5.0, 5.0)));
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.pairs().count(), 0);
    }
}
