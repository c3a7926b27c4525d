//! Stroke-Recorder: übersetzt Pointer-Interaktion in Striche einer Sitzung.

use super::{Sample, Session, Stroke};
use glam::DVec2;
use std::time::{Duration, Instant};

/// Offener, noch nicht versiegelter Strich.
#[derive(Debug, Clone)]
struct OpenStroke {
    stroke: Stroke,
    /// Zeitpunkt des zuletzt aufgenommenen Punkts (für die Abtastrate)
    last_sample_at: Instant,
}

/// Neu aufgenommenes Linienstück zwischen zwei Abtastpunkten (Live-Feedback).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivePiece {
    pub from: DVec2,
    pub to: DVec2,
}

/// Nimmt Abtastpunkte mit begrenzter Rate auf.
///
/// Der Recorder besitzt nur den offenen Strich; die Sitzung wird bei jedem
/// Aufruf explizit übergeben.
#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    interval: Duration,
    open: Option<OpenStroke>,
}

impl StrokeRecorder {
    /// Erstellt einen Recorder mit dem gegebenen Abtastintervall.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            open: None,
        }
    }

    /// Aktuelles Abtastintervall.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Setzt ein neues Abtastintervall (wirkt ab dem nächsten Poll).
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Ob gerade ein Strich offen ist.
    pub fn is_recording(&self) -> bool {
        self.open.is_some()
    }

    /// Der offene Strich (für die Live-Darstellung).
    pub fn open_stroke(&self) -> Option<&Stroke> {
        self.open.as_ref().map(|o| &o.stroke)
    }

    /// Pointer-Down: öffnet einen neuen Strich mit dem ersten Abtastpunkt.
    ///
    /// Ein noch offener Strich wird zuvor an seinem letzten Punkt versiegelt.
    pub fn begin_stroke(&mut self, session: &mut Session, position: DVec2, now: Instant) {
        if let Some(open) = self.open.take() {
            log::warn!("Vorheriger Strich war noch offen, wird versiegelt");
            session.seal(open.stroke);
        }

        let time = session.relative_time(now);
        log::debug!("Strich begonnen bei t={:.3}s ({:.1}, {:.1})", time, position.x, position.y);
        self.open = Some(OpenStroke {
            stroke: Stroke::starting_at(Sample::new(time, position)),
            last_sample_at: now,
        });
    }

    /// Periodischer Poll während gedrückter Taste.
    ///
    /// Nimmt nur dann einen Punkt auf, wenn seit dem letzten mindestens
    /// `interval` vergangen ist. Liefert das neue Linienstück zurück.
    pub fn poll_sample(
        &mut self,
        session: &mut Session,
        position: DVec2,
        now: Instant,
    ) -> Option<LivePiece> {
        let open = self.open.as_mut()?;
        if now.saturating_duration_since(open.last_sample_at) < self.interval {
            return None;
        }

        let from = open.stroke.last().map(|s| s.position)?;
        let time = session.relative_time(now);
        open.stroke.push(Sample::new(time, position));
        open.last_sample_at = now;

        Some(LivePiece { from, to: position })
    }

    /// Pointer-Up: Endpunkt aufnehmen und Strich in die Sitzung versiegeln.
    ///
    /// Gibt die Punktzahl des versiegelten Strichs zurück, `None` wenn kein
    /// Strich offen war.
    pub fn end_stroke(
        &mut self,
        session: &mut Session,
        position: DVec2,
        now: Instant,
    ) -> Option<usize> {
        let Some(mut open) = self.open.take() else {
            log::debug!("Pointer-Up ohne offenen Strich ignoriert");
            return None;
        };

        let time = session.relative_time(now);
        open.stroke.push(Sample::new(time, position));
        let len = open.stroke.len();
        session.seal(open.stroke);

        log::info!(
            "Strich {} versiegelt: {} Punkte, final_time={:.3}s",
            session.stroke_count(),
            len,
            session.final_time()
        );
        Some(len)
    }

    /// Verwirft einen offenen Strich ohne Versiegeln.
    pub fn discard(&mut self) {
        self.open = None;
    }
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::shared::options::SAMPLING_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_full_stroke_lifecycle() {
        let mut session = Session::new();
        let mut recorder = StrokeRecorder::new(ms(10));
        let t0 = Instant::now();

        recorder.begin_stroke(&mut session, DVec2::new(0.0, 0.0), t0);
        assert!(recorder.is_recording());

        let piece = recorder.poll_sample(&mut session, DVec2::new(5.0, 5.0), t0 + ms(10));
        assert_eq!(
            piece,
            Some(LivePiece {
                from: DVec2::new(0.0, 0.0),
                to: DVec2::new(5.0, 5.0)
            })
        );

        let len = recorder.end_stroke(&mut session, DVec2::new(10.0, 10.0), t0 + ms(25));
        assert_eq!(len, Some(3));
        assert!(!recorder.is_recording());
        assert_eq!(session.stroke_count(), 1);
        approx::assert_relative_eq!(session.final_time(), 0.025, epsilon = 1e-9);
    }

    #[test]
    fn test_poll_coalesces_faster_than_interval() {
        let mut session = Session::new();
        let mut recorder = StrokeRecorder::new(ms(20));
        let t0 = Instant::now();

        recorder.begin_stroke(&mut session, DVec2::ZERO, t0);
        assert!(recorder.poll_sample(&mut session, DVec2::ONE, t0 + ms(5)).is_none());
        assert!(recorder.poll_sample(&mut session, DVec2::ONE, t0 + ms(19)).is_none());
        assert!(recorder.poll_sample(&mut session, DVec2::ONE, t0 + ms(20)).is_some());
        assert!(recorder.poll_sample(&mut session, DVec2::ONE, t0 + ms(30)).is_none());

        assert_eq!(recorder.open_stroke().map(Stroke::len), Some(2));
    }

    #[test]
    fn test_press_release_without_poll_yields_two_samples() {
        let mut session = Session::new();
        let mut recorder = StrokeRecorder::new(ms(10));
        let t0 = Instant::now();

        recorder.begin_stroke(&mut session, DVec2::new(3.0, 4.0), t0);
        let len = recorder.end_stroke(&mut session, DVec2::new(3.0, 4.0), t0);
        assert_eq!(len, Some(2));
        assert_eq!(session.final_time(), 0.0);
    }

    #[test]
    fn test_events_without_open_stroke_are_ignored() {
        let mut session = Session::new();
        let mut recorder = StrokeRecorder::new(ms(10));
        let t0 = Instant::now();

        assert!(recorder.poll_sample(&mut session, DVec2::ONE, t0).is_none());
        assert!(recorder.end_stroke(&mut session, DVec2::ONE, t0).is_none());
        assert_eq!(session.stroke_count(), 0);
        assert!(!session.has_started());
    }

    #[test]
    fn test_second_stroke_times_are_relative_to_first_interaction() {
        let mut session = Session::new();
        let mut recorder = StrokeRecorder::new(ms(10));
        let t0 = Instant::now();

        recorder.begin_stroke(&mut session, DVec2::ZERO, t0);
        recorder.end_stroke(&mut session, DVec2::ONE, t0 + ms(100));
        recorder.begin_stroke(&mut session, DVec2::ZERO, t0 + ms(500));
        recorder.end_stroke(&mut session, DVec2::ONE, t0 + ms(1000));

        let second = &session.strokes()[1];
        approx::assert_relative_eq!(second.samples()[0].time, 0.5, epsilon = 1e-9);
        approx::assert_relative_eq!(session.final_time(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_begin_while_open_seals_previous() {
        let mut session = Session::new();
        let mut recorder = StrokeRecorder::new(ms(10));
        let t0 = Instant::now();

        recorder.begin_stroke(&mut session, DVec2::ZERO, t0);
        recorder.begin_stroke(&mut session, DVec2::ONE, t0 + ms(50));
        assert_eq!(session.stroke_count(), 1);
        assert!(recorder.is_recording());
    }
}
