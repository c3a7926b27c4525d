//! Wiederkehrender Abtast-Task mit Abbruch-Flag.
//!
//! Unabhängig von einer konkreten Event-Loop: der Host fragt pro Frame per
//! [`SamplingTask::tick`], ob ein Poll fällig ist, und plant den nächsten
//! Repaint über [`SamplingTask::time_until_next`].

use std::time::{Duration, Instant};

/// Geplanter Task, der sich selbst neu einplant, solange er aktiv ist.
#[derive(Debug, Clone)]
pub struct SamplingTask {
    interval: Duration,
    active: bool,
    next_due: Option<Instant>,
}

impl SamplingTask {
    /// Erstellt einen inaktiven Task mit festem Intervall.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: false,
            next_due: None,
        }
    }

    /// Startet den Task; der erste Tick ist nach einem Intervall fällig.
    pub fn start(&mut self, now: Instant) {
        self.active = true;
        self.next_due = Some(now + self.interval);
    }

    /// Setzt das Abbruch-Flag. Ab sofort liefert `tick` immer `false`.
    pub fn cancel(&mut self) {
        self.active = false;
        self.next_due = None;
    }

    /// Ob der Task noch eingeplant ist.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Intervall zwischen zwei Ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ändert das Intervall; ein laufender Task behält seinen nächsten Termin.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Prüft das Abbruch-Flag und meldet einen fälligen Tick.
    ///
    /// Bei einem Treffer plant sich der Task ab `now` neu ein.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Wartezeit bis zum nächsten Tick (`None` wenn inaktiv).
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.active {
            return None;
        }
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

impl Default for SamplingTask {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::shared::options::SAMPLING_INTERVAL_MS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_task_never_fires() {
        let mut task = SamplingTask::new(Duration::from_millis(10));
        let now = Instant::now();
        assert!(!task.tick(now + Duration::from_secs(1)));
        assert_eq!(task.time_until_next(now), None);
    }

    #[test]
    fn test_task_reschedules_after_tick() {
        let mut task = SamplingTask::new(Duration::from_millis(10));
        let t0 = Instant::now();
        task.start(t0);

        assert!(!task.tick(t0 + Duration::from_millis(5)));
        assert!(task.tick(t0 + Duration::from_millis(10)));
        assert!(!task.tick(t0 + Duration::from_millis(15)));
        assert!(task.tick(t0 + Duration::from_millis(21)));
        assert_eq!(
            task.time_until_next(t0 + Duration::from_millis(21)),
            Some(Duration::from_millis(10))
        );
    }

    #[test]
    fn test_cancel_stops_rescheduling_immediately() {
        let mut task = SamplingTask::new(Duration::from_millis(10));
        let t0 = Instant::now();
        task.start(t0);
        task.cancel();

        assert!(!task.is_active());
        assert!(!task.tick(t0 + Duration::from_millis(50)));
    }
}
