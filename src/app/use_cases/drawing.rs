//! Use-Case-Funktionen für das Zeichnen von Strichen.

use crate::app::AppState;
use crate::core::Session;
use glam::DVec2;
use std::time::Instant;

/// Öffnet einen neuen Strich und startet den Abtast-Task.
pub fn begin_stroke(state: &mut AppState, position: DVec2, at: Instant) {
    state
        .recorder
        .begin_stroke(&mut state.session, position, at);
    state.sampling.start(at);
}

/// Nimmt einen Abtastpunkt auf, falls das Intervall verstrichen ist.
pub fn poll_sample(state: &mut AppState, position: DVec2, at: Instant) {
    if let Some(piece) = state
        .recorder
        .poll_sample(&mut state.session, position, at)
    {
        log::trace!(
            "Abtastpunkt: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            piece.from.x,
            piece.from.y,
            piece.to.x,
            piece.to.y
        );
    }
}

/// Versiegelt den offenen Strich und stoppt den Abtast-Task.
pub fn end_stroke(state: &mut AppState, position: DVec2, at: Instant) {
    state.sampling.cancel();
    state.recorder.end_stroke(&mut state.session, position, at);
}

/// Verwirft die komplette Sitzung inkl. Uhr-Nullpunkt und Bild-Vorschau.
pub fn clear_session(state: &mut AppState) {
    state.sampling.cancel();
    state.recorder.discard();
    let dropped = state.session.stroke_count();
    state.session = Session::new();
    state.image_preview = None;
    state.ui.status_message = None;
    log::info!("Canvas geleert ({} Striche verworfen)", dropped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sampling_task_follows_stroke_lifecycle() {
        let mut state = AppState::new();
        let t0 = Instant::now();

        begin_stroke(&mut state, DVec2::new(1.0, 1.0), t0);
        assert!(state.sampling.is_active());

        end_stroke(&mut state, DVec2::new(2.0, 2.0), t0 + Duration::from_millis(30));
        assert!(!state.sampling.is_active());
        assert_eq!(state.session.stroke_count(), 1);
    }

    #[test]
    fn test_clear_resets_session_clock() {
        let mut state = AppState::new();
        let t0 = Instant::now();

        begin_stroke(&mut state, DVec2::ZERO, t0);
        end_stroke(&mut state, DVec2::ONE, t0 + Duration::from_millis(30));
        clear_session(&mut state);

        assert_eq!(state.session.stroke_count(), 0);
        assert!(!state.session.has_started());
        assert_eq!(state.session.final_time(), 0.0);
    }
}
