//! Handler für Strich-Aufnahme.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;
use std::time::Instant;

/// Öffnet einen neuen Strich.
pub fn begin(state: &mut AppState, position: DVec2, at: Instant) {
    use_cases::drawing::begin_stroke(state, position, at);
}

/// Periodischer Abtast-Poll.
pub fn poll(state: &mut AppState, position: DVec2, at: Instant) {
    use_cases::drawing::poll_sample(state, position, at);
}

/// Versiegelt den offenen Strich.
pub fn end(state: &mut AppState, position: DVec2, at: Instant) {
    use_cases::drawing::end_stroke(state, position, at);
}

/// Leert den Canvas (neue Sitzung).
pub fn clear(state: &mut AppState) {
    use_cases::drawing::clear_session(state);
}
