//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod canvas_scene;
pub mod options;

pub use canvas_scene::CanvasScene;
pub use options::SketchOptions;
pub use options::{CANVAS_HEIGHT, CANVAS_WIDTH};
