//! Core-Domänentypen: Abtastpunkte, Striche, Sitzung, Recorder, Bild-Vektorisierung.

pub mod canvas;
pub mod ink_mask;
pub mod recorder;
pub mod session;
pub mod stroke;
pub mod vectorize;

pub use canvas::CanvasSpace;
pub use ink_mask::InkMask;
pub use recorder::{LivePiece, StrokeRecorder};
pub use session::Session;
pub use stroke::{Sample, Stroke};
pub use vectorize::{vectorize, PixelRun, RunAxis};
