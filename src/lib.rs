//! Desmos Sketch Exporter Library.
//! Aufnahme, Vektorisierung und Desmos-Export als Library für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod desmos;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SamplingTask, UiState};
pub use core::{vectorize, CanvasSpace, InkMask, PixelRun, RunAxis, Sample, Session, Stroke};
pub use desmos::{build_export, DomainGuard, ExportDocument, ExportError, ExportSource};
pub use shared::{CanvasScene, SketchOptions};
