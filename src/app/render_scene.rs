//! Builder für Canvas-Szenen aus dem AppState.

use crate::app::state::ImagePreview;
use crate::app::AppState;
use crate::core::{CanvasSpace, RunAxis, Stroke};
use crate::shared::CanvasScene;
use glam::DVec2;

/// Baut eine CanvasScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> CanvasScene {
    let canvas = state.options.canvas();

    CanvasScene {
        canvas_size: [canvas.width, canvas.height],
        strokes: state.session.strokes().iter().map(polyline).collect(),
        open_stroke: state.recorder.open_stroke().map(polyline),
        image_preview: state
            .image_preview
            .as_ref()
            .map(|preview| preview_lines(preview, &canvas))
            .unwrap_or_default(),
        stroke_width: state.options.stroke_width_px,
        stroke_color: state.options.stroke_color,
        preview_color: state.options.image_preview_color,
    }
}

fn polyline(stroke: &Stroke) -> Vec<DVec2> {
    stroke.samples().iter().map(|s| s.position).collect()
}

/// Pixel-Läufe → Linien in Canvas-Koordinaten (y nach unten, nicht gespiegelt).
fn preview_lines(preview: &ImagePreview, canvas: &CanvasSpace) -> Vec<[DVec2; 2]> {
    if preview.image_width == 0 || preview.image_height == 0 {
        return Vec::new();
    }
    let scale = canvas.pixel_scale(preview.image_width, preview.image_height);

    preview
        .runs
        .iter()
        .map(|run| {
            let start = DVec2::new(f64::from(run.x), f64::from(run.y));
            let span = f64::from(run.length.saturating_sub(1));
            let end = match run.axis {
                RunAxis::Vertical => start + DVec2::new(0.0, span),
                RunAxis::Horizontal => start + DVec2::new(span, 0.0),
            };
            [start * scale, end * scale]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::ImagePreview;
    use crate::app::AppState;
    use crate::core::{PixelRun, RunAxis};
    use glam::DVec2;
    use std::time::{Duration, Instant};

    #[test]
    fn build_contains_sealed_and_open_strokes() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        state
            .recorder
            .begin_stroke(&mut state.session, DVec2::ZERO, t0);
        state
            .recorder
            .end_stroke(&mut state.session, DVec2::ONE, t0 + Duration::from_millis(20));
        state
            .recorder
            .begin_stroke(&mut state.session, DVec2::new(5.0, 5.0), t0 + Duration::from_millis(40));

        let scene = build(&state);
        assert_eq!(scene.strokes, vec![vec![DVec2::ZERO, DVec2::ONE]]);
        assert_eq!(scene.open_stroke, Some(vec![DVec2::new(5.0, 5.0)]));
        assert!(scene.image_preview.is_empty());
    }

    #[test]
    fn build_scales_image_preview_to_canvas() {
        let mut state = AppState::new();
        state.image_preview = Some(ImagePreview {
            runs: vec![PixelRun {
                axis: RunAxis::Vertical,
                x: 10,
                y: 0,
                length: 5,
            }],
            image_width: 400,
            image_height: 300,
        });

        let scene = build(&state);
        assert_eq!(
            scene.image_preview,
            vec![[DVec2::new(20.0, 0.0), DVec2::new(20.0, 8.0)]]
        );
    }
}
