//! Parametrische Liniensegmente aus Strichen bzw. Pixel-Läufen.

use super::ExportError;
use crate::core::{CanvasSpace, PixelRun, RunAxis, Session};

/// Zeitbereich eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentDomain {
    /// Normierter Bereich `[t0', t1']` aus der Sitzungszeit
    Normalized { start: f64, end: f64 },
    /// Fester Bereich `[0, 1]` (Bildpfad)
    Unit,
}

/// Ein Ausgabe-Datensatz: lineare Interpolation in x und y über einem Zeitbereich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricSegment {
    pub domain: SegmentDomain,
    /// Änderung in x über den Bereich
    pub dx: f64,
    /// x am Bereichsanfang
    pub x0: f64,
    /// Änderung in y über den Bereich (Export-Raum, nach oben wachsend)
    pub dy: f64,
    /// y am Bereichsanfang (Export-Raum)
    pub y0: f64,
}

/// Wandelt alle Striche einer Sitzung in Segmente um.
///
/// Pro Strich entstehen `len - 1` Segmente; Striche mit weniger als zwei
/// Punkten tragen nichts bei. Alle Zeiten werden durch die sitzungsweite
/// `final_time` geteilt.
pub fn segments_from_session(
    session: &Session,
    canvas: &CanvasSpace,
) -> Result<Vec<ParametricSegment>, ExportError> {
    if !session.is_exportable() {
        return Err(ExportError::EmptySession);
    }
    let final_time = session.final_time();

    let segments = session
        .strokes()
        .iter()
        .flat_map(|stroke| stroke.pairs())
        .map(|(a, b)| {
            let p0 = canvas.to_export(a.position);
            let p1 = canvas.to_export(b.position);
            ParametricSegment {
                domain: SegmentDomain::Normalized {
                    start: a.time / final_time,
                    end: b.time / final_time,
                },
                dx: p1.x - p0.x,
                x0: p0.x,
                dy: p1.y - p0.y,
                y0: p0.y,
            }
        })
        .collect();

    Ok(segments)
}

/// Wandelt Pixel-Läufe eines `image_width` × `image_height`-Bildes in Segmente um.
///
/// Der Startpunkt wird in den Canvas skaliert und gespiegelt; das Delta in
/// Laufrichtung ist `(length - 1)` Pixel, skaliert, die orthogonale Achse 0.
pub fn segments_from_runs(
    runs: &[PixelRun],
    image_width: u32,
    image_height: u32,
    canvas: &CanvasSpace,
) -> Vec<ParametricSegment> {
    if image_width == 0 || image_height == 0 {
        return Vec::new();
    }
    let scale = canvas.pixel_scale(image_width, image_height);

    runs.iter()
        .map(|run| {
            let x0 = f64::from(run.x) * scale.x;
            let y0 = canvas.flip_y(f64::from(run.y) * scale.y);
            let span = f64::from(run.length.saturating_sub(1));
            let (dx, dy) = match run.axis {
                RunAxis::Vertical => (0.0, -span * scale.y),
                RunAxis::Horizontal => (span * scale.x, 0.0),
            };
            ParametricSegment {
                domain: SegmentDomain::Unit,
                dx,
                x0,
                dy,
                y0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Sample, Stroke};
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn canvas() -> CanvasSpace {
        CanvasSpace::new(800.0, 600.0)
    }

    #[test]
    fn test_reference_stroke_segment() {
        let session = Session::from_strokes(
            vec![Stroke::from_samples(vec![
                Sample::new(0.0, DVec2::new(0.0, 0.0)),
                Sample::new(1.0, DVec2::new(10.0, 20.0)),
            ])],
            1.0,
        );

        let segments = segments_from_session(&session, &canvas()).expect("exportierbar");
        assert_eq!(
            segments,
            vec![ParametricSegment {
                domain: SegmentDomain::Normalized {
                    start: 0.0,
                    end: 1.0
                },
                dx: 10.0,
                x0: 0.0,
                dy: -20.0,
                y0: 600.0,
            }]
        );
    }

    #[test]
    fn test_time_normalized_by_session_final_time() {
        let session = Session::from_strokes(
            vec![
                Stroke::from_samples(vec![
                    Sample::new(0.0, DVec2::ZERO),
                    Sample::new(1.0, DVec2::ONE),
                ]),
                Stroke::from_samples(vec![
                    Sample::new(3.0, DVec2::ZERO),
                    Sample::new(4.0, DVec2::ONE),
                ]),
            ],
            4.0,
        );

        let segments = segments_from_session(&session, &canvas()).expect("exportierbar");
        assert_eq!(segments.len(), 2);
        match segments[1].domain {
            SegmentDomain::Normalized { start, end } => {
                assert_relative_eq!(start, 0.75);
                assert_relative_eq!(end, 1.0);
            }
            SegmentDomain::Unit => panic!("Normierter Bereich erwartet"),
        }
    }

    #[test]
    fn test_short_strokes_contribute_nothing() {
        let session = Session::from_strokes(
            vec![
                Stroke::from_samples(vec![Sample::new(0.5, DVec2::ONE)]),
                Stroke::from_samples(vec![
                    Sample::new(0.0, DVec2::ZERO),
                    Sample::new(0.5, DVec2::ONE),
                    Sample::new(1.0, DVec2::ZERO),
                ]),
            ],
            1.0,
        );
        let segments = segments_from_session(&session, &canvas()).expect("exportierbar");
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_degenerate_session_is_rejected() {
        let empty = Session::new();
        assert!(matches!(
            segments_from_session(&empty, &canvas()),
            Err(ExportError::EmptySession)
        ));

        let zero_time = Session::from_strokes(
            vec![Stroke::from_samples(vec![
                Sample::new(0.0, DVec2::ZERO),
                Sample::new(0.0, DVec2::ONE),
            ])],
            0.0,
        );
        assert!(matches!(
            segments_from_session(&zero_time, &canvas()),
            Err(ExportError::EmptySession)
        ));
    }

    #[test]
    fn test_vertical_run_scaled_to_canvas() {
        // 400x300-Bild → Faktor 2 in beiden Achsen
        let runs = [PixelRun {
            axis: RunAxis::Vertical,
            x: 10,
            y: 20,
            length: 5,
        }];
        let segments = segments_from_runs(&runs, 400, 300, &canvas());
        assert_eq!(segments.len(), 1);
        let seg = segments[0];
        assert_eq!(seg.domain, SegmentDomain::Unit);
        assert_eq!(seg.dx, 0.0);
        assert_relative_eq!(seg.x0, 20.0);
        assert_relative_eq!(seg.y0, 600.0 - 40.0);
        assert_relative_eq!(seg.dy, -8.0);
    }

    #[test]
    fn test_horizontal_run_scaled_to_canvas() {
        let runs = [PixelRun {
            axis: RunAxis::Horizontal,
            x: 0,
            y: 0,
            length: 3,
        }];
        let segments = segments_from_runs(&runs, 1600, 600, &canvas());
        let seg = segments[0];
        assert_relative_eq!(seg.dx, 1.0);
        assert_eq!(seg.dy, 0.0);
        assert_relative_eq!(seg.y0, 600.0);
    }
}
