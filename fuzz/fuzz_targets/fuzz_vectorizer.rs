#![no_main]

use desmos_sketch::{build_export, vectorize, CanvasSpace, DomainGuard, ExportSource, InkMask};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

// Erstes Byte: Breite, zweites: Stride, Rest: Pixelbits zeilenweise.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let width = u32::from(data[0] % 64) + 1;
    let stride = u32::from(data[1] % 8);
    let bits = &data[2..];
    let height = ((bits.len() * 8) as u32 / width).clamp(1, 64);

    let mut mask = InkMask::blank(width, height);
    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) as usize;
            let ink = bits.get(i / 8).is_some_and(|b| b & (1 << (i % 8)) != 0);
            mask.set(x, y, ink);
        }
    }

    let runs = vectorize(&mask, stride);
    let mut claimed = HashSet::new();
    for run in &runs {
        assert!(run.length > 1);
        for (x, y) in run.pixels() {
            assert!(mask.is_ink(x, y));
            assert!(claimed.insert((x, y)), "Pixel ({x}, {y}) doppelt beansprucht");
        }
    }

    let canvas = CanvasSpace::new(800.0, 600.0);
    if let Ok(document) = build_export(
        ExportSource::Image {
            runs: &runs,
            width,
            height,
        },
        &canvas,
        &DomainGuard::None,
    ) {
        assert_eq!(document.segment_count, runs.len());
    }
});
