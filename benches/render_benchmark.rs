//! Render benchmark: Measure the renderer draw path into ANSI bytes.
//!
//! Target: < 2µs per erase+draw at 1:16 projection

use bouncebox::actor::{Renderer, Snapshot};
use bouncebox::surface::{TerminalCanvas, Viewport};
use bouncebox::{Palette, Rect, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;

fn snapshot() -> Snapshot {
    Snapshot {
        mover: 0,
        frame: 1,
        current: Rect::new(1003, 701, 40, 40),
        previous: Some(Rect::new(1000, 700, 40, 40)),
    }
}

fn draw_scaled(c: &mut Criterion) {
    // 2048x1400 surface on a 128x35 terminal.
    let viewport = Viewport::new(Size::new(2048, 1400), Size::new(128, 35));
    let mut renderer = Renderer::new(TerminalCanvas::new(io::sink(), viewport, Palette::default()));
    let snapshot = snapshot();

    c.bench_function("draw_erase_scaled", |b| {
        b.iter(|| {
            renderer.draw(black_box(&snapshot)).unwrap();
            renderer.present().unwrap();
        });
    });
}

fn draw_unscaled(c: &mut Criterion) {
    // One surface unit per cell: 40 rows of 40 blanks per fill.
    let viewport = Viewport::new(Size::new(2048, 1400), Size::new(2048, 1400));
    let mut renderer = Renderer::new(TerminalCanvas::new(io::sink(), viewport, Palette::default()));
    let snapshot = snapshot();

    c.bench_function("draw_erase_unscaled", |b| {
        b.iter(|| {
            renderer.draw(black_box(&snapshot)).unwrap();
            renderer.present().unwrap();
        });
    });
}

criterion_group!(benches, draw_scaled, draw_unscaled);
criterion_main!(benches);
