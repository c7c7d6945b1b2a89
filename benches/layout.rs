//! Benchmarks for layout maintenance and visible-range tracking.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastgrid::{FastGrid, RecordingCanvas};

fn big_grid(rows: usize, columns: usize) -> FastGrid {
    let mut grid = FastGrid::new();
    grid.resize(1280, 800);
    grid.set_sizes(rows, columns, 1, 1);
    grid.take_requests();
    grid
}

/// Scroll top to bottom in small steps, the path incremental tracking is built for
fn bench_scroll_walk(c: &mut Criterion) {
    let mut grid = big_grid(100_000, 50);

    c.bench_function("scroll_walk_100k_rows", |b| {
        b.iter(|| {
            grid.scroll_to_top();
            for _ in 0..1_000 {
                grid.scroll_by(0, 97);
            }
            black_box(grid.visible_range())
        })
    });
}

/// Large jumps fall back to searching from the previous range
fn bench_scroll_jumps(c: &mut Criterion) {
    let mut grid = big_grid(100_000, 50);
    let max = grid.scroll_bars().vertical.maximum;

    c.bench_function("scroll_jumps_100k_rows", |b| {
        b.iter(|| {
            for i in 0..100 {
                let target = if i % 2 == 0 { max } else { 0 };
                grid.set_vertical_scroll(target);
            }
            black_box(grid.visible_range())
        })
    });
}

/// Insert rows at the front, the worst case for offset patching
fn bench_front_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_inserts");

    for rows in [1_000_usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::new("insert_row_0", rows), &rows, |b, &rows| {
            b.iter_batched(
                || big_grid(rows, 10),
                |mut grid| {
                    grid.with_updates_suspended(|grid| {
                        for _ in 0..100 {
                            grid.insert_row(0);
                        }
                    });
                    grid
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Paint one full frame into a recording canvas
fn bench_paint_frame(c: &mut Criterion) {
    let mut grid = big_grid(100_000, 50);
    grid.set_scroll_position(2_000, 500_000);
    let mut canvas = RecordingCanvas::new();

    c.bench_function("paint_frame_1280x800", |b| {
        b.iter(|| {
            canvas.clear();
            grid.paint(&mut canvas);
            black_box(canvas.ops.len())
        })
    });
}

criterion_group!(
    benches,
    bench_scroll_walk,
    bench_scroll_jumps,
    bench_front_inserts,
    bench_paint_frame,
);

criterion_main!(benches);
