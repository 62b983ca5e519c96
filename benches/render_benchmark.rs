//! Performance benchmarks for full-frame rendering
//!
//! Tests render time for different task counts.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use taskdeck::app::App;
use taskdeck::ui;

/// Build an app holding `count` tasks, every third one completed.
fn app_with_tasks(count: usize) -> App {
    let mut app = App::new();
    for i in 0..count {
        let id = app.store.add(&format!("task number {i}")).unwrap();
        if i % 3 == 0 {
            app.store.toggle(id);
        }
    }
    app
}

/// Benchmark a full-frame render at a standard terminal size
fn bench_full_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame_render");

    for count in [10, 100, 1_000, 10_000].iter() {
        let app = app_with_tasks(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_tasks", count)),
            &app,
            |b, app| {
                let backend = TestBackend::new(120, 40);
                let mut terminal = Terminal::new(backend).unwrap();
                b.iter(|| {
                    terminal
                        .draw(|f| {
                            ui::render(f, black_box(app));
                        })
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the stats linear scan on its own
fn bench_stats_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats_scan");

    for count in [100, 10_000].iter() {
        let app = app_with_tasks(*count);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_tasks", count)),
            &app,
            |b, app| {
                b.iter(|| black_box(app.stats()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_frame_render, bench_stats_scan);
criterion_main!(benches);
