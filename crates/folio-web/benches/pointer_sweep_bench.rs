//! Benchmarks for pointer sweeps across the dock.
//!
//! Run with: cargo bench -p folio-web --bench pointer_sweep_bench

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio_core::event::Event;
use folio_core::geometry::{Rect, SectionBounds};
use folio_web::{DeterministicClock, DockSession, WebHost};

const FRAME: Duration = Duration::from_millis(16);

fn session() -> DockSession {
    let host = WebHost::new(1280.0, 900.0);
    let ids = [
        "hero",
        "experience",
        "my-stack",
        "projects",
        "contact",
        "theme",
        "resume",
    ];
    for (i, id) in ids[..5].iter().enumerate() {
        host.set_section(id, SectionBounds::new(800.0 * i as f64, 800.0));
    }
    for (i, id) in ids.iter().enumerate() {
        host.set_icon_box(id, Rect::new(400.0 + 56.0 * i as f64, 820.0, 40.0, 40.0));
    }
    match DockSession::portfolio(host) {
        Ok(session) => session,
        Err(err) => panic!("bench session: {err}"),
    }
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("dock/pointer_sweep");

    for moves in [16usize, 64, 256] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter_batched(
                session,
                |mut session| {
                    let mut clock = DeterministicClock::new();
                    for i in 0..moves {
                        let x = 380.0 + 420.0 * (i as f64 / moves as f64);
                        session.push_event(Event::PointerMove { x, y: 840.0 });
                        clock.advance(FRAME);
                        black_box(session.step(clock.now()).animating);
                    }
                    session
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_scroll_frames(c: &mut Criterion) {
    c.bench_function("dock/scroll_frames", |b| {
        b.iter_batched(
            session,
            |mut session| {
                let mut clock = DeterministicClock::new();
                for y in (0..4000).step_by(40) {
                    session.user_scroll(f64::from(y));
                    clock.advance(FRAME);
                    black_box(&session.step(clock.now()).active_section);
                }
                session
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pointer_sweep, bench_scroll_frames);
criterion_main!(benches);
