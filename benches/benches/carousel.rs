// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use std::time::Duration;
use understory_carousel::{ArrowKey, CarouselConfig, CarouselInput, CarouselState};

fn mounted(panes: usize) -> CarouselState {
    let mut state = CarouselState::new(panes, CarouselConfig::default()).unwrap();
    state.handle(CarouselInput::Mount(Size::new(1280.0, 720.0)));
    state
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/drag_session");

    // One pointer move plus one frame per sample, as a 120Hz touch stream would produce.
    for moves in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(BenchmarkId::new("move_and_frame", moves), &moves, |b, &moves| {
            b.iter_batched(
                || mounted(64),
                |mut state| {
                    state.handle(CarouselInput::DragStart { pane: 0, x: 900.0 });
                    for step in 0..moves {
                        let x = 900.0 - (step as f64) * 0.75;
                        black_box(state.handle(CarouselInput::DragMove { x }));
                        black_box(state.handle(CarouselInput::Frame));
                    }
                    black_box(state.handle(CarouselInput::DragEnd));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_keyboard_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/keyboard_sweep");
    group.measurement_time(Duration::from_secs(3));

    // Step to the end and back; half of the presses past either end are no-ops.
    for panes in [8usize, 256] {
        group.throughput(Throughput::Elements((panes * 4) as u64));

        group.bench_with_input(BenchmarkId::new("arrows", panes), &panes, |b, &panes| {
            b.iter_batched(
                || mounted(panes),
                |mut state| {
                    for _ in 0..panes * 2 {
                        black_box(state.handle(CarouselInput::KeyDown(ArrowKey::Right)));
                    }
                    for _ in 0..panes * 2 {
                        black_box(state.handle(CarouselInput::KeyDown(ArrowKey::Left)));
                    }
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_session, bench_keyboard_sweep);
criterion_main!(benches);
