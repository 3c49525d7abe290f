// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eaves_dispatch::KeyboardTracker;
use eaves_insets::{InsetAnimation, InsetKind, InsetSnapshot};
use kurbo::Insets;

fn ime(height: f64) -> InsetSnapshot {
    InsetSnapshot::new().with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, height))
}

fn bench_tracker_frames(c: &mut Criterion) {
    // A 64-frame open/close cycle, precomputed so the bench measures the
    // tracker alone.
    let frames: Vec<InsetSnapshot> = (0..32)
        .map(|step| ime(f64::from(step) * 18.75))
        .chain((0..32).map(|step| ime(600.0 - f64::from(step) * 18.75)))
        .collect();
    let animation = InsetAnimation::new(1, InsetKind::IME);

    c.bench_function("keyboard_tracker_cycle", |b| {
        b.iter(|| {
            let mut tracker = KeyboardTracker::new();
            tracker.on_animation_prepare(&animation);
            for frame in &frames {
                tracker.on_insets(frame);
            }
            tracker.on_animation_end(&animation);
            black_box(tracker.phase());
        });
    });
}

criterion_group!(benches, bench_tracker_frames);
criterion_main!(benches);
