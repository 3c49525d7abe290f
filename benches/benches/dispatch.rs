// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use eaves_dispatch::{Dispatcher, Effect, EffectCx, EffectNode};
use eaves_effects::{build_chain, ChainConfig, OffsetChannel, OverlapConfig, OverlapStrategy};
use eaves_host::{MemoryHost, ViewId, ViewProps};
use eaves_insets::{InsetKind, InsetSnapshot};
use kurbo::{Insets, Rect, Size};

/// Minimal effect that touches its context without mutating the host.
struct Probe;

impl Effect for Probe {
    fn on_insets(&mut self, cx: &mut EffectCx<'_>, insets: &InsetSnapshot) {
        black_box(cx.bound_view());
        black_box(insets.keyboard_height());
    }
}

fn scene(children: usize) -> (MemoryHost, ViewId) {
    let mut host = MemoryHost::new(Size::new(1080.0, 1920.0));
    let view = host.insert(
        None,
        ViewProps {
            frame: Rect::new(0.0, 1620.0, 1080.0, 1820.0),
            ..ViewProps::default()
        },
    );
    for _ in 0..children {
        host.insert(Some(view), ViewProps::default());
    }
    (host, view)
}

fn delivery(keyboard: f64) -> InsetSnapshot {
    InsetSnapshot::new()
        .with(InsetKind::NAVIGATION_BARS, Insets::new(0.0, 0.0, 0.0, 48.0))
        .with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, keyboard))
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_fan_out");
    for effects in [1_usize, 8, 64] {
        group.bench_function(format!("effects_{effects}"), |b| {
            let (mut host, view) = scene(4);
            let mut dispatcher = Dispatcher::new(
                (0..effects).map(|_| EffectNode::plain(Probe)).collect(),
            );
            let insets = delivery(300.0);
            b.iter(|| {
                black_box(dispatcher.on_apply_insets(&mut host, view, &insets));
            });
        });
    }
    group.finish();
}

fn bench_full_chain_frame(c: &mut Criterion) {
    c.bench_function("full_chain_open_cycle", |b| {
        let config = ChainConfig {
            pad_system_bars: true,
            retract_padding_with_keyboard: true,
            avoid_overlap: Some(OverlapConfig {
                strategy: OverlapStrategy::OnlyOverlap,
                channel: OffsetChannel::Translation,
            }),
            center_above_keyboard: true,
        };
        b.iter_batched(
            || {
                let (host, view) = scene(0);
                let dispatcher =
                    Dispatcher::new(build_chain(&config)).with_keyboard_tracking();
                (host, view, dispatcher)
            },
            |(mut host, view, mut dispatcher)| {
                use eaves_insets::{AnimationBounds, InsetAnimation};
                let animation = InsetAnimation::new(1, InsetKind::IME);
                let bounds =
                    AnimationBounds::new(Insets::ZERO, Insets::new(0.0, 0.0, 0.0, 600.0));
                dispatcher.on_apply_insets(&mut host, view, &delivery(0.0));
                dispatcher.on_animation_prepare(&mut host, &animation);
                dispatcher.on_animation_start(&mut host, &animation, &bounds);
                for step in 1..=16_u32 {
                    let height = f64::from(step) * 37.5;
                    dispatcher.on_animation_progress(&mut host, &delivery(height), &[animation]);
                }
                dispatcher.on_animation_end(&mut host, &animation);
                black_box(host);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_fan_out, bench_full_chain_frame);
criterion_main!(benches);
