// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a full effect chain through a keyboard open/close cycle and print
//! what each frame does to the view.
//!
//! Run with: `cargo run -p eaves_demos --example keyboard_chain`

use eaves_demos::{delivery, AnimationScript};
use eaves_dispatch::Dispatcher;
use eaves_effects::{build_chain, ChainConfig, OffsetChannel, OverlapConfig, OverlapStrategy};
use eaves_host::{MemoryHost, ViewHost, ViewProps};
use kurbo::{Insets, Rect, Size};

fn main() {
    let mut host = MemoryHost::new(Size::new(1080.0, 1920.0));
    let view = host.insert(
        None,
        ViewProps {
            padding: Insets::new(0.0, 0.0, 0.0, 16.0),
            frame: Rect::new(0.0, 1500.0, 1080.0, 1800.0),
            ..ViewProps::default()
        },
    );

    let config = ChainConfig {
        pad_system_bars: true,
        retract_padding_with_keyboard: true,
        avoid_overlap: Some(OverlapConfig {
            strategy: OverlapStrategy::OnlyOverlap,
            channel: OffsetChannel::Translation,
        }),
        ..ChainConfig::default()
    };
    let mut dispatcher = Dispatcher::new(build_chain(&config)).with_keyboard_tracking();

    // Settled start: the navigation-bar padding lands once.
    dispatcher.on_apply_insets(&mut host, view, &delivery(0.0));
    println!(
        "settled: padding.bottom={:.0} translation.y={:.0}",
        host.padding(view).y1,
        host.translation(view).y
    );

    let open = AnimationScript {
        id: 1,
        from: 0.0,
        to: 600.0,
        steps: 6,
    };
    let phase = open.play(&mut dispatcher, &mut host, view, |host, height| {
        println!(
            "frame: keyboard={height:>5.1} padding.bottom={:>4.1} translation.y={:>6.1}",
            host.padding(view).y1,
            host.translation(view).y
        );
    });
    println!("open cycle finished: {phase:?}");

    let close = AnimationScript {
        id: 2,
        from: 600.0,
        to: 0.0,
        steps: 6,
    };
    let phase = close.play(&mut dispatcher, &mut host, view, |host, height| {
        println!(
            "frame: keyboard={height:>5.1} padding.bottom={:>4.1} translation.y={:>6.1}",
            host.padding(view).y1,
            host.translation(view).y
        );
    });
    println!("close cycle finished: {phase:?}");

    // Tear down: dispose through the auto-dispose path, as an embedding
    // would when the view leaves its window.
    dispatcher.auto_dispose_on_detach(view);
    for detached in host.remove(view) {
        dispatcher.notify_view_detached(detached);
    }
    println!("disposed: {}", dispatcher.is_disposed());
}
