// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `eaves_effects` crate.
//!
//! These drive a whole configured chain through a dispatcher against the
//! reference host, walking a realistic keyboard open cycle frame by frame
//! and checking the combined visual result.

use eaves_dispatch::{Dispatcher, KeyboardPhase};
use eaves_effects::{build_chain, ChainConfig, OffsetChannel, OverlapConfig, OverlapStrategy};
use eaves_host::{MemoryHost, ViewHost, ViewId, ViewProps};
use eaves_insets::{AnimationBounds, InsetAnimation, InsetKind, InsetSnapshot};
use kurbo::{Insets, Rect, Size};

/// Navigation bar 20px; keyboard at the given height.
fn delivery(keyboard: f64) -> InsetSnapshot {
    InsetSnapshot::new()
        .with(InsetKind::NAVIGATION_BARS, Insets::new(0.0, 0.0, 0.0, 20.0))
        .with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, keyboard))
}

/// A 1920px screen; the view's bottom edge sits 100px above the screen
/// bottom and carries 20px of its own bottom padding.
fn scene() -> (MemoryHost, ViewId) {
    let mut host = MemoryHost::new(Size::new(1080.0, 1920.0));
    let view = host.insert(
        None,
        ViewProps {
            padding: Insets::new(0.0, 0.0, 0.0, 20.0),
            frame: Rect::new(0.0, 1620.0, 1080.0, 1820.0),
            ..ViewProps::default()
        },
    );
    (host, view)
}

fn full_chain_dispatcher() -> Dispatcher {
    let config = ChainConfig {
        pad_system_bars: true,
        retract_padding_with_keyboard: true,
        avoid_overlap: Some(OverlapConfig {
            strategy: OverlapStrategy::OnlyOverlap,
            channel: OffsetChannel::Translation,
        }),
        ..ChainConfig::default()
    };
    Dispatcher::new(build_chain(&config)).with_keyboard_tracking()
}

#[test]
fn keyboard_open_cycle_drives_the_whole_chain() {
    let (mut host, view) = scene();
    let mut dispatcher = full_chain_dispatcher();
    let animation = InsetAnimation::new(1, InsetKind::IME);
    let bounds = AnimationBounds::new(Insets::ZERO, Insets::new(0.0, 0.0, 0.0, 600.0));

    // Settled, keyboard closed: the bar padding lands once.
    dispatcher.on_apply_insets(&mut host, view, &delivery(0.0));
    assert_eq!(host.padding(view).y1, 40.0);
    assert_eq!(
        dispatcher.keyboard().map(|k| k.phase()),
        Some(KeyboardPhase::Closed)
    );

    dispatcher.on_animation_prepare(&mut host, &animation);
    dispatcher.on_animation_start(&mut host, &animation, &bounds);

    // Halfway: half the bar padding is handed back, and the view moves up
    // by the overlapping 200px.
    dispatcher.on_animation_progress(&mut host, &delivery(300.0), &[animation]);
    assert_eq!(host.padding(view).y1, 30.0);
    assert_eq!(host.translation(view).y, -200.0);
    assert_eq!(
        dispatcher.keyboard().map(|k| k.phase()),
        Some(KeyboardPhase::OpeningOrChanging)
    );

    // Fully open.
    dispatcher.on_animation_progress(&mut host, &delivery(600.0), &[animation]);
    assert_eq!(host.padding(view).y1, 20.0);
    assert_eq!(host.translation(view).y, -500.0);

    dispatcher.on_animation_end(&mut host, &animation);
    assert_eq!(
        dispatcher.keyboard().map(|k| k.phase()),
        Some(KeyboardPhase::Open)
    );
    // The end snap is exact: baseline 40 minus the 20px bar portion.
    assert_eq!(host.padding(view).y1, 20.0);

    // A settled delivery confirms the steady state; the one-shot padding
    // does not stack.
    dispatcher.on_apply_insets(&mut host, view, &delivery(600.0));
    assert_eq!(host.padding(view).y1, 20.0);
    assert_eq!(host.translation(view).y, -500.0);
}

#[test]
fn interrupted_close_resolves_and_recovers() {
    let (mut host, view) = scene();
    let mut dispatcher = full_chain_dispatcher();
    let opening = InsetAnimation::new(1, InsetKind::IME);
    let closing = InsetAnimation::new(2, InsetKind::IME);
    let bounds = AnimationBounds::new(Insets::ZERO, Insets::new(0.0, 0.0, 0.0, 600.0));

    dispatcher.on_apply_insets(&mut host, view, &delivery(0.0));
    dispatcher.on_animation_prepare(&mut host, &opening);
    dispatcher.on_animation_start(&mut host, &opening, &bounds);
    dispatcher.on_animation_progress(&mut host, &delivery(400.0), &[opening]);

    // The user dismisses the keyboard mid-open; a second animation starts
    // before the first one ends.
    dispatcher.on_animation_prepare(&mut host, &closing);
    dispatcher.on_animation_progress(&mut host, &delivery(150.0), &[opening, closing]);
    assert_eq!(
        dispatcher.keyboard().map(|k| k.phase()),
        Some(KeyboardPhase::Closing)
    );

    dispatcher.on_animation_progress(&mut host, &delivery(0.0), &[closing]);
    dispatcher.on_animation_end(&mut host, &closing);
    assert_eq!(
        dispatcher.keyboard().map(|k| k.phase()),
        Some(KeyboardPhase::Closed)
    );
    // Closed: the full baseline padding is back and the view rests again.
    assert_eq!(host.padding(view).y1, 40.0);
    assert_eq!(host.translation(view).y, 0.0);
}

#[test]
fn disposal_freezes_visual_state() {
    let (mut host, view) = scene();
    let mut dispatcher = full_chain_dispatcher();
    let animation = InsetAnimation::new(1, InsetKind::IME);

    dispatcher.on_apply_insets(&mut host, view, &delivery(0.0));
    dispatcher.on_animation_prepare(&mut host, &animation);
    dispatcher.on_animation_progress(&mut host, &delivery(300.0), &[animation]);
    let padding = host.padding(view);
    let translation = host.translation(view);

    dispatcher.dispose();

    dispatcher.on_animation_progress(&mut host, &delivery(600.0), &[animation]);
    dispatcher.on_animation_end(&mut host, &animation);
    dispatcher.on_apply_insets(&mut host, view, &delivery(600.0));

    assert_eq!(host.padding(view), padding);
    assert_eq!(host.translation(view), translation);
}
