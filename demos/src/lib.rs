// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared driver code for the Eaves demo programs.
//!
//! The demos have no real windowing host, so this crate scripts one: it
//! plays a keyboard animation as the platform would, interleaving prepare,
//! start, per-frame progress, and end callbacks into a dispatcher.

use eaves_dispatch::{Dispatcher, KeyboardPhase};
use eaves_host::{MemoryHost, ViewId};
use eaves_insets::{AnimationBounds, InsetAnimation, InsetKind, InsetSnapshot};
use kurbo::Insets;

/// A snapshot carrying a 48px navigation bar and the given keyboard height.
#[must_use]
pub fn delivery(keyboard: f64) -> InsetSnapshot {
    InsetSnapshot::new()
        .with(InsetKind::NAVIGATION_BARS, Insets::new(0.0, 0.0, 0.0, 48.0))
        .with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, keyboard))
}

/// A scripted keyboard animation.
#[derive(Copy, Clone, Debug)]
pub struct AnimationScript {
    /// Host-assigned animation identity.
    pub id: u64,
    /// Keyboard height at the first frame.
    pub from: f64,
    /// Keyboard height at the last frame.
    pub to: f64,
    /// Number of progress frames to deliver.
    pub steps: u32,
}

impl AnimationScript {
    /// Plays the script into `dispatcher`, calling `on_frame` after every
    /// progress delivery. Returns the derived phase after the end callback.
    pub fn play(
        &self,
        dispatcher: &mut Dispatcher,
        host: &mut MemoryHost,
        view: ViewId,
        mut on_frame: impl FnMut(&MemoryHost, f64),
    ) -> Option<KeyboardPhase> {
        let animation = InsetAnimation::new(self.id, InsetKind::IME);
        let ceiling = self.from.max(self.to);
        let bounds =
            AnimationBounds::new(Insets::ZERO, Insets::new(0.0, 0.0, 0.0, ceiling));

        dispatcher.on_apply_insets(host, view, &delivery(self.from));
        dispatcher.on_animation_prepare(host, &animation);
        dispatcher.on_animation_start(host, &animation, &bounds);
        for step in 1..=self.steps {
            let t = f64::from(step) / f64::from(self.steps);
            let height = self.from + (self.to - self.from) * t;
            let animation = animation
                .with_fraction(t)
                .with_interpolated_fraction(t);
            dispatcher.on_animation_progress(host, &delivery(height), &[animation]);
            on_frame(host, height);
        }
        dispatcher.on_animation_end(host, &animation);
        dispatcher.keyboard().map(|k| k.phase())
    }
}
