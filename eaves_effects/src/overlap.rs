// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep a view clear of the keyboard.

use eaves_dispatch::{AnimatedEffect, Effect, EffectCx};
use eaves_insets::{InsetAnimation, InsetSnapshot};
use kurbo::Vec2;

use crate::util::with_bottom;

/// How much of the keyboard height to offset by.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlapStrategy {
    /// Offset by the full keyboard height, whether or not the view is
    /// actually covered.
    #[default]
    FullHeight,
    /// Offset only by the portion of the keyboard that overlaps the view.
    OnlyOverlap,
}

/// Which presentation property carries the offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OffsetChannel {
    /// Add the offset to the view's bottom padding.
    Padding,
    /// Add the offset to the view's bottom margin.
    Margin,
    /// Translate the view upward by the offset.
    #[default]
    Translation,
}

/// Offsets the view so the keyboard does not cover it.
///
/// The first delivery that finds an on-screen frame captures the vertical
/// gap between the view's bottom edge and the screen's bottom edge, along
/// with the base value of the selected channel. On every animation frame
/// and every static delivery the effect recomputes the offset:
///
/// - [`OverlapStrategy::FullHeight`]: the whole keyboard height;
/// - [`OverlapStrategy::OnlyOverlap`]: keyboard height minus the captured
///   gap, so a view floating above the screen bottom moves only as far as
///   it must.
///
/// Either way the offset is clamped to `[0, greatest known keyboard
/// height]`, which suppresses overshoot from transient frame values.
///
/// The captured geometry is only valid for the layout it was measured in;
/// call [`AvoidKeyboardOverlap::invalidate_geometry`] after the host
/// re-lays-out the view.
#[derive(Debug)]
pub struct AvoidKeyboardOverlap {
    strategy: OverlapStrategy,
    channel: OffsetChannel,
    gap: Option<f64>,
    base: Option<f64>,
    max_seen: f64,
}

impl AvoidKeyboardOverlap {
    /// Creates the effect with the given strategy, offsetting through
    /// `channel`.
    #[must_use]
    pub fn new(strategy: OverlapStrategy, channel: OffsetChannel) -> Self {
        Self {
            strategy,
            channel,
            gap: None,
            base: None,
            max_seen: 0.0,
        }
    }

    /// Drops the captured frame gap so the next delivery re-measures it.
    ///
    /// The channel base is kept; it describes the view's resting value, not
    /// its layout.
    pub fn invalidate_geometry(&mut self) {
        self.gap = None;
    }

    fn apply(&mut self, cx: &mut EffectCx<'_>, height: f64) {
        let Some(view) = cx.bound_view() else { return };
        self.max_seen = self.max_seen.max(height);

        if self.gap.is_none()
            && let Some(frame) = cx.host().frame(view)
        {
            let screen = cx.host().screen();
            self.gap = Some((screen.height - frame.y1).max(0.0));
        }
        if self.base.is_none() {
            self.base = Some(match self.channel {
                OffsetChannel::Padding => cx.host().padding(view).y1,
                OffsetChannel::Margin => cx.host().margin(view).y1,
                OffsetChannel::Translation => cx.host().translation(view).y,
            });
        }
        let Some(base) = self.base else { return };

        let raw = match self.strategy {
            OverlapStrategy::FullHeight => height,
            OverlapStrategy::OnlyOverlap => height - self.gap.unwrap_or(0.0),
        };
        let known = cx.keyboard().map_or(0.0, |k| k.max_height());
        let ceiling = if known > 0.0 {
            known
        } else if self.max_seen > 0.0 {
            self.max_seen
        } else {
            height
        };
        let offset = raw.clamp(0.0, ceiling.max(0.0));

        match self.channel {
            OffsetChannel::Padding => {
                let padding = cx.host().padding(view);
                cx.host()
                    .set_padding(view, with_bottom(padding, base + offset));
            }
            OffsetChannel::Margin => {
                let margin = cx.host().margin(view);
                cx.host()
                    .set_margin(view, with_bottom(margin, base + offset));
            }
            OffsetChannel::Translation => {
                let translation = cx.host().translation(view);
                cx.host()
                    .set_translation(view, Vec2::new(translation.x, base - offset));
            }
        }
    }
}

impl Effect for AvoidKeyboardOverlap {
    fn on_insets(&mut self, cx: &mut EffectCx<'_>, insets: &InsetSnapshot) {
        self.apply(cx, insets.keyboard_height());
    }
}

impl AnimatedEffect for AvoidKeyboardOverlap {
    fn on_animation_progress(
        &mut self,
        cx: &mut EffectCx<'_>,
        insets: &InsetSnapshot,
        running: &[InsetAnimation],
    ) {
        if !running.iter().any(InsetAnimation::is_keyboard) {
            return;
        }
        self.apply(cx, insets.keyboard_height());
    }
}
