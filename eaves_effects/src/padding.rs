// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padding effects: establish system-bar padding, then yield it to the
//! keyboard.
//!
//! [`PadForSystemBars`] and [`RetractPaddingWithKeyboard`] are designed as
//! a pair: the first establishes padding that keeps content clear of the
//! system bars, the second treats that padding as its baseline and
//! gradually hands the bar portion back while the keyboard covers the bars
//! anyway. Their relative order in a chain is therefore fixed (padding
//! before retraction), which [`build_chain`](crate::build_chain) enforces.

use eaves_dispatch::{AnimatedEffect, Effect, EffectCx};
use eaves_insets::{InsetAnimation, InsetKind, InsetSnapshot};
use kurbo::Insets;

use crate::util::{add_insets, with_bottom};

/// Adds the system-bar insets to the view's padding, exactly once.
///
/// The first inset delivery applies; every later delivery is a no-op, so
/// repeated deliveries of unchanged insets cannot stack padding. The
/// categories added are configurable and default to
/// [`InsetKind::SYSTEM_BARS`].
#[derive(Debug)]
pub struct PadForSystemBars {
    mask: InsetKind,
    applied: bool,
}

impl PadForSystemBars {
    /// Pads for [`InsetKind::SYSTEM_BARS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask: InsetKind::SYSTEM_BARS,
            applied: false,
        }
    }

    /// Pads for the given categories instead.
    #[must_use]
    pub fn with_mask(mut self, mask: InsetKind) -> Self {
        self.mask = mask;
        self
    }

    /// Returns `true` once padding has been applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

impl Default for PadForSystemBars {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for PadForSystemBars {
    fn on_insets(&mut self, cx: &mut EffectCx<'_>, insets: &InsetSnapshot) {
        if self.applied {
            return;
        }
        let Some(view) = cx.bound_view() else { return };
        let bars = insets.insets_of(self.mask);
        let padding = cx.host().padding(view);
        cx.host().set_padding(view, add_insets(padding, bars));
        self.applied = true;
    }
}

/// Proportionally removes the system-bar portion of the bottom padding
/// while the keyboard is on screen.
///
/// On its first inset delivery the effect captures the view's padding as
/// the baseline, together with the system-bar bottom inset; this is why it
/// must sit after [`PadForSystemBars`] in a chain. On every keyboard
/// animation frame it interpolates the bar portion away in proportion to
/// `keyboard height ÷ greatest known keyboard height`, clamped to `[0, 1]`.
/// At animation end it snaps to the exact value (baseline minus bar portion
/// if the keyboard ended open, the full baseline otherwise) so that
/// interpolation rounding cannot drift.
#[derive(Debug)]
pub struct RetractPaddingWithKeyboard {
    mask: InsetKind,
    baseline: Option<Insets>,
    bar_bottom: f64,
    last_height: f64,
    max_seen: f64,
}

impl RetractPaddingWithKeyboard {
    /// Retracts the [`InsetKind::SYSTEM_BARS`] portion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask: InsetKind::SYSTEM_BARS,
            baseline: None,
            bar_bottom: 0.0,
            last_height: 0.0,
            max_seen: 0.0,
        }
    }

    /// Retracts the given categories' portion instead.
    #[must_use]
    pub fn with_mask(mut self, mask: InsetKind) -> Self {
        self.mask = mask;
        self
    }

    /// The normalization ceiling: the tracker's when one is available,
    /// otherwise the best local estimate, never zero.
    fn ceiling(&self, cx: &EffectCx<'_>) -> f64 {
        if let Some(keyboard) = cx.keyboard() {
            keyboard.normalization_height()
        } else if self.max_seen > 0.0 {
            self.max_seen
        } else {
            1.0
        }
    }
}

impl Default for RetractPaddingWithKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for RetractPaddingWithKeyboard {
    fn on_insets(&mut self, cx: &mut EffectCx<'_>, insets: &InsetSnapshot) {
        let Some(view) = cx.bound_view() else { return };
        if self.baseline.is_none() {
            self.baseline = Some(cx.host().padding(view));
            self.bar_bottom = insets.insets_of(self.mask).y1;
        }
        let height = insets.keyboard_height();
        self.last_height = height;
        self.max_seen = self.max_seen.max(height);
    }
}

impl AnimatedEffect for RetractPaddingWithKeyboard {
    fn on_animation_progress(
        &mut self,
        cx: &mut EffectCx<'_>,
        insets: &InsetSnapshot,
        running: &[InsetAnimation],
    ) {
        if !running.iter().any(InsetAnimation::is_keyboard) {
            return;
        }
        let Some(view) = cx.bound_view() else { return };
        let Some(baseline) = self.baseline else { return };

        let height = insets.keyboard_height();
        self.last_height = height;
        self.max_seen = self.max_seen.max(height);

        let fraction = (height / self.ceiling(cx)).clamp(0.0, 1.0);
        let bottom = baseline.y1 - self.bar_bottom * fraction;
        cx.host().set_padding(view, with_bottom(baseline, bottom));
    }

    fn on_animation_end(&mut self, cx: &mut EffectCx<'_>, animation: &InsetAnimation) {
        if !animation.is_keyboard() {
            return;
        }
        let Some(view) = cx.bound_view() else { return };
        let Some(baseline) = self.baseline else { return };

        let open = cx
            .keyboard()
            .map_or(self.last_height > 0.0, |k| k.last_height() > 0.0);
        let bottom = if open {
            baseline.y1 - self.bar_bottom
        } else {
            baseline.y1
        };
        cx.host().set_padding(view, with_bottom(baseline, bottom));
    }
}
