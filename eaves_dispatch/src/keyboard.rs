// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard state helper: derive open/closed/animating state from raw
//! inset deltas.
//!
//! The windowing host reports the keyboard only as a numeric inset; it never
//! says "the keyboard is open". This module derives that higher-level state.
//! Two tracks feed it, because the host delivers inset-apply and
//! animation-lifecycle callbacks on separate, not-strictly-interleaved
//! channels:
//!
//! - while no keyboard animation is being tracked, a repeated positive
//!   height settles [`KeyboardPhase::Open`] and a zero height settles
//!   [`KeyboardPhase::Closed`];
//! - while one is, the direction of each height delta selects
//!   [`KeyboardPhase::OpeningOrChanging`] or [`KeyboardPhase::Closing`];
//! - animation end forces a terminal phase from the last recorded height,
//!   so the machine can never stick in an animating phase when the final
//!   apply-insets never arrives.
//!
//! ## Minimal example
//!
//! ```
//! use eaves_dispatch::{KeyboardPhase, KeyboardTracker};
//! use eaves_insets::{InsetAnimation, InsetKind, InsetSnapshot};
//! use kurbo::Insets;
//!
//! fn ime(height: f64) -> InsetSnapshot {
//!     InsetSnapshot::new().with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, height))
//! }
//!
//! let mut tracker = KeyboardTracker::new();
//! let animation = InsetAnimation::new(1, InsetKind::IME);
//!
//! tracker.on_animation_prepare(&animation);
//! tracker.on_insets(&ime(300.0));
//! assert_eq!(tracker.phase(), KeyboardPhase::OpeningOrChanging);
//!
//! tracker.on_animation_end(&animation);
//! assert_eq!(tracker.phase(), KeyboardPhase::Open);
//! ```

use eaves_insets::{AnimationBounds, InsetAnimation, InsetSnapshot};

/// Derived keyboard state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyboardPhase {
    /// No inset delivery has settled a state yet.
    Unknown,
    /// The keyboard is on screen at a stable height.
    Open,
    /// The keyboard is off screen.
    Closed,
    /// A tracked animation is raising the keyboard, or changing the height
    /// of an already-open keyboard upward.
    OpeningOrChanging,
    /// A tracked animation is lowering the keyboard.
    Closing,
}

/// Derives [`KeyboardPhase`] from the raw inset stream.
///
/// Owned by a dispatcher; effects receive it read-only through their
/// invocation context. Besides the phase it records the last reported
/// keyboard height, the greatest height ever observed (the normalization
/// ceiling for proportional effects), and the last full snapshot.
#[derive(Clone, Debug, Default)]
pub struct KeyboardTracker {
    phase: KeyboardPhase,
    last_height: f64,
    max_height: f64,
    animating: bool,
    last_snapshot: Option<InsetSnapshot>,
}

impl Default for KeyboardPhase {
    fn default() -> Self {
        Self::Unknown
    }
}

impl KeyboardTracker {
    /// Creates a tracker in [`KeyboardPhase::Unknown`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current derived phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> KeyboardPhase {
        self.phase
    }

    /// Returns `true` while a keyboard animation is being tracked.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// The keyboard height from the most recent delivery, in device pixels.
    #[inline]
    #[must_use]
    pub fn last_height(&self) -> f64 {
        self.last_height
    }

    /// The greatest keyboard height ever observed.
    #[inline]
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// The most recent non-consumed snapshot, if any arrived yet.
    #[inline]
    #[must_use]
    pub fn last_snapshot(&self) -> Option<&InsetSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// A safe denominator for progress normalization.
    ///
    /// The greatest observed height when one exists, else the last reported
    /// height, else `1.0`. Never zero.
    #[must_use]
    pub fn normalization_height(&self) -> f64 {
        if self.max_height > 0.0 {
            self.max_height
        } else if self.last_height > 0.0 {
            self.last_height
        } else {
            1.0
        }
    }

    /// Feeds one inset delivery into the machine.
    ///
    /// Both the static apply path and animation progress frames call this;
    /// the comparison track is the same for either channel, and a repeated
    /// equal height never transitions, so double delivery is harmless.
    /// The consumed sentinel carries no magnitudes and is ignored.
    pub fn on_insets(&mut self, insets: &InsetSnapshot) {
        if insets.is_consumed() {
            return;
        }
        let height = insets.keyboard_height();
        if self.animating {
            if height > self.last_height {
                self.phase = KeyboardPhase::OpeningOrChanging;
            } else if height < self.last_height {
                self.phase = KeyboardPhase::Closing;
            }
        } else if height > 0.0 && height == self.last_height {
            self.phase = KeyboardPhase::Open;
        } else if height == 0.0 {
            self.phase = KeyboardPhase::Closed;
        }
        // A single positive frame with no animation in flight settles
        // nothing; the next delivery decides.
        self.max_height = self.max_height.max(height);
        self.last_height = height;
        self.last_snapshot = Some(*insets);
    }

    /// A keyboard-type animation is about to run.
    ///
    /// Non-keyboard animations are ignored. A second keyboard animation
    /// starting while one is already tracked is absorbed into the same
    /// logical window.
    pub fn on_animation_prepare(&mut self, animation: &InsetAnimation) {
        if animation.is_keyboard() {
            self.animating = true;
        }
    }

    /// A keyboard-type animation reported its range.
    ///
    /// Sets the tracking flag for hosts that skip the prepare callback and
    /// absorbs the upper bound into the normalization ceiling.
    pub fn on_animation_start(&mut self, animation: &InsetAnimation, bounds: &AnimationBounds) {
        if animation.is_keyboard() {
            self.animating = true;
            self.max_height = self.max_height.max(bounds.keyboard_ceiling());
        }
    }

    /// A keyboard-type animation finished.
    ///
    /// Clears the tracking flag and forces a terminal phase from the last
    /// recorded height. This also covers an end that arrives without a
    /// matching start.
    pub fn on_animation_end(&mut self, animation: &InsetAnimation) {
        if !animation.is_keyboard() {
            return;
        }
        self.animating = false;
        self.phase = if self.last_height > 0.0 {
            KeyboardPhase::Open
        } else {
            KeyboardPhase::Closed
        };
    }
}

#[cfg(test)]
mod tests {
    use eaves_insets::InsetKind;
    use kurbo::Insets;

    use super::*;

    fn ime(height: f64) -> InsetSnapshot {
        InsetSnapshot::new().with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, height))
    }

    fn keyboard_animation() -> InsetAnimation {
        InsetAnimation::new(1, InsetKind::IME)
    }

    #[test]
    fn starts_unknown() {
        let tracker = KeyboardTracker::new();
        assert_eq!(tracker.phase(), KeyboardPhase::Unknown);
        assert!(!tracker.is_animating());
        assert_eq!(tracker.last_height(), 0.0);
    }

    #[test]
    fn static_zero_settles_closed() {
        let mut tracker = KeyboardTracker::new();
        tracker.on_insets(&ime(0.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Closed);
    }

    #[test]
    fn static_positive_needs_a_repeat_to_settle_open() {
        let mut tracker = KeyboardTracker::new();
        tracker.on_insets(&ime(300.0));
        // One transient frame settles nothing.
        assert_eq!(tracker.phase(), KeyboardPhase::Unknown);
        tracker.on_insets(&ime(300.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Open);
    }

    #[test]
    fn rise_then_fall_without_animation_settles_open_then_closed() {
        let mut tracker = KeyboardTracker::new();
        for height in [0.0, 100.0, 200.0, 300.0, 300.0] {
            tracker.on_insets(&ime(height));
        }
        assert_eq!(tracker.phase(), KeyboardPhase::Open);
        for height in [200.0, 100.0, 0.0] {
            tracker.on_insets(&ime(height));
        }
        assert_eq!(tracker.phase(), KeyboardPhase::Closed);
        assert_eq!(tracker.max_height(), 300.0);
    }

    #[test]
    fn animated_open_tracks_direction_and_end_forces_open() {
        let mut tracker = KeyboardTracker::new();
        let animation = keyboard_animation();

        tracker.on_insets(&ime(0.0));
        tracker.on_animation_prepare(&animation);
        assert!(tracker.is_animating());

        tracker.on_insets(&ime(0.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Closed);
        tracker.on_insets(&ime(300.0));
        assert_eq!(tracker.phase(), KeyboardPhase::OpeningOrChanging);
        tracker.on_insets(&ime(600.0));
        assert_eq!(tracker.phase(), KeyboardPhase::OpeningOrChanging);

        tracker.on_animation_end(&animation);
        assert!(!tracker.is_animating());
        assert_eq!(tracker.phase(), KeyboardPhase::Open);
        assert_eq!(tracker.max_height(), 600.0);
    }

    #[test]
    fn animated_close_tracks_closing_and_end_forces_closed() {
        let mut tracker = KeyboardTracker::new();
        let animation = keyboard_animation();
        tracker.on_insets(&ime(600.0));
        tracker.on_insets(&ime(600.0));

        tracker.on_animation_prepare(&animation);
        tracker.on_insets(&ime(400.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Closing);
        tracker.on_insets(&ime(0.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Closing);

        tracker.on_animation_end(&animation);
        assert_eq!(tracker.phase(), KeyboardPhase::Closed);
    }

    #[test]
    fn end_without_start_still_resolves_a_terminal_phase() {
        let mut tracker = KeyboardTracker::new();
        tracker.on_insets(&ime(250.0));
        tracker.on_animation_end(&keyboard_animation());
        assert_eq!(tracker.phase(), KeyboardPhase::Open);
        assert!(!tracker.is_animating());
    }

    #[test]
    fn non_keyboard_animations_are_ignored() {
        let mut tracker = KeyboardTracker::new();
        let bars = InsetAnimation::new(2, InsetKind::STATUS_BARS);
        tracker.on_animation_prepare(&bars);
        assert!(!tracker.is_animating());
        tracker.on_animation_end(&bars);
        assert_eq!(tracker.phase(), KeyboardPhase::Unknown);
    }

    #[test]
    fn start_bounds_raise_the_normalization_ceiling() {
        let mut tracker = KeyboardTracker::new();
        let bounds = AnimationBounds::new(Insets::ZERO, Insets::new(0.0, 0.0, 0.0, 600.0));
        tracker.on_animation_start(&keyboard_animation(), &bounds);
        assert!(tracker.is_animating());
        assert_eq!(tracker.max_height(), 600.0);
        assert_eq!(tracker.normalization_height(), 600.0);
    }

    #[test]
    fn normalization_never_reports_zero() {
        let mut tracker = KeyboardTracker::new();
        assert_eq!(tracker.normalization_height(), 1.0);
        tracker.on_insets(&ime(120.0));
        assert_eq!(tracker.normalization_height(), 120.0);
    }

    #[test]
    fn overlapping_keyboard_animations_collapse_into_one_window() {
        let mut tracker = KeyboardTracker::new();
        let first = InsetAnimation::new(1, InsetKind::IME);
        let second = InsetAnimation::new(2, InsetKind::IME);

        tracker.on_animation_prepare(&first);
        tracker.on_insets(&ime(300.0));
        // Interrupted: a second animation starts before the first ends.
        tracker.on_animation_prepare(&second);
        tracker.on_insets(&ime(150.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Closing);

        tracker.on_animation_end(&first);
        assert_eq!(tracker.phase(), KeyboardPhase::Open);
        assert!(!tracker.is_animating());
        // The next settled delivery re-corrects regardless.
        tracker.on_insets(&ime(0.0));
        assert_eq!(tracker.phase(), KeyboardPhase::Closed);
    }

    #[test]
    fn consumed_sentinel_is_ignored() {
        let mut tracker = KeyboardTracker::new();
        tracker.on_insets(&ime(300.0));
        tracker.on_insets(&InsetSnapshot::CONSUMED);
        assert_eq!(tracker.last_height(), 300.0);
    }

    #[test]
    fn repeated_zero_frames_then_rise_opens_at_end() {
        // Heights 0, 0, 300, 600 during an active animation.
        let mut tracker = KeyboardTracker::new();
        let animation = keyboard_animation();
        tracker.on_animation_prepare(&animation);
        tracker.on_insets(&ime(0.0));
        tracker.on_insets(&ime(0.0));
        tracker.on_insets(&ime(300.0));
        assert_eq!(tracker.phase(), KeyboardPhase::OpeningOrChanging);
        tracker.on_insets(&ime(600.0));
        assert_eq!(tracker.phase(), KeyboardPhase::OpeningOrChanging);
        tracker.on_animation_end(&animation);
        assert_eq!(tracker.phase(), KeyboardPhase::Open);
    }
}
