// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation-lifecycle descriptors.

use kurbo::Insets;

use crate::InsetKind;

/// A running inset animation, as reported by the windowing host.
///
/// The host delivers one of these with every lifecycle callback (prepare,
/// start, end) and a slice of them with every progress frame. The `mask`
/// names the categories whose insets the animation is changing; the keyboard
/// state machine only reacts to animations whose mask includes
/// [`InsetKind::IME`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsetAnimation {
    id: u64,
    mask: InsetKind,
    fraction: f64,
    interpolated_fraction: f64,
}

impl InsetAnimation {
    /// Creates a descriptor for an animation over the categories in `mask`,
    /// with both fractions at zero.
    #[must_use]
    pub const fn new(id: u64, mask: InsetKind) -> Self {
        Self {
            id,
            mask,
            fraction: 0.0,
            interpolated_fraction: 0.0,
        }
    }

    /// Host-assigned identity, stable across the animation's lifecycle.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The categories this animation is changing.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> InsetKind {
        self.mask
    }

    /// Raw linear progress in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Progress after the host's easing curve, in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn interpolated_fraction(&self) -> f64 {
        self.interpolated_fraction
    }

    /// Returns a copy at the given raw progress.
    #[must_use]
    pub const fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    /// Returns a copy at the given eased progress.
    #[must_use]
    pub const fn with_interpolated_fraction(mut self, fraction: f64) -> Self {
        self.interpolated_fraction = fraction;
        self
    }

    /// Returns `true` if this animation changes any category in `mask`.
    #[inline]
    #[must_use]
    pub fn affects(&self, mask: InsetKind) -> bool {
        self.mask.intersects(mask)
    }

    /// Returns `true` if this animation moves the keyboard.
    #[inline]
    #[must_use]
    pub fn is_keyboard(&self) -> bool {
        self.mask.is_keyboard()
    }
}

/// The range an animation moves its insets through.
///
/// Delivered once, at animation start. Observers read the bounds; nothing in
/// the dispatch layer ever alters them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationBounds {
    lower: Insets,
    upper: Insets,
}

impl AnimationBounds {
    /// Creates bounds from the host-reported lower and upper insets.
    #[must_use]
    pub const fn new(lower: Insets, upper: Insets) -> Self {
        Self { lower, upper }
    }

    /// The insets at the animation's fully-retracted end.
    #[inline]
    #[must_use]
    pub const fn lower(&self) -> Insets {
        self.lower
    }

    /// The insets at the animation's fully-extended end.
    #[inline]
    #[must_use]
    pub const fn upper(&self) -> Insets {
        self.upper
    }

    /// The keyboard height this animation can reach: the upper bound's
    /// bottom magnitude.
    #[inline]
    #[must_use]
    pub const fn keyboard_ceiling(&self) -> f64 {
        self.upper.y1
    }
}
