// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-delivery inset snapshots and the consumed sentinel.

use kurbo::Insets;

use crate::InsetKind;

/// One delivery's worth of window insets.
///
/// A snapshot stores one [`Insets`] rectangle per [`InsetKind`] category and
/// an optional "fully consumed" marker.
///
/// ## Consumption
///
/// The windowing protocol is a single-pass, top-down dispatch where each
/// participant returns either the insets it received (possibly for further
/// dispatch to descendants) or the consumed sentinel, meaning no ancestor
/// should react further. [`InsetSnapshot::CONSUMED`] is that sentinel: it
/// compares unequal to every non-consumed snapshot and reports zero insets
/// for every category.
///
/// ## Semantics
///
/// - [`InsetSnapshot::with`] assigns a rectangle to every category named by
///   the mask.
/// - [`InsetSnapshot::insets_of`] returns the component-wise maximum across
///   the categories named by the mask, so overlapping system UI (for
///   example a navigation bar underneath an open keyboard) reports the
///   larger reservation per edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsetSnapshot {
    per_kind: [Insets; InsetKind::COUNT],
    consumed: bool,
}

impl InsetSnapshot {
    /// A snapshot with no insets in any category.
    pub const EMPTY: Self = Self {
        per_kind: [Insets::ZERO; InsetKind::COUNT],
        consumed: false,
    };

    /// The "fully consumed" sentinel.
    pub const CONSUMED: Self = Self {
        per_kind: [Insets::ZERO; InsetKind::COUNT],
        consumed: true,
    };

    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns a copy with `insets` assigned to every category in `mask`.
    #[must_use]
    pub fn with(mut self, mask: InsetKind, insets: Insets) -> Self {
        for bit in 0..InsetKind::COUNT {
            if mask.bits() & (1_u16 << bit) != 0 {
                self.per_kind[bit] = insets;
            }
        }
        self
    }

    /// Returns the component-wise maximum of the categories in `mask`.
    ///
    /// An empty mask, and the consumed sentinel, report [`Insets::ZERO`].
    #[must_use]
    pub fn insets_of(&self, mask: InsetKind) -> Insets {
        let mut acc = Insets::ZERO;
        for bit in 0..InsetKind::COUNT {
            if mask.bits() & (1_u16 << bit) != 0 {
                acc = max_insets(acc, self.per_kind[bit]);
            }
        }
        acc
    }

    /// The keyboard's on-screen height: the bottom magnitude of the
    /// [`InsetKind::IME`] category.
    #[inline]
    #[must_use]
    pub fn keyboard_height(&self) -> f64 {
        self.insets_of(InsetKind::IME).y1
    }

    /// Returns `true` for the consumed sentinel.
    #[inline]
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl Default for InsetSnapshot {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Component-wise maximum of two inset rectangles.
fn max_insets(a: Insets, b: Insets) -> Insets {
    Insets::new(
        a.x0.max(b.x0),
        a.y0.max(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}
