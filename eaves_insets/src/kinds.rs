// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inset categories and masks over them.

bitflags::bitflags! {
    /// Bitmask of window-inset categories.
    ///
    /// Each bit names one source of insets reported by the windowing host.
    /// Masks combine with the usual bit operators; queries over a multi-bit
    /// mask (see [`InsetSnapshot::insets_of`](crate::InsetSnapshot::insets_of))
    /// take the component-wise maximum across the named categories, matching
    /// the platform contract for overlapping system UI.
    ///
    /// Categories outside the system bars and the keyboard exist so that a
    /// dispatcher can carry them through unmodified; the Eaves effects never
    /// interpret them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InsetKind: u16 {
        /// The status bar at the top of the screen.
        const STATUS_BARS     = 0b0000_0001;
        /// The navigation bar (bottom or side).
        const NAVIGATION_BARS = 0b0000_0010;
        /// The caption bar of a freeform/desktop window.
        const CAPTION_BAR     = 0b0000_0100;
        /// The on-screen keyboard (input-method editor).
        const IME             = 0b0000_1000;
        /// A physical display cutout. Carried through unmodified.
        const DISPLAY_CUTOUT  = 0b0001_0000;
        /// Regions reserved for system gestures. Carried through unmodified.
        const SYSTEM_GESTURES = 0b0010_0000;

        /// All persistent system bars.
        const SYSTEM_BARS = Self::STATUS_BARS.bits()
            | Self::NAVIGATION_BARS.bits()
            | Self::CAPTION_BAR.bits();
    }
}

impl InsetKind {
    /// Number of leaf categories; snapshot storage is indexed by bit position.
    pub(crate) const COUNT: usize = 6;

    /// Returns `true` if this mask names the keyboard.
    #[inline]
    #[must_use]
    pub fn is_keyboard(self) -> bool {
        self.intersects(Self::IME)
    }
}
