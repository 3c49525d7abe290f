// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small shared arithmetic over inset rectangles.

use kurbo::Insets;

/// Edge-wise sum of two inset rectangles.
pub(crate) fn add_insets(a: Insets, b: Insets) -> Insets {
    Insets::new(a.x0 + b.x0, a.y0 + b.y0, a.x1 + b.x1, a.y1 + b.y1)
}

/// `insets` with its bottom edge replaced.
pub(crate) fn with_bottom(insets: Insets, bottom: f64) -> Insets {
    Insets::new(insets.x0, insets.y0, insets.x1, bottom)
}
