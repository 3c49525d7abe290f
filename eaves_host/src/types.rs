// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the host boundary: view handles, presentation
//! properties, and the host capability trait.

use alloc::vec::Vec;

use eaves_insets::InsetSnapshot;
use kurbo::{Insets, Rect, Size, Vec2};

/// Identifier for a view in a host tree.
///
/// A small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused. It consists of a slot index
/// and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ViewId` that pointed to
///   that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `ViewId`.
///
/// Stale `ViewId`s never alias a different live view because the generation
/// must match; use [`ViewHost::is_alive`] to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ViewId(pub(crate) u32, pub(crate) u32);

impl ViewId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Presentation properties of a view, as read and written by inset effects.
///
/// All magnitudes are device pixels. `frame` is the view's on-screen bounds
/// after layout; the host owns it, effects only read it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProps {
    /// Inner padding.
    pub padding: Insets,
    /// Outer margin.
    pub margin: Insets,
    /// Post-layout translation.
    pub translation: Vec2,
    /// On-screen bounds in device pixels.
    pub frame: Rect,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            padding: Insets::ZERO,
            margin: Insets::ZERO,
            translation: Vec2::ZERO,
            frame: Rect::ZERO,
        }
    }
}

/// Capability trait over a host view hierarchy.
///
/// This is everything the Eaves dispatch layer is allowed to do to a view
/// tree. A windowing integration implements it over real views;
/// [`MemoryHost`](crate::MemoryHost) implements it over an in-memory tree.
///
/// ## Absent views
///
/// Every operation must tolerate a stale or dead [`ViewId`]: getters report
/// zero values ([`ViewHost::frame`] reports `None`) and setters do nothing.
/// Implementations must not panic on any handle.
pub trait ViewHost {
    /// Returns `true` if `view` refers to a live view.
    fn is_alive(&self, view: ViewId) -> bool;

    /// The view's inner padding.
    fn padding(&self, view: ViewId) -> Insets;

    /// Sets the view's inner padding.
    fn set_padding(&mut self, view: ViewId, padding: Insets);

    /// The view's outer margin.
    fn margin(&self, view: ViewId) -> Insets;

    /// Sets the view's outer margin.
    fn set_margin(&mut self, view: ViewId, margin: Insets);

    /// The view's post-layout translation.
    fn translation(&self, view: ViewId) -> Vec2;

    /// Sets the view's post-layout translation.
    fn set_translation(&mut self, view: ViewId, translation: Vec2);

    /// The view's on-screen bounds, or `None` for an absent view.
    fn frame(&self, view: ViewId) -> Option<Rect>;

    /// The screen size in device pixels.
    fn screen(&self) -> Size;

    /// Appends the view's immediate children to `out`, in tree order.
    fn children(&self, view: ViewId, out: &mut Vec<ViewId>);

    /// Offers `insets` to whatever consumer is bound to `child`.
    ///
    /// Returns what that consumer returned: the insets (possibly after
    /// dispatching to its own descendants) or
    /// [`InsetSnapshot::CONSUMED`]. An absent child returns the insets
    /// unchanged.
    fn offer_insets_to_child(
        &mut self,
        child: ViewId,
        insets: &InsetSnapshot,
    ) -> InsetSnapshot;
}
