// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference in-memory host tree.

use alloc::vec::Vec;

use eaves_insets::InsetSnapshot;
use kurbo::{Insets, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::types::{ViewHost, ViewId, ViewProps};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    live: bool,
    parent: Option<ViewId>,
    children: SmallVec<[ViewId; 4]>,
    props: ViewProps,
    consumes_insets: bool,
}

/// An in-memory [`ViewHost`] over a slot-vector tree.
///
/// This is the reference host used by the Eaves tests, benchmarks, and
/// demos. Slots are reused through a free list with a generation bump, so
/// handles held across a removal go stale rather than aliasing.
///
/// Two affordances exist purely for exercising the dispatch layer:
///
/// - [`MemoryHost::set_consumes_insets`] marks a view as consuming any
///   insets offered to it, which is how tests drive the child-consumption
///   protocol without wiring nested dispatchers.
/// - [`MemoryHost::offer_log`] records the order in which children were
///   offered insets, which is how tests assert that effects run before any
///   descendant sees a delivery.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    slots: Vec<Slot>,
    free: Vec<u32>,
    screen: Size,
    offer_log: Vec<ViewId>,
}

impl MemoryHost {
    /// Creates an empty host for a screen of the given size.
    #[must_use]
    pub fn new(screen: Size) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            screen,
            offer_log: Vec::new(),
        }
    }

    /// Inserts a view under `parent` (or as a root) and returns its handle.
    ///
    /// A dead or stale `parent` produces a root view.
    pub fn insert(&mut self, parent: Option<ViewId>, props: ViewProps) -> ViewId {
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation += 1;
                slot.live = true;
                slot.parent = None;
                slot.props = props;
                slot.consumes_insets = false;
                ViewId::new(idx, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 1,
                    live: true,
                    parent: None,
                    children: SmallVec::new(),
                    props,
                    consumes_insets: false,
                });
                ViewId::new((self.slots.len() - 1) as u32, 1)
            }
        };
        if let Some(parent) = parent
            && self.is_alive(parent)
        {
            self.slots[id.idx()].parent = Some(parent);
            self.slots[parent.idx()].children.push(id);
        }
        id
    }

    /// Removes `view` and its whole subtree.
    ///
    /// Returns the detached handles in document order (each view before its
    /// descendants). An embedding that armed auto-dispose forwards these to
    /// its dispatchers. Removing an absent view returns an empty list.
    pub fn remove(&mut self, view: ViewId) -> Vec<ViewId> {
        let mut detached = Vec::new();
        if !self.is_alive(view) {
            return detached;
        }
        if let Some(parent) = self.slots[view.idx()].parent
            && let Some(pos) = self.slots[parent.idx()]
                .children
                .iter()
                .position(|&c| c == view)
        {
            self.slots[parent.idx()].children.remove(pos);
        }
        let mut stack = Vec::new();
        stack.push(view);
        while let Some(id) = stack.pop() {
            detached.push(id);
            let slot = &mut self.slots[id.idx()];
            slot.live = false;
            slot.parent = None;
            for &child in slot.children.iter().rev() {
                stack.push(child);
            }
            slot.children.clear();
            self.free.push(id.0);
        }
        detached
    }

    /// The view's parent, if it is live and has one.
    #[must_use]
    pub fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.slot(view)?.parent
    }

    /// Overwrites the view's on-screen bounds. No-op for an absent view.
    pub fn set_frame(&mut self, view: ViewId, frame: Rect) {
        if let Some(slot) = self.slot_mut(view) {
            slot.props.frame = frame;
        }
    }

    /// Marks `view` as consuming any insets offered to it.
    pub fn set_consumes_insets(&mut self, view: ViewId, consumes: bool) {
        if let Some(slot) = self.slot_mut(view) {
            slot.consumes_insets = consumes;
        }
    }

    /// The order in which children have been offered insets so far.
    #[must_use]
    pub fn offer_log(&self) -> &[ViewId] {
        &self.offer_log
    }

    /// Clears the offer log.
    pub fn clear_offer_log(&mut self) {
        self.offer_log.clear();
    }

    fn slot(&self, view: ViewId) -> Option<&Slot> {
        self.slots
            .get(view.idx())
            .filter(|slot| slot.live && slot.generation == view.generation())
    }

    fn slot_mut(&mut self, view: ViewId) -> Option<&mut Slot> {
        self.slots
            .get_mut(view.idx())
            .filter(|slot| slot.live && slot.generation == view.generation())
    }
}

impl ViewHost for MemoryHost {
    fn is_alive(&self, view: ViewId) -> bool {
        self.slot(view).is_some()
    }

    fn padding(&self, view: ViewId) -> Insets {
        self.slot(view).map_or(Insets::ZERO, |slot| slot.props.padding)
    }

    fn set_padding(&mut self, view: ViewId, padding: Insets) {
        if let Some(slot) = self.slot_mut(view) {
            slot.props.padding = padding;
        }
    }

    fn margin(&self, view: ViewId) -> Insets {
        self.slot(view).map_or(Insets::ZERO, |slot| slot.props.margin)
    }

    fn set_margin(&mut self, view: ViewId, margin: Insets) {
        if let Some(slot) = self.slot_mut(view) {
            slot.props.margin = margin;
        }
    }

    fn translation(&self, view: ViewId) -> Vec2 {
        self.slot(view)
            .map_or(Vec2::ZERO, |slot| slot.props.translation)
    }

    fn set_translation(&mut self, view: ViewId, translation: Vec2) {
        if let Some(slot) = self.slot_mut(view) {
            slot.props.translation = translation;
        }
    }

    fn frame(&self, view: ViewId) -> Option<Rect> {
        self.slot(view).map(|slot| slot.props.frame)
    }

    fn screen(&self) -> Size {
        self.screen
    }

    fn children(&self, view: ViewId, out: &mut Vec<ViewId>) {
        if let Some(slot) = self.slot(view) {
            out.extend_from_slice(&slot.children);
        }
    }

    fn offer_insets_to_child(
        &mut self,
        child: ViewId,
        insets: &InsetSnapshot,
    ) -> InsetSnapshot {
        self.offer_log.push(child);
        match self.slot(child) {
            Some(slot) if slot.consumes_insets => InsetSnapshot::CONSUMED,
            _ => *insets,
        }
    }
}
