// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for dispatch.
//!
//! The dispatcher intentionally stores no history: it fans an event out and
//! returns. For many embedders it is useful to answer questions like "which
//! effects ran for that frame, and in what order?" or "when did the derived
//! keyboard state change?".
//!
//! This module provides a minimal, additive hook: the `_traced` variants of
//! the per-frame dispatcher entry points accept a [`DispatchTrace`] sink.
//! The plain entry points pass `&mut ()`, whose implementation is a no-op,
//! so untraced dispatch pays nothing. [`RecordingTrace`] is a small
//! recorder for tests and debugging overlays.

use alloc::vec::Vec;

use eaves_host::ViewId;

use crate::keyboard::KeyboardPhase;

/// A callback sink for dispatch tracing.
pub trait DispatchTrace {
    /// Called after each effect invocation, with the effect's registration
    /// index and whether it is an animated effect.
    fn effect_visited(&mut self, index: usize, animated: bool);

    /// Called once per inset pass, after every effect ran and every child
    /// was offered the insets. `consumed_by_child` reports whether any
    /// descendant consumed them.
    fn inset_pass(&mut self, view: ViewId, consumed_by_child: bool);

    /// Called when the derived keyboard phase changes.
    fn keyboard_transition(&mut self, from: KeyboardPhase, to: KeyboardPhase);
}

/// No-op sink used by the untraced entry points.
impl DispatchTrace for () {
    #[inline]
    fn effect_visited(&mut self, _index: usize, _animated: bool) {}

    #[inline]
    fn inset_pass(&mut self, _view: ViewId, _consumed_by_child: bool) {}

    #[inline]
    fn keyboard_transition(&mut self, _from: KeyboardPhase, _to: KeyboardPhase) {}
}

/// One recorded dispatch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// An effect was invoked.
    EffectVisited {
        /// Registration index of the effect.
        index: usize,
        /// Whether the effect is animated.
        animated: bool,
    },
    /// An inset pass completed.
    InsetPass {
        /// The view the pass was delivered to.
        view: ViewId,
        /// Whether any descendant consumed the insets.
        consumed_by_child: bool,
    },
    /// The derived keyboard phase changed.
    KeyboardTransition {
        /// Phase before the delivery.
        from: KeyboardPhase,
        /// Phase after the delivery.
        to: KeyboardPhase,
    },
}

/// Records every traced event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in dispatch order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Clears the recording.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DispatchTrace for RecordingTrace {
    fn effect_visited(&mut self, index: usize, animated: bool) {
        self.events.push(TraceEvent::EffectVisited { index, animated });
    }

    fn inset_pass(&mut self, view: ViewId, consumed_by_child: bool) {
        self.events.push(TraceEvent::InsetPass {
            view,
            consumed_by_child,
        });
    }

    fn keyboard_transition(&mut self, from: KeyboardPhase, to: KeyboardPhase) {
        self.events.push(TraceEvent::KeyboardTransition { from, to });
    }
}
