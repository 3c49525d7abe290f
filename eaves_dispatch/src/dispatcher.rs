// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher: fan raw host callbacks out to an ordered effect chain.
//!
//! A [`Dispatcher`] owns an ordered list of effects, fixed at construction,
//! and re-broadcasts every host callback to them in registration order. The
//! order is identical for every event type, and it matters: later effects
//! may depend on state captured by earlier ones (a padding effect must run
//! before an effect that reads that padding as a baseline).
//!
//! ## Inset consumption
//!
//! [`Dispatcher::on_apply_insets`] realizes a single-pass top-down dispatch
//! with a bottom-up consumption signal: the dispatcher's own effects always
//! see the insets; afterwards the same insets are offered to every direct
//! child view, and the consumed sentinel is returned exactly when at least
//! one descendant consumed them. [`Propagation::Stop`] skips the children
//! phase entirely.
//!
//! ## Lifecycle
//!
//! [`Dispatcher::dispose`] is idempotent and synchronous: it clears the
//! host binding and every effect's bound view before returning, so no event
//! arriving afterwards can reach a stale effect.
//! [`Dispatcher::auto_dispose_on_detach`] arms a one-shot guard that
//! disposes the first time the embedding reports the watched view detached,
//! so a dispatcher whose view is destroyed mid-animation cannot leak.
//!
//! ## Minimal example
//!
//! ```
//! use eaves_dispatch::{Dispatcher, Effect, EffectCx, EffectNode};
//! use eaves_host::{MemoryHost, ViewProps};
//! use eaves_insets::{InsetKind, InsetSnapshot};
//! use kurbo::{Insets, Size};
//!
//! struct PadBottom;
//!
//! impl Effect for PadBottom {
//!     fn on_insets(&mut self, cx: &mut EffectCx<'_>, insets: &InsetSnapshot) {
//!         let Some(view) = cx.bound_view() else { return };
//!         let bars = insets.insets_of(InsetKind::SYSTEM_BARS);
//!         cx.host().set_padding(view, bars);
//!     }
//! }
//!
//! let mut host = MemoryHost::new(Size::new(1080.0, 1920.0));
//! let view = host.insert(None, ViewProps::default());
//!
//! let mut dispatcher = Dispatcher::new(vec![EffectNode::plain(PadBottom)]);
//! let insets = InsetSnapshot::new()
//!     .with(InsetKind::NAVIGATION_BARS, Insets::new(0.0, 0.0, 0.0, 48.0));
//! let returned = dispatcher.on_apply_insets(&mut host, view, &insets);
//!
//! assert!(!returned.is_consumed());
//! use eaves_host::ViewHost;
//! assert_eq!(host.padding(view), Insets::new(0.0, 0.0, 0.0, 48.0));
//! ```

use alloc::vec::Vec;
use core::fmt;

use eaves_host::{ViewHost, ViewId};
use eaves_insets::{AnimationBounds, InsetAnimation, InsetSnapshot};

use crate::effect::{AnimatedEffect, EffectCx, EffectNode};
use crate::keyboard::KeyboardTracker;
use crate::trace::DispatchTrace;

/// Whether inset deliveries continue to descendant views.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    /// Offer insets to every direct child after the effects ran.
    #[default]
    Forward,
    /// The effects are the end of the line; children see nothing.
    Stop,
}

/// One attached effect: the unit plus its revocable view binding.
///
/// The binding is the explicit nullable relation that replaces a weak
/// back-pointer: it is set by the first inset delivery (and on rebind) and
/// cleared only by disposal.
struct AttachedEffect {
    node: EffectNode,
    view: Option<ViewId>,
}

/// Receives raw inset and animation callbacks from a windowing host and
/// fans them out to an ordered chain of effects.
///
/// Owning an effect chain means exclusive attachment: effects are moved in
/// at construction and can belong to no other dispatcher. The bound host
/// view is rebindable but held by at most one dispatcher at a time; that
/// exclusivity is the embedding's to uphold.
pub struct Dispatcher {
    effects: Vec<AttachedEffect>,
    host_view: Option<ViewId>,
    propagation: Propagation,
    keyboard: Option<KeyboardTracker>,
    auto_dispose: Option<ViewId>,
    disposed: bool,
    child_scratch: Vec<ViewId>,
}

impl Dispatcher {
    /// Creates a dispatcher over `effects`, in dispatch order, with
    /// [`Propagation::Forward`] and no keyboard tracking.
    #[must_use]
    pub fn new(effects: Vec<EffectNode>) -> Self {
        Self {
            effects: effects
                .into_iter()
                .map(|node| AttachedEffect { node, view: None })
                .collect(),
            host_view: None,
            propagation: Propagation::default(),
            keyboard: None,
            auto_dispose: None,
            disposed: false,
            child_scratch: Vec::new(),
        }
    }

    /// Sets the propagation mode.
    #[must_use]
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// Attaches a keyboard tracker, making derived keyboard state available
    /// to the effects through their context.
    #[must_use]
    pub fn with_keyboard_tracking(mut self) -> Self {
        self.keyboard = Some(KeyboardTracker::new());
        self
    }

    /// The keyboard tracker, when tracking was enabled.
    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> Option<&KeyboardTracker> {
        self.keyboard.as_ref()
    }

    /// The currently bound host view.
    #[inline]
    #[must_use]
    pub fn host_view(&self) -> Option<ViewId> {
        self.host_view
    }

    /// Number of attached effects.
    #[inline]
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Returns `true` once [`Dispatcher::dispose`] ran.
    #[inline]
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Handles one inset delivery. See the module docs for the consumption
    /// protocol.
    pub fn on_apply_insets(
        &mut self,
        host: &mut dyn ViewHost,
        view: ViewId,
        insets: &InsetSnapshot,
    ) -> InsetSnapshot {
        self.on_apply_insets_traced(host, view, insets, &mut ())
    }

    /// [`Dispatcher::on_apply_insets`] with a trace sink.
    pub fn on_apply_insets_traced(
        &mut self,
        host: &mut dyn ViewHost,
        view: ViewId,
        insets: &InsetSnapshot,
        trace: &mut dyn DispatchTrace,
    ) -> InsetSnapshot {
        if self.disposed {
            return *insets;
        }
        if self.host_view != Some(view) {
            self.host_view = Some(view);
        }
        self.track_insets(insets, trace);

        let keyboard = self.keyboard.as_ref();
        for (index, slot) in self.effects.iter_mut().enumerate() {
            if slot.view != Some(view) {
                slot.view = Some(view);
            }
            let mut cx = EffectCx::new(slot.view, &mut *host, keyboard);
            slot.node.as_effect_mut().on_insets(&mut cx, insets);
            trace.effect_visited(index, slot.node.is_animated());
        }

        if self.propagation == Propagation::Stop {
            trace.inset_pass(view, false);
            return *insets;
        }

        self.child_scratch.clear();
        host.children(view, &mut self.child_scratch);
        let children = core::mem::take(&mut self.child_scratch);
        let mut consumed = false;
        for &child in &children {
            if host.offer_insets_to_child(child, insets).is_consumed() {
                consumed = true;
            }
        }
        self.child_scratch = children;

        trace.inset_pass(view, consumed);
        if consumed {
            InsetSnapshot::CONSUMED
        } else {
            *insets
        }
    }

    /// Broadcasts an imminent animation to the animated effects.
    pub fn on_animation_prepare(&mut self, host: &mut dyn ViewHost, animation: &InsetAnimation) {
        if self.disposed {
            return;
        }
        if let Some(tracker) = self.keyboard.as_mut() {
            tracker.on_animation_prepare(animation);
        }
        self.broadcast_animated(host, |effect, cx| {
            effect.on_animation_prepare(cx, animation);
        });
    }

    /// Broadcasts an animation start and passes its bounds through
    /// unchanged; effects observe, never alter, the bounds contract.
    pub fn on_animation_start(
        &mut self,
        host: &mut dyn ViewHost,
        animation: &InsetAnimation,
        bounds: &AnimationBounds,
    ) -> AnimationBounds {
        if self.disposed {
            return *bounds;
        }
        if let Some(tracker) = self.keyboard.as_mut() {
            tracker.on_animation_start(animation, bounds);
        }
        self.broadcast_animated(host, |effect, cx| {
            effect.on_animation_start(cx, animation, bounds);
        });
        *bounds
    }

    /// Handles one animation frame; the insets are returned unchanged.
    pub fn on_animation_progress(
        &mut self,
        host: &mut dyn ViewHost,
        insets: &InsetSnapshot,
        running: &[InsetAnimation],
    ) -> InsetSnapshot {
        self.on_animation_progress_traced(host, insets, running, &mut ())
    }

    /// [`Dispatcher::on_animation_progress`] with a trace sink.
    pub fn on_animation_progress_traced(
        &mut self,
        host: &mut dyn ViewHost,
        insets: &InsetSnapshot,
        running: &[InsetAnimation],
        trace: &mut dyn DispatchTrace,
    ) -> InsetSnapshot {
        if self.disposed {
            return *insets;
        }
        self.track_insets(insets, trace);

        let keyboard = self.keyboard.as_ref();
        for (index, slot) in self.effects.iter_mut().enumerate() {
            if let Some(effect) = slot.node.as_animated_mut() {
                let mut cx = EffectCx::new(slot.view, &mut *host, keyboard);
                effect.on_animation_progress(&mut cx, insets, running);
                trace.effect_visited(index, true);
            }
        }
        *insets
    }

    /// Broadcasts an animation end to the animated effects.
    ///
    /// Tolerated without a matching start; the keyboard tracker still
    /// resolves a terminal phase from the last recorded height.
    pub fn on_animation_end(&mut self, host: &mut dyn ViewHost, animation: &InsetAnimation) {
        if self.disposed {
            return;
        }
        if let Some(tracker) = self.keyboard.as_mut() {
            tracker.on_animation_end(animation);
        }
        self.broadcast_animated(host, |effect, cx| {
            effect.on_animation_end(cx, animation);
        });
    }

    /// Detaches every effect and clears the host binding. Idempotent; safe
    /// to call any number of times, from any point after construction.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.host_view = None;
        self.auto_dispose = None;
        for slot in &mut self.effects {
            slot.view = None;
        }
    }

    /// Arms a one-shot guard: the first
    /// [`Dispatcher::notify_view_detached`] for `view` disposes this
    /// dispatcher.
    pub fn auto_dispose_on_detach(&mut self, view: ViewId) {
        if !self.disposed {
            self.auto_dispose = Some(view);
        }
    }

    /// Reports that `view` detached from its window.
    ///
    /// The embedding calls this with the ids a host removal reported.
    /// Disposes exactly once when the armed view is among them; any later
    /// report is a no-op because disposal disarms the guard.
    pub fn notify_view_detached(&mut self, view: ViewId) {
        if self.auto_dispose == Some(view) {
            self.dispose();
        }
    }

    fn track_insets(&mut self, insets: &InsetSnapshot, trace: &mut dyn DispatchTrace) {
        if let Some(tracker) = self.keyboard.as_mut() {
            let before = tracker.phase();
            tracker.on_insets(insets);
            let after = tracker.phase();
            if before != after {
                trace.keyboard_transition(before, after);
            }
        }
    }

    fn broadcast_animated(
        &mut self,
        host: &mut dyn ViewHost,
        mut f: impl FnMut(&mut dyn AnimatedEffect, &mut EffectCx<'_>),
    ) {
        let keyboard = self.keyboard.as_ref();
        for slot in &mut self.effects {
            if let Some(effect) = slot.node.as_animated_mut() {
                let mut cx = EffectCx::new(slot.view, &mut *host, keyboard);
                f(effect, &mut cx);
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("effects", &self.effects.len())
            .field("host_view", &self.host_view)
            .field("propagation", &self.propagation)
            .field("keyboard", &self.keyboard)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
