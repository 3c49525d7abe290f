// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect contracts: the unit of inset-driven behavior.
//!
//! An *effect* is an independent, composable unit of view mutation driven by
//! inset and animation events. Effects are stateless as a contract and
//! stateful as instances: each instance may capture baselines (an applied
//! flag, an initial padding) but must never mutate dispatcher or
//! sibling-effect state. The only side effects permitted are writes to the
//! bound view's presentation properties through [`EffectCx`].
//!
//! ## Tolerances
//!
//! The dispatcher guarantees nothing about event pairing, so every effect
//! must tolerate:
//!
//! - [`Effect::on_insets`] with no preceding bind (the first delivery is
//!   what establishes the bound view),
//! - [`AnimatedEffect::on_animation_end`] without a matching start
//!   (disposal mid-animation, or host quirks),
//! - a missing bound view at any point after detach, which must be a silent
//!   no-op, never a failure.

use alloc::boxed::Box;
use core::fmt;

use eaves_host::{ViewHost, ViewId};
use eaves_insets::{AnimationBounds, InsetAnimation, InsetSnapshot};

use crate::keyboard::KeyboardTracker;

/// Per-invocation context handed to an effect.
///
/// Carries the effect's bound view (if any), mutable access to the host
/// tree, and a read-only view of the owning dispatcher's keyboard tracker.
/// Effects read derived keyboard state through the context; they never hold
/// a reference back to the dispatcher.
///
/// Embedders normally never build one of these (the dispatcher does), but
/// the constructor is public so custom effects can be exercised directly in
/// tests.
pub struct EffectCx<'a> {
    view: Option<ViewId>,
    host: &'a mut dyn ViewHost,
    keyboard: Option<&'a KeyboardTracker>,
}

impl<'a> EffectCx<'a> {
    /// Creates a context for one effect invocation.
    pub fn new(
        view: Option<ViewId>,
        host: &'a mut dyn ViewHost,
        keyboard: Option<&'a KeyboardTracker>,
    ) -> Self {
        Self {
            view,
            host,
            keyboard,
        }
    }

    /// The effect's bound view, unvalidated.
    ///
    /// `None` before the first inset delivery and after detach.
    #[inline]
    #[must_use]
    pub fn view(&self) -> Option<ViewId> {
        self.view
    }

    /// The bound view, filtered for liveness.
    ///
    /// This is the guard most effects start with: it is `None` when the
    /// effect was never bound, was detached, or holds a stale handle.
    #[must_use]
    pub fn bound_view(&self) -> Option<ViewId> {
        self.view.filter(|&view| self.host.is_alive(view))
    }

    /// Mutable access to the host tree.
    #[inline]
    pub fn host(&mut self) -> &mut dyn ViewHost {
        &mut *self.host
    }

    /// The owning dispatcher's keyboard tracker, when it has one.
    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> Option<&KeyboardTracker> {
        self.keyboard
    }
}

impl fmt::Debug for EffectCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectCx")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

/// A unit of behavior reacting to inset deliveries.
pub trait Effect {
    /// Called once per inset delivery, in registration order.
    fn on_insets(&mut self, cx: &mut EffectCx<'_>, insets: &InsetSnapshot);
}

/// An [`Effect`] that additionally reacts to animation lifecycle frames.
///
/// All lifecycle methods default to no-ops, so an animated effect only
/// implements the frames it cares about.
pub trait AnimatedEffect: Effect {
    /// An inset animation is about to run; insets still report the
    /// pre-animation state.
    fn on_animation_prepare(&mut self, cx: &mut EffectCx<'_>, animation: &InsetAnimation) {
        let _ = (cx, animation);
    }

    /// The animation's range is known; the bounds are observed, never
    /// altered.
    fn on_animation_start(
        &mut self,
        cx: &mut EffectCx<'_>,
        animation: &InsetAnimation,
        bounds: &AnimationBounds,
    ) {
        let _ = (cx, animation, bounds);
    }

    /// One animation frame: the current insets and every running animation.
    fn on_animation_progress(
        &mut self,
        cx: &mut EffectCx<'_>,
        insets: &InsetSnapshot,
        running: &[InsetAnimation],
    ) {
        let _ = (cx, insets, running);
    }

    /// The animation finished (or was abandoned).
    fn on_animation_end(&mut self, cx: &mut EffectCx<'_>, animation: &InsetAnimation) {
        let _ = (cx, animation);
    }
}

/// The closed set of effect variants a dispatcher can hold.
///
/// There are exactly two capabilities: plain effects see inset deliveries
/// only; animated effects additionally see animation lifecycle frames. The
/// dispatcher broadcasts animation events only to the `Animated` variant.
pub enum EffectNode {
    /// Reacts to inset deliveries only.
    Plain(Box<dyn Effect>),
    /// Reacts to inset deliveries and animation lifecycle frames.
    Animated(Box<dyn AnimatedEffect>),
}

impl EffectNode {
    /// Wraps a plain effect.
    #[must_use]
    pub fn plain(effect: impl Effect + 'static) -> Self {
        Self::Plain(Box::new(effect))
    }

    /// Wraps an animated effect.
    #[must_use]
    pub fn animated(effect: impl AnimatedEffect + 'static) -> Self {
        Self::Animated(Box::new(effect))
    }

    /// Returns `true` for the `Animated` variant.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }

    pub(crate) fn as_effect_mut(&mut self) -> &mut dyn Effect {
        match self {
            Self::Plain(effect) => &mut **effect,
            Self::Animated(effect) => &mut **effect,
        }
    }

    pub(crate) fn as_animated_mut(&mut self) -> Option<&mut dyn AnimatedEffect> {
        match self {
            Self::Plain(_) => None,
            Self::Animated(effect) => Some(&mut **effect),
        }
    }
}

impl fmt::Debug for EffectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("EffectNode::Plain(..)"),
            Self::Animated(_) => f.write_str("EffectNode::Animated(..)"),
        }
    }
}
