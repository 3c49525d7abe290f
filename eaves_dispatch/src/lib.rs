// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eaves_dispatch --heading-base-level=0

//! Eaves Dispatch: deterministic fan-out of window-inset events to an
//! ordered effect chain, plus the derived keyboard state machine.
//!
//! ## Overview
//!
//! A windowing host delivers two intertwined event streams: inset
//! deliveries (`on_apply_insets`) and animation lifecycle frames
//! (prepare / start / progress / end). This crate turns both into a single
//! deterministic broadcast:
//!
//! - [`Effect`] / [`AnimatedEffect`]: the behavior contracts. Instances are
//!   stateful; the contract is not. Side effects are confined to the bound
//!   view's presentation properties.
//! - [`EffectNode`]: the closed set of effect variants (plain or animated)
//!   a dispatcher can hold. Animation frames broadcast only to animated
//!   nodes.
//! - [`Dispatcher`]: owns the ordered chain, rebinds to the reporting view,
//!   aggregates child consumption, and manages disposal.
//! - [`KeyboardTracker`] / [`KeyboardPhase`]: open/closed/animating state
//!   derived from raw keyboard-inset deltas, readable by every effect
//!   through its [`EffectCx`].
//! - [`DispatchTrace`] / [`RecordingTrace`]: an additive explainability
//!   hook over the per-frame entry points.
//!
//! ## Ordering guarantee
//!
//! For a single dispatcher, the relative order of effect invocation is
//! fixed at construction and identical for every event type, and all
//! effects run before any child view is offered the insets. No guarantee
//! is made about interleaving between independent dispatchers.
//!
//! ## Lifecycle
//!
//! Disposal is the only cancellation mechanism: synchronous, idempotent,
//! and immediate. [`Dispatcher::auto_dispose_on_detach`] arms a one-shot
//! guard an embedding drives from its view-detached notifications.
//!
//! Everything here is single-threaded by design: callbacks arrive on the
//! UI thread, every dispatch is a bounded synchronous fan-out, and nothing
//! blocks, retries, or times out.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dispatcher;
mod effect;
mod keyboard;
mod trace;

pub use dispatcher::{Dispatcher, Propagation};
pub use effect::{AnimatedEffect, Effect, EffectCx, EffectNode};
pub use keyboard::{KeyboardPhase, KeyboardTracker};
pub use trace::{DispatchTrace, RecordingTrace, TraceEvent};
