// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eaves_insets --heading-base-level=0

//! Eaves Insets: the window-inset vocabulary shared by the Eaves crates.
//!
//! ## Overview
//!
//! A window *inset* is a per-edge pixel offset reserved by a system UI
//! element (status bar, navigation bar, on-screen keyboard) that content
//! should avoid overlapping. This crate defines the data that flows between
//! a windowing host and the Eaves dispatch layer:
//!
//! - [`InsetKind`]: a bitmask of inset categories, with built-in constants
//!   for the system bars and the keyboard (IME).
//! - [`InsetSnapshot`]: one delivery's worth of insets, per category, plus
//!   the "fully consumed" sentinel used by the child-consumption protocol.
//! - [`InsetAnimation`] and [`AnimationBounds`]: descriptors for the
//!   animation-lifecycle callbacks that accompany inset changes.
//!
//! All magnitudes are device pixels, carried as [`kurbo::Insets`].
//!
//! ## Minimal example
//!
//! ```
//! use eaves_insets::{InsetKind, InsetSnapshot};
//! use kurbo::Insets;
//!
//! // A status bar of 24px and a 300px keyboard.
//! let snapshot = InsetSnapshot::new()
//!     .with(InsetKind::STATUS_BARS, Insets::new(0.0, 24.0, 0.0, 0.0))
//!     .with(InsetKind::IME, Insets::new(0.0, 0.0, 0.0, 300.0));
//!
//! assert_eq!(snapshot.insets_of(InsetKind::STATUS_BARS).y0, 24.0);
//! assert_eq!(snapshot.keyboard_height(), 300.0);
//!
//! // Querying a union mask takes the component-wise maximum.
//! let all = snapshot.insets_of(InsetKind::SYSTEM_BARS | InsetKind::IME);
//! assert_eq!(all.y0, 24.0);
//! assert_eq!(all.y1, 300.0);
//!
//! // The consumed sentinel reports no insets at all.
//! assert!(InsetSnapshot::CONSUMED.is_consumed());
//! assert_eq!(InsetSnapshot::CONSUMED.insets_of(InsetKind::IME), Insets::ZERO);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod kinds;
mod snapshot;

pub use animation::{AnimationBounds, InsetAnimation};
pub use kinds::InsetKind;
pub use snapshot::InsetSnapshot;
