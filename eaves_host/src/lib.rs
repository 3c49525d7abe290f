// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eaves_host --heading-base-level=0

//! Eaves Host: the boundary between Eaves and a view hierarchy.
//!
//! ## Overview
//!
//! The dispatch layer never owns views. It addresses them through
//! [`ViewId`], a generational handle that can go stale but never aliases a
//! different live view, and manipulates them through [`ViewHost`], a
//! capability trait covering exactly what inset effects need: padding,
//! margin, translation, on-screen frame, screen metrics, child enumeration,
//! and forwarding insets to a child for consumption.
//!
//! A windowing integration implements [`ViewHost`] over its real view tree.
//! [`MemoryHost`] is the reference implementation: a slot-vector tree used
//! by the Eaves tests, benchmarks, and demos.
//!
//! ## Staleness
//!
//! Handles follow the slot + generation scheme: removing a view frees its
//! slot, and reusing the slot bumps the generation, so a handle held across
//! a removal simply stops matching. Every [`ViewHost`] operation treats a
//! stale or dead handle as an absent view: getters report zero values
//! ([`ViewHost::frame`] reports `None`) and setters do nothing. This is what
//! lets an inset effect that outlives its view degrade to a silent no-op
//! instead of an error.
//!
//! ## Minimal example
//!
//! ```
//! use eaves_host::{MemoryHost, ViewHost, ViewProps};
//! use kurbo::{Insets, Rect, Size};
//!
//! let mut host = MemoryHost::new(Size::new(1080.0, 1920.0));
//! let root = host.insert(None, ViewProps::default());
//! let child = host.insert(
//!     Some(root),
//!     ViewProps {
//!         frame: Rect::new(0.0, 1700.0, 1080.0, 1820.0),
//!         ..ViewProps::default()
//!     },
//! );
//!
//! host.set_padding(child, Insets::uniform(8.0));
//! assert_eq!(host.padding(child), Insets::uniform(8.0));
//!
//! // Removal reports the whole detached subtree and staleness takes over.
//! let detached = host.remove(root);
//! assert_eq!(detached, vec![root, child]);
//! assert!(!host.is_alive(child));
//! assert_eq!(host.padding(child), Insets::ZERO);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::MemoryHost;
pub use types::{ViewHost, ViewId, ViewProps};
