// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eaves_effects --heading-base-level=0

//! Eaves Effects: ready-made inset effects and the chain constructor.
//!
//! ## Overview
//!
//! Four effects cover the common keyboard/system-bar reactions:
//!
//! - [`PadForSystemBars`]: additive system-bar padding, applied exactly
//!   once.
//! - [`RetractPaddingWithKeyboard`]: proportionally removes the system-bar
//!   portion of that padding while the keyboard is on screen.
//! - [`AvoidKeyboardOverlap`]: offsets the view clear of the keyboard,
//!   through padding, margin, or translation.
//! - [`CenterAboveKeyboard`]: keeps the view centered in the region above
//!   the keyboard.
//!
//! [`build_chain`] assembles them from a [`ChainConfig`] in the one order
//! that is correct: padding is established before anything reads it as a
//! baseline.
//!
//! ## Assembling a dispatcher
//!
//! ```
//! use eaves_dispatch::Dispatcher;
//! use eaves_effects::{build_chain, ChainConfig};
//!
//! let config = ChainConfig {
//!     pad_system_bars: true,
//!     retract_padding_with_keyboard: true,
//!     ..ChainConfig::default()
//! };
//! let dispatcher = Dispatcher::new(build_chain(&config)).with_keyboard_tracking();
//! assert_eq!(dispatcher.effect_count(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod center;
mod chain;
mod overlap;
mod padding;
mod util;

pub use center::CenterAboveKeyboard;
pub use chain::{build_chain, ChainConfig, OverlapConfig};
pub use overlap::{AvoidKeyboardOverlap, OffsetChannel, OverlapStrategy};
pub use padding::{PadForSystemBars, RetractPaddingWithKeyboard};
