// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build an ordered effect list from a declarative configuration.
//!
//! There is no builder object: a chain is a plain ordered list, and
//! [`build_chain`] is a pure function from configuration to list. The
//! emission order is fixed because it is the only correct one: padding is
//! established before anything reads it as a baseline, and offset effects
//! come last so they observe the settled padding.

use alloc::vec::Vec;

use eaves_dispatch::EffectNode;

use crate::center::CenterAboveKeyboard;
use crate::overlap::{AvoidKeyboardOverlap, OffsetChannel, OverlapStrategy};
use crate::padding::{PadForSystemBars, RetractPaddingWithKeyboard};

/// Configuration for an [`AvoidKeyboardOverlap`] entry in a chain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapConfig {
    /// How much of the keyboard height to offset by.
    pub strategy: OverlapStrategy,
    /// Which presentation property carries the offset.
    pub channel: OffsetChannel,
}

/// Declarative description of an effect chain.
///
/// Each flag enables one effect; [`build_chain`] turns the whole record
/// into the ordered list a [`Dispatcher`](eaves_dispatch::Dispatcher)
/// takes at construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainConfig {
    /// Add system-bar padding once.
    pub pad_system_bars: bool,
    /// Hand the system-bar padding back while the keyboard is up.
    /// Meaningful after `pad_system_bars` established it.
    pub retract_padding_with_keyboard: bool,
    /// Offset the view clear of the keyboard.
    pub avoid_overlap: Option<OverlapConfig>,
    /// Keep the view centered above the keyboard.
    pub center_above_keyboard: bool,
}

/// Constructs the ordered effect list for `config`.
///
/// Emission order: system-bar padding, padding retraction, overlap
/// avoidance, centering. Disabled entries are simply absent; an empty
/// configuration yields an empty chain.
#[must_use]
pub fn build_chain(config: &ChainConfig) -> Vec<EffectNode> {
    let mut chain = Vec::new();
    if config.pad_system_bars {
        chain.push(EffectNode::plain(PadForSystemBars::new()));
    }
    if config.retract_padding_with_keyboard {
        chain.push(EffectNode::animated(RetractPaddingWithKeyboard::new()));
    }
    if let Some(overlap) = config.avoid_overlap {
        chain.push(EffectNode::animated(AvoidKeyboardOverlap::new(
            overlap.strategy,
            overlap.channel,
        )));
    }
    if config.center_above_keyboard {
        chain.push(EffectNode::animated(CenterAboveKeyboard::new()));
    }
    chain
}
