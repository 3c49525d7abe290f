// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep a view centered in the space the keyboard leaves free.

use eaves_dispatch::{AnimatedEffect, Effect, EffectCx};
use eaves_insets::{InsetAnimation, InsetSnapshot};
use kurbo::Vec2;

/// Translates the view so its vertical center stays at the midpoint of the
/// region above the keyboard.
///
/// When a keyboard animation is prepared, the effect caches the view's
/// on-screen vertical center, its resting translation, and the screen
/// height. On every frame it recomputes the translation so the cached
/// center lands at `(screen height − keyboard height) / 2`. At animation
/// end it snaps to the terminal keyboard height and drops the cache, so
/// the next animation measures fresh geometry.
#[derive(Debug, Default)]
pub struct CenterAboveKeyboard {
    center: Option<f64>,
    base_translation: f64,
    screen_height: f64,
}

impl CenterAboveKeyboard {
    /// Creates the effect with nothing cached yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn recenter(&self, cx: &mut EffectCx<'_>, keyboard_height: f64) {
        let Some(view) = cx.bound_view() else { return };
        let Some(center) = self.center else { return };
        let midpoint = (self.screen_height - keyboard_height) / 2.0;
        let delta = midpoint - center;
        let translation = cx.host().translation(view);
        cx.host().set_translation(
            view,
            Vec2::new(translation.x, self.base_translation + delta),
        );
    }
}

impl Effect for CenterAboveKeyboard {
    fn on_insets(&mut self, _cx: &mut EffectCx<'_>, _insets: &InsetSnapshot) {
        // Purely animation-driven; static deliveries carry no new geometry
        // for this effect.
    }
}

impl AnimatedEffect for CenterAboveKeyboard {
    fn on_animation_prepare(&mut self, cx: &mut EffectCx<'_>, animation: &InsetAnimation) {
        if !animation.is_keyboard() {
            return;
        }
        let Some(view) = cx.bound_view() else { return };
        let Some(frame) = cx.host().frame(view) else { return };
        self.center = Some(frame.center().y);
        self.base_translation = cx.host().translation(view).y;
        self.screen_height = cx.host().screen().height;
    }

    fn on_animation_progress(
        &mut self,
        cx: &mut EffectCx<'_>,
        insets: &InsetSnapshot,
        running: &[InsetAnimation],
    ) {
        if !running.iter().any(InsetAnimation::is_keyboard) {
            return;
        }
        self.recenter(cx, insets.keyboard_height());
    }

    fn on_animation_end(&mut self, cx: &mut EffectCx<'_>, animation: &InsetAnimation) {
        if !animation.is_keyboard() {
            return;
        }
        let terminal = cx.keyboard().map_or(0.0, |k| k.last_height());
        self.recenter(cx, terminal);
        self.center = None;
    }
}
