// SPDX-License-Identifier: MPL-2.0
//! Shared dimmed backdrop.
//!
//! The backdrop is reference counted: it appears with the first alert that
//! asks for it and disappears when the last of those alerts releases it.

use crate::surface::Surface;
use iced::Color;

#[derive(Debug, Default)]
pub(crate) struct Overlay {
    holders: usize,
}

impl Overlay {
    /// Registers one more holder, showing the backdrop for the first one.
    pub(crate) fn acquire<S: Surface>(&mut self, surface: &mut S, color: Color, z_index: i32) {
        if self.holders == 0 {
            surface.show_overlay(color, z_index.saturating_sub(1));
        }
        self.holders += 1;
    }

    /// Drops one holder, hiding the backdrop after the last one. Releasing
    /// an absent overlay is a no-op.
    pub(crate) fn release<S: Surface>(&mut self, surface: &mut S) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            surface.hide_overlay();
        }
    }

    /// Tears the backdrop down regardless of holders.
    pub(crate) fn reset<S: Surface>(&mut self, surface: &mut S) {
        if self.holders > 0 {
            self.holders = 0;
            surface.hide_overlay();
        }
    }

    pub(crate) fn is_shown(&self) -> bool {
        self.holders > 0
    }
}
