// SPDX-License-Identifier: MPL-2.0
//! Lookup tables consulted when an alert is admitted.

mod icons;
mod sounds;

pub use icons::{Icon, IconSet};
pub use sounds::{Silent, SoundBank, SoundPlayer};
