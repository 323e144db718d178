// SPDX-License-Identifier: MPL-2.0
//! Severity sound table and the playback seam.

use crate::alert::{AlertOptions, Severity};
use crate::error::SoundError;
use std::collections::HashMap;

/// Audio backend used to play alert sounds.
///
/// Failures are reported back so they can be logged; they never affect the
/// alert lifecycle.
pub trait SoundPlayer {
    fn play(&mut self, source: &str) -> Result<(), SoundError>;
}

/// Player that accepts every request without producing audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _source: &str) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Sounds registered per severity.
#[derive(Debug, Clone)]
pub struct SoundBank {
    sounds: HashMap<Severity, String>,
}

impl Default for SoundBank {
    fn default() -> Self {
        let sounds = [
            (
                Severity::Success,
                "https://actions.google.com/sounds/v1/cartoon/clang_and_wobble.ogg",
            ),
            (
                Severity::Error,
                "https://actions.google.com/sounds/v1/alarms/beep_short.ogg",
            ),
            (
                Severity::Warning,
                "https://actions.google.com/sounds/v1/alarms/alarm_clock.ogg",
            ),
            (
                Severity::Info,
                "https://actions.google.com/sounds/v1/cartoon/pop.ogg",
            ),
            (
                Severity::Question,
                "https://actions.google.com/sounds/v1/cartoon/slide_whistle_to_drum_hit.ogg",
            ),
            (
                Severity::Loading,
                "https://actions.google.com/sounds/v1/science_fiction/futuristic_spacecraft_takeoff.ogg",
            ),
            (
                Severity::Primary,
                "https://actions.google.com/sounds/v1/cartoon/pop.ogg",
            ),
            (
                Severity::Secondary,
                "https://actions.google.com/sounds/v1/cartoon/boing.ogg",
            ),
        ]
        .into_iter()
        .map(|(severity, source)| (severity, source.to_string()))
        .collect();
        Self { sounds }
    }
}

impl SoundBank {
    /// Registered sound for a severity.
    #[must_use]
    pub fn get(&self, severity: &Severity) -> Option<&str> {
        self.sounds.get(severity).map(String::as_str)
    }

    /// Registers or replaces sounds; keys are severity names.
    pub fn extend<I, K, V>(&mut self, sounds: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, source) in sounds {
            self.sounds
                .insert(Severity::from_key(key.as_ref()), source.into());
        }
    }

    /// Sound to play for an alert, if it asked for one.
    #[must_use]
    pub fn resolve<'a>(&'a self, options: &'a AlertOptions) -> Option<&'a str> {
        if !options.wants_sound() {
            return None;
        }
        options
            .custom_sound
            .as_deref()
            .or_else(|| self.get(&options.severity))
    }
}
