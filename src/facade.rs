// SPDX-License-Identifier: MPL-2.0
//! High-level entry points for showing alerts.
//!
//! [`Alerts`] owns one [`Controller`] and reads the wall clock on behalf of
//! the host. Severity methods are shorthands for [`Alerts::show`] with the
//! severity set; global controls return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```no_run
//! use iced_alerts::{Alerts, HeadlessSurface, Overrides};
//!
//! let mut alerts = Alerts::new(HeadlessSurface::new());
//! alerts.set_theme_mode("dark").set_font("Inter", Some(14.0));
//!
//! let _done = alerts.success("Saved", Overrides::new());
//! let _spinner = alerts.loading("Uploading…", Overrides::new());
//! ```

use crate::alert::{Completion, Overrides, Severity};
use crate::config::Config;
use crate::controller::{Controller, Message};
use crate::registry::SoundPlayer;
use crate::surface::Surface;
use crate::theme::{ThemeMode, ThemeUpdate};
use std::time::{Duration, Instant};

/// Alert front end bound to one surface.
pub struct Alerts<S: Surface> {
    controller: Controller<S>,
    theme_mode: ThemeMode,
}

impl<S: Surface> Alerts<S> {
    /// Creates the facade with library defaults.
    pub fn new(surface: S) -> Self {
        Self::from_config(surface, &Config::default())
    }

    /// Creates the facade with defaults taken from a loaded [`Config`].
    pub fn from_config(surface: S, config: &Config) -> Self {
        let controller = Controller::new(surface)
            .with_defaults(config.alert_options())
            .with_timing(config.animation_timing());
        let mut alerts = Self {
            controller,
            theme_mode: config.theme_mode(),
        };

        let dark = alerts.theme_mode.is_dark();
        let font_family = config.font_family.clone();
        let font_size = config.font_size;
        alerts.controller.update_container(|container| {
            container.dark = dark;
            container.font_family = font_family;
            container.font_size = font_size;
        });
        alerts
    }

    /// Plays alert sounds through `player`.
    #[must_use]
    pub fn with_sound_player(mut self, player: impl SoundPlayer + 'static) -> Self {
        self.controller = self.controller.with_sound_player(player);
        self
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<S> {
        &mut self.controller
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Shows an alert with the given overrides.
    pub fn show(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.controller.submit(message, overrides, Instant::now())
    }

    pub fn primary(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Primary))
    }

    pub fn secondary(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Secondary))
    }

    pub fn success(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Success))
    }

    pub fn error(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Error))
    }

    pub fn warning(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Warning))
    }

    pub fn info(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Info))
    }

    pub fn question(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(message, overrides.severity(Severity::Question))
    }

    /// Shows a loading alert. It never times out; the completion resolves
    /// with [`Outcome::Presented`](crate::alert::Outcome::Presented) once shown.
    pub fn loading(&mut self, message: impl Into<String>, overrides: Overrides) -> Completion {
        self.show(
            message,
            overrides.severity(Severity::Loading).timeout(Duration::ZERO),
        )
    }

    /// Removes every alert and drops everything queued.
    pub fn clear(&mut self) -> &mut Self {
        self.controller.clear_all(Instant::now());
        self
    }

    /// Sets the theme mode from `"auto"`, `"light"` or `"dark"`. Any other
    /// value is ignored and the current mode kept.
    pub fn set_theme_mode(&mut self, mode: &str) -> &mut Self {
        match mode.parse::<ThemeMode>() {
            Ok(mode) => {
                self.theme_mode = mode;
                let dark = mode.is_dark();
                self.controller
                    .update_container(|container| container.dark = dark);
            }
            Err(err) => tracing::debug!(%err, "theme mode unchanged"),
        }
        self
    }

    /// Recolors the primary accent, or the accents named in a map.
    pub fn apply_theme(&mut self, update: impl Into<ThemeUpdate>) -> &mut Self {
        let update = update.into();
        self.controller
            .update_container(|container| container.palette.apply(update));
        self
    }

    /// Registers icons by severity name.
    pub fn set_icons<I, K, V>(&mut self, icons: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.controller.icons_mut().extend(icons);
        self
    }

    /// Registers sounds by severity name.
    pub fn set_sounds<I, K, V>(&mut self, sounds: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.controller.sounds_mut().extend(sounds);
        self
    }

    /// Sets the container font; `size` is left unchanged when `None`.
    pub fn set_font(&mut self, family: impl Into<String>, size: Option<f32>) -> &mut Self {
        let family = family.into();
        self.controller.update_container(|container| {
            container.font_family = Some(family);
            if size.is_some() {
                container.font_size = size;
            }
        });
        self
    }

    /// Feeds an alert message to the controller.
    pub fn update(&mut self, message: &Message) {
        self.controller.handle_message(message, Instant::now());
    }
}
