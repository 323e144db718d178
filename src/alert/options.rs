// SPDX-License-Identifier: MPL-2.0
//! Alert options and per-call overrides.
//!
//! [`AlertOptions`] is the fully resolved configuration of one alert.
//! Callers describe only what they want to change with [`Overrides`], which
//! is merged shallowly over the controller defaults: a set field replaces
//! the default wholesale (the buttons list is never merged element-wise).

use super::button::Button;
use super::callback::Callback;
use super::instance::AlertId;
use super::severity::{Position, Severity};
use crate::config::defaults::{
    DEFAULT_ANIMATION_IN, DEFAULT_ANIMATION_OUT, DEFAULT_OVERLAY_ALPHA, DEFAULT_TIMEOUT_MS,
    DEFAULT_Z_INDEX,
};
use iced::Color;
use std::time::Duration;

/// Resolved configuration of a single alert.
#[derive(Debug, Clone)]
pub struct AlertOptions {
    pub position: Position,
    /// Auto-dismiss delay. Zero disables auto-dismiss.
    pub timeout: Duration,
    pub severity: Severity,
    pub icon: Option<String>,
    /// Takes precedence over `icon` and the registered severity icon.
    pub custom_icon: Option<String>,
    pub close_button: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub progress_bar: bool,
    pub sound: bool,
    /// Takes precedence over the registered severity sound.
    pub custom_sound: Option<String>,
    /// When false the message is rendered as literal text.
    pub html: bool,
    pub animation_in: String,
    pub animation_out: String,
    pub on_click: Option<Callback<AlertId>>,
    pub on_close: Option<Callback>,
    pub on_show: Option<Callback<AlertId>>,
    pub on_timeout: Option<Callback>,
    pub rtl: bool,
    /// Extra style class handed to the surface.
    pub class: Option<String>,
    pub queue: bool,
    pub z_index: i32,
    pub overlay: bool,
    pub overlay_close: bool,
    pub overlay_color: Color,
    pub buttons: Vec<Button>,
    pub focus: bool,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            position: Position::default(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            severity: Severity::default(),
            icon: None,
            custom_icon: None,
            close_button: true,
            pause_on_hover: true,
            draggable: false,
            progress_bar: true,
            sound: false,
            custom_sound: None,
            html: false,
            animation_in: DEFAULT_ANIMATION_IN.to_string(),
            animation_out: DEFAULT_ANIMATION_OUT.to_string(),
            on_click: None,
            on_close: None,
            on_show: None,
            on_timeout: None,
            rtl: false,
            class: None,
            queue: true,
            z_index: DEFAULT_Z_INDEX,
            overlay: false,
            overlay_close: false,
            overlay_color: Color {
                a: DEFAULT_OVERLAY_ALPHA,
                ..Color::BLACK
            },
            buttons: Vec::new(),
            focus: true,
            font_family: None,
            font_size: None,
        }
    }
}

impl AlertOptions {
    /// Returns whether the alert dismisses itself after its timeout.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.timeout.is_zero()
    }

    /// Returns whether a sound should play when the alert is shown.
    #[must_use]
    pub fn wants_sound(&self) -> bool {
        self.sound || self.custom_sound.is_some()
    }
}

/// Generates the override struct, its builder setters and the shallow merge.
///
/// `value` fields replace the default as-is; `optional` fields fill an
/// `Option` on the resolved options. `callback` fields only take part in
/// the merge, their setters are written by hand below.
macro_rules! overrides {
    (
        value { $( $(#[$vdoc:meta])* $vfield:ident : $vty:ty ),* $(,)? }
        optional { $( $(#[$odoc:meta])* $ofield:ident : $oty:ty ),* $(,)? }
        callback { $( $cfield:ident : $cty:ty ),* $(,)? }
    ) => {
        /// Caller-supplied fields merged over the controller defaults.
        #[derive(Debug, Clone, Default)]
        pub struct Overrides {
            $( $vfield: Option<$vty>, )*
            $( $ofield: Option<$oty>, )*
            $( $cfield: Option<Callback<$cty>>, )*
        }

        impl Overrides {
            $(
                $(#[$vdoc])*
                #[must_use]
                pub fn $vfield(mut self, value: impl Into<$vty>) -> Self {
                    self.$vfield = Some(value.into());
                    self
                }
            )*

            $(
                $(#[$odoc])*
                #[must_use]
                pub fn $ofield(mut self, value: impl Into<$oty>) -> Self {
                    self.$ofield = Some(value.into());
                    self
                }
            )*

            /// Merges these overrides over `defaults`.
            #[must_use]
            pub fn resolve(self, defaults: &AlertOptions) -> AlertOptions {
                let mut options = defaults.clone();
                $( if let Some(value) = self.$vfield { options.$vfield = value; } )*
                $( if let Some(value) = self.$ofield { options.$ofield = Some(value); } )*
                $( if let Some(callback) = self.$cfield { options.$cfield = Some(callback); } )*
                options
            }
        }
    };
}

overrides! {
    value {
        position: Position,
        /// Auto-dismiss delay; `Duration::ZERO` keeps the alert until closed.
        timeout: Duration,
        severity: Severity,
        close_button: bool,
        pause_on_hover: bool,
        draggable: bool,
        progress_bar: bool,
        sound: bool,
        /// Render the message as markup instead of literal text.
        html: bool,
        animation_in: String,
        animation_out: String,
        rtl: bool,
        /// Serialize this alert behind the alert currently holding the queue.
        queue: bool,
        z_index: i32,
        /// Show the shared dimmed backdrop while this alert is visible.
        overlay: bool,
        /// Dismiss this alert when the backdrop is clicked.
        overlay_close: bool,
        overlay_color: Color,
        buttons: Vec<Button>,
        focus: bool,
    }
    optional {
        icon: String,
        custom_icon: String,
        custom_sound: String,
        class: String,
        font_family: String,
        font_size: f32,
    }
    callback {
        on_click: AlertId,
        on_show: AlertId,
        on_close: (),
        on_timeout: (),
    }
}

impl Overrides {
    /// Creates empty overrides (every field falls back to the defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-dismiss delay in milliseconds.
    #[must_use]
    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    /// Appends a single action button.
    #[must_use]
    pub fn button(mut self, button: Button) -> Self {
        self.buttons.get_or_insert_with(Vec::new).push(button);
        self
    }

    /// Invoked for clicks on the alert body (not the close button or buttons).
    #[must_use]
    pub fn on_click(mut self, callback: impl Fn(AlertId) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Callback::new(callback));
        self
    }

    /// Invoked right after the alert is rendered.
    #[must_use]
    pub fn on_show(mut self, callback: impl Fn(AlertId) + Send + Sync + 'static) -> Self {
        self.on_show = Some(Callback::new(callback));
        self
    }

    /// Invoked after the alert is removed through a manual dismissal path.
    #[must_use]
    pub fn on_close(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Callback::new(move |()| callback()));
        self
    }

    /// Invoked after the alert is removed because its countdown expired.
    #[must_use]
    pub fn on_timeout(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_timeout = Some(Callback::new(move |()| callback()));
        self
    }
}
