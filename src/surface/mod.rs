// SPDX-License-Identifier: MPL-2.0
//! Presentation surface consumed by the alert lifecycle.
//!
//! The controller never draws anything itself. It asks a [`Surface`] to
//! render, animate and detach alert elements, and to show the shared
//! overlay. Interaction (hover, clicks, keys) flows the other way, as
//! [`Message`](crate::controller::Message)s routed into the controller.
//!
//! - [`headless`] - Recording surface for tests and non-visual hosts
//! - [`crate::ui::IcedSurface`] - Iced rendering of the alert stack

pub mod headless;

use crate::alert::{AlertId, AlertOptions, Position};
use crate::error::SurfaceError;
use crate::registry::Icon;
use crate::theme::Palette;
use iced::Color;

pub use headless::{HeadlessSurface, SurfaceEvent};

/// Opaque reference to a rendered alert element, issued by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Message body of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// Literal text; never interpreted as markup.
    Text(&'a str),
    /// Markup supplied by a caller that opted into `html`.
    Markup(&'a str),
}

impl<'a> Content<'a> {
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Content::Text(text) | Content::Markup(text) => text,
        }
    }
}

/// Everything a surface needs to draw one alert.
#[derive(Debug, Clone)]
pub struct RenderSpec<'a> {
    pub id: AlertId,
    pub content: Content<'a>,
    /// Resolved icon, `None` when nothing is registered for the severity.
    pub icon: Option<Icon>,
    pub options: &'a AlertOptions,
}

/// Container-wide presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStyle {
    pub position: Position,
    pub z_index: i32,
    /// Effective theme after resolving `auto` against the system.
    pub dark: bool,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub palette: Palette,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            position: Position::default(),
            z_index: crate::config::defaults::DEFAULT_Z_INDEX,
            dark: false,
            font_family: None,
            font_size: None,
            palette: Palette::default(),
        }
    }
}

/// Rendering capability driven by the controller.
pub trait Surface {
    /// Draws a new alert element and returns its handle.
    fn render(&mut self, spec: &RenderSpec<'_>) -> Result<Handle, SurfaceError>;

    /// Starts the named enter animation.
    fn play_enter(&mut self, handle: Handle, animation: &str);

    /// Starts the named exit animation.
    fn play_exit(&mut self, handle: Handle, animation: &str);

    /// Fades the element out after the exit animation's pause.
    fn fade_out(&mut self, handle: Handle);

    /// Removes the element. Called once per rendered handle.
    fn detach(&mut self, handle: Handle);

    /// Updates the progress bar to the given remaining fraction.
    fn set_progress(&mut self, _handle: Handle, _fraction: f32) {}

    /// Moves keyboard focus to the element.
    fn focus(&mut self, _handle: Handle) {}

    /// Shows the shared backdrop just below `z_index`.
    fn show_overlay(&mut self, color: Color, z_index: i32);

    /// Hides the shared backdrop.
    fn hide_overlay(&mut self);

    /// Applies container-wide settings.
    fn configure_container(&mut self, style: &ContainerStyle) -> Result<(), SurfaceError>;
}
