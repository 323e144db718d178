// SPDX-License-Identifier: MPL-2.0
//! Recording surface without any visual output.
//!
//! Useful for tests, benchmarks and hosts that only care about lifecycle
//! events. Every call is appended to an event log that can be inspected.

use super::{ContainerStyle, Handle, RenderSpec, Surface};
use crate::alert::AlertId;
use crate::error::SurfaceError;
use iced::Color;
use std::collections::HashMap;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Rendered { handle: Handle, id: AlertId, text: String, markup: bool },
    Enter { handle: Handle, animation: String },
    Exit { handle: Handle, animation: String },
    FadeOut(Handle),
    Detached(Handle),
    Focused(Handle),
    OverlayShown { z_index: i32 },
    OverlayHidden,
    Configured(ContainerStyle),
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    events: Vec<SurfaceEvent>,
    attached: HashMap<Handle, AlertId>,
    progress: HashMap<Handle, f32>,
    overlay: Option<Color>,
    container: Option<ContainerStyle>,
    container_missing: bool,
    reject_reason: Option<String>,
    next_handle: u64,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates an unmounted container: renders and container updates fail.
    pub fn set_container_missing(&mut self, missing: bool) {
        self.container_missing = missing;
    }

    /// Makes every render fail with [`SurfaceError::Rejected`] until reset
    /// with `None`.
    pub fn set_rejecting(&mut self, reason: Option<&str>) {
        self.reject_reason = reason.map(str::to_string);
    }

    /// Every call recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Drops the recorded log.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Number of elements currently attached.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Returns the handle rendered for an alert, if still attached.
    #[must_use]
    pub fn handle_of(&self, id: AlertId) -> Option<Handle> {
        self.attached
            .iter()
            .find_map(|(handle, attached)| (*attached == id).then_some(*handle))
    }

    /// Last progress fraction reported for an element.
    #[must_use]
    pub fn progress(&self, handle: Handle) -> Option<f32> {
        self.progress.get(&handle).copied()
    }

    /// Returns whether the overlay is visible.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }

    /// Last applied container settings.
    #[must_use]
    pub fn container(&self) -> Option<&ContainerStyle> {
        self.container.as_ref()
    }

    /// Number of times the given event was recorded.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&SurfaceEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl Surface for HeadlessSurface {
    fn render(&mut self, spec: &RenderSpec<'_>) -> Result<Handle, SurfaceError> {
        if self.container_missing {
            return Err(SurfaceError::MissingContainer);
        }
        if let Some(reason) = &self.reject_reason {
            return Err(SurfaceError::Rejected(reason.clone()));
        }
        self.next_handle += 1;
        let handle = Handle::new(self.next_handle);
        self.attached.insert(handle, spec.id);
        self.events.push(SurfaceEvent::Rendered {
            handle,
            id: spec.id,
            text: spec.content.as_str().to_string(),
            markup: matches!(spec.content, super::Content::Markup(_)),
        });
        Ok(handle)
    }

    fn play_enter(&mut self, handle: Handle, animation: &str) {
        self.events.push(SurfaceEvent::Enter {
            handle,
            animation: animation.to_string(),
        });
    }

    fn play_exit(&mut self, handle: Handle, animation: &str) {
        self.events.push(SurfaceEvent::Exit {
            handle,
            animation: animation.to_string(),
        });
    }

    fn fade_out(&mut self, handle: Handle) {
        self.events.push(SurfaceEvent::FadeOut(handle));
    }

    fn detach(&mut self, handle: Handle) {
        self.attached.remove(&handle);
        self.progress.remove(&handle);
        self.events.push(SurfaceEvent::Detached(handle));
    }

    fn set_progress(&mut self, handle: Handle, fraction: f32) {
        self.progress.insert(handle, fraction);
    }

    fn focus(&mut self, handle: Handle) {
        self.events.push(SurfaceEvent::Focused(handle));
    }

    fn show_overlay(&mut self, color: Color, z_index: i32) {
        self.overlay = Some(color);
        self.events.push(SurfaceEvent::OverlayShown { z_index });
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
        self.events.push(SurfaceEvent::OverlayHidden);
    }

    fn configure_container(&mut self, style: &ContainerStyle) -> Result<(), SurfaceError> {
        if self.container_missing {
            return Err(SurfaceError::MissingContainer);
        }
        self.container = Some(style.clone());
        self.events.push(SurfaceEvent::Configured(style.clone()));
        Ok(())
    }
}
