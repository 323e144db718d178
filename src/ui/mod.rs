// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the alert stack.
//!
//! [`IcedSurface`] implements [`Surface`] by keeping the render state of
//! every toast; [`view`] draws it and [`subscription`] feeds frame ticks and
//! raw input back into the controller, following the Elm-style
//! "state down, messages up" pattern.
//!
//! A host embeds the alert layer by stacking [`view`] over its own content,
//! mapping [`Message`] into its message type and forwarding it to [`update`].
//!
//! - [`toast`] - Toast widget and styles
//! - [`drag`] - Drag state for draggable toasts
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod drag;
pub mod toast;

use crate::alert::{AlertId, ClickTarget};
use crate::config::defaults::DEFAULT_TICK_INTERVAL_MS;
use crate::controller;
use crate::error::SurfaceError;
use crate::facade::Alerts;
use crate::surface::{ContainerStyle, Handle, RenderSpec, Surface};
use drag::DragState;
use iced::{event, keyboard, mouse, time, Color, Element, Point, Subscription};
use std::time::Duration;
use toast::{Toast, ToastState};

/// Messages produced by the alert layer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Lifecycle message for the controller.
    Alert(controller::Message),
    /// Mouse pressed on a draggable toast.
    DragStarted(AlertId),
    CursorMoved(Point),
    /// Left mouse button released anywhere.
    DragEnded,
    /// Key pressed; routed to the focused toast.
    KeyPressed(keyboard::Key),
}

/// Surface drawing alerts with iced widgets.
#[derive(Debug, Default)]
pub struct IcedSurface {
    toasts: Vec<ToastState>,
    backdrop: Option<Color>,
    style: ContainerStyle,
    focused: Option<AlertId>,
    cursor: Option<Point>,
    drag: DragState,
    next_handle: u64,
}

impl IcedSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts in stacking order.
    pub fn toasts(&self) -> &[ToastState] {
        &self.toasts
    }

    #[must_use]
    pub fn focused(&self) -> Option<AlertId> {
        self.focused
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Renders the alert layer.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(&self.toasts, &self.style, self.backdrop)
    }

    /// Starts dragging a draggable toast from the last known cursor position.
    pub fn start_drag(&mut self, id: AlertId) {
        let Some(position) = self.cursor else {
            return;
        };
        if let Some(toast) = self.toasts.iter().find(|t| t.id == id && t.draggable) {
            self.drag.start(id, position, toast.offset);
        }
    }

    /// Tracks the cursor and moves the dragged toast with it.
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
        if let Some((id, offset)) = self.drag.drag_to(position) {
            if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                toast.offset = offset;
            }
        }
    }

    pub fn stop_drag(&mut self) {
        self.drag.stop();
    }

    fn toast_mut(&mut self, handle: Handle) -> Option<&mut ToastState> {
        self.toasts.iter_mut().find(|t| t.handle == handle)
    }
}

impl Surface for IcedSurface {
    fn render(&mut self, spec: &RenderSpec<'_>) -> Result<Handle, SurfaceError> {
        self.next_handle += 1;
        let handle = Handle::new(self.next_handle);
        self.toasts.push(ToastState::new(handle, spec));
        Ok(handle)
    }

    // Enter animations are not drawn; the toast appears at full opacity.
    fn play_enter(&mut self, _handle: Handle, _animation: &str) {}

    fn play_exit(&mut self, handle: Handle, _animation: &str) {
        if let Some(toast) = self.toast_mut(handle) {
            toast.leaving = true;
        }
    }

    fn fade_out(&mut self, handle: Handle) {
        if let Some(toast) = self.toast_mut(handle) {
            toast.fading = true;
        }
    }

    fn detach(&mut self, handle: Handle) {
        let Some(pos) = self.toasts.iter().position(|t| t.handle == handle) else {
            return;
        };
        let toast = self.toasts.remove(pos);
        if self.focused == Some(toast.id) {
            self.focused = None;
        }
        if self.drag.target == Some(toast.id) {
            self.drag.stop();
        }
    }

    fn set_progress(&mut self, handle: Handle, fraction: f32) {
        if let Some(toast) = self.toast_mut(handle) {
            if toast.progress.is_some() {
                toast.progress = Some(fraction.clamp(0.0, 1.0));
            }
        }
    }

    fn focus(&mut self, handle: Handle) {
        if let Some(id) = self.toasts.iter().find(|t| t.handle == handle).map(|t| t.id) {
            self.focused = Some(id);
        }
    }

    fn show_overlay(&mut self, color: Color, _z_index: i32) {
        self.backdrop = Some(color);
    }

    fn hide_overlay(&mut self) {
        self.backdrop = None;
    }

    fn configure_container(&mut self, style: &ContainerStyle) -> Result<(), SurfaceError> {
        self.style = style.clone();
        Ok(())
    }
}

/// Applies an alert layer message.
pub fn update(alerts: &mut Alerts<IcedSurface>, message: Message) {
    match message {
        // Releasing a moved toast ends the drag; it is not a body click
        Message::Alert(controller::Message::Click(id, ClickTarget::Body))
            if alerts.controller().surface().drag.release_ends_move(id) => {}
        Message::Alert(message) => alerts.update(&message),
        Message::DragStarted(id) => alerts.controller_mut().surface_mut().start_drag(id),
        Message::CursorMoved(position) => {
            alerts.controller_mut().surface_mut().cursor_moved(position);
        }
        Message::DragEnded => alerts.controller_mut().surface_mut().stop_drag(),
        Message::KeyPressed(key) => {
            if let Some(id) = alerts.controller().surface().focused() {
                alerts.update(&controller::Message::KeyPressed(id, key));
            }
        }
    }
}

/// Renders the alert layer of `alerts`.
pub fn view(alerts: &Alerts<IcedSurface>) -> Element<'_, Message> {
    alerts.controller().surface().view()
}

/// Frame ticks and input events, active only while alerts exist.
pub fn subscription(alerts: &Alerts<IcedSurface>) -> Subscription<Message> {
    if !alerts.controller().has_alerts() {
        return Subscription::none();
    }

    Subscription::batch([
        time::every(Duration::from_millis(DEFAULT_TICK_INTERVAL_MS))
            .map(|at| Message::Alert(controller::Message::Tick(at))),
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::DragEnded)
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(Message::KeyPressed(key))
            }
            _ => None,
        }),
    ])
}
