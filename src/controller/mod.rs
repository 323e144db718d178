// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `Controller` admits alert requests, serializes the ones that ask for
//! queuing, drives every admitted [`AlertInstance`] through its phases and
//! releases the next queued request whenever the queue holder resolves.
//!
//! All state is owned by the controller; independent controllers can coexist.
//! Time is passed in explicitly so hosts (and tests) control the clock.

mod overlay;

use crate::alert::completion::{self, Resolver};
use crate::alert::instance::Step;
use crate::alert::{
    AlertId, AlertInstance, AlertOptions, AnimationTiming, ClickTarget, Completion,
    DismissReason, Outcome, Overrides, Phase,
};
use crate::registry::{IconSet, Silent, SoundBank, SoundPlayer};
use crate::surface::{Content, ContainerStyle, RenderSpec, Surface};
use iced::keyboard::Key;
use overlay::Overlay;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Messages for alert state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick advancing animations and countdowns.
    Tick(Instant),
    /// Pointer entered an alert.
    HoverEnter(AlertId),
    /// Pointer left an alert.
    HoverLeave(AlertId),
    /// An alert was clicked.
    Click(AlertId, ClickTarget),
    /// A key was pressed while an alert had focus.
    KeyPressed(AlertId, Key),
    /// The shared overlay was clicked.
    OverlayClicked,
    /// Dismiss a specific alert by ID.
    Dismiss(AlertId),
}

/// A request waiting for admission.
struct AlertRequest {
    message: String,
    options: AlertOptions,
    resolver: Resolver,
}

/// Owns the queue, the live alerts and the overlay.
pub struct Controller<S: Surface> {
    surface: S,
    defaults: AlertOptions,
    timing: AnimationTiming,
    icons: IconSet,
    sounds: SoundBank,
    player: Box<dyn SoundPlayer>,
    container: ContainerStyle,
    /// Admitted alerts that have not reached `Removed`, oldest first.
    instances: Vec<AlertInstance>,
    /// Queued requests waiting for the slot.
    queue: VecDeque<AlertRequest>,
    /// Alert currently holding the serialized slot.
    slot: Option<AlertId>,
    overlay: Overlay,
}

impl<S: Surface> Controller<S> {
    /// Creates a controller drawing on `surface` with default options.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            defaults: AlertOptions::default(),
            timing: AnimationTiming::default(),
            icons: IconSet::default(),
            sounds: SoundBank::default(),
            player: Box::new(Silent),
            container: ContainerStyle::default(),
            instances: Vec::new(),
            queue: VecDeque::new(),
            slot: None,
            overlay: Overlay::default(),
        }
    }

    /// Replaces the defaults that overrides are merged over.
    #[must_use]
    pub fn with_defaults(mut self, defaults: AlertOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replaces the enter/exit animation windows.
    #[must_use]
    pub fn with_timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Plays alert sounds through `player`.
    #[must_use]
    pub fn with_sound_player(mut self, player: impl SoundPlayer + 'static) -> Self {
        self.player = Box::new(player);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn defaults(&self) -> &AlertOptions {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut AlertOptions {
        &mut self.defaults
    }

    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    pub fn icons_mut(&mut self) -> &mut IconSet {
        &mut self.icons
    }

    pub fn sounds_mut(&mut self) -> &mut SoundBank {
        &mut self.sounds
    }

    pub fn container(&self) -> &ContainerStyle {
        &self.container
    }

    /// Edits the container settings and pushes them to the surface. Skipped
    /// silently when the surface has no container.
    pub fn update_container(&mut self, edit: impl FnOnce(&mut ContainerStyle)) {
        edit(&mut self.container);
        self.sync_container();
    }

    /// Submits an alert.
    ///
    /// Queued alerts wait while another queued alert holds the slot;
    /// unqueued alerts are admitted immediately and run concurrently.
    pub fn submit(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
        now: Instant,
    ) -> Completion {
        let options = overrides.resolve(&self.defaults);
        let (resolver, completion) = completion::channel();
        let request = AlertRequest {
            message: message.into(),
            options,
            resolver,
        };

        if request.options.queue && (self.slot.is_some() || !self.queue.is_empty()) {
            self.queue.push_back(request);
            debug!(queued = self.queue.len(), "alert buffered behind active alert");
        } else {
            self.admit(request, now);
        }
        completion
    }

    /// Handles an alert message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Tick(at) => self.tick(*at),
            Message::HoverEnter(id) => self.hover_enter(*id, now),
            Message::HoverLeave(id) => self.hover_leave(*id, now),
            Message::Click(id, target) => {
                self.click(*id, *target, now);
            }
            Message::KeyPressed(id, key) => {
                self.key(*id, key, now);
            }
            Message::OverlayClicked => self.overlay_clicked(now),
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Advances every alert to `now`, removing finished ones and admitting
    /// queued requests as the slot frees up.
    pub fn tick(&mut self, now: Instant) {
        let mut removed = Vec::new();
        for instance in &mut self.instances {
            match instance.advance(now, &self.timing, &mut self.surface) {
                Some(Step::Activated) => debug!(id = ?instance.id(), "alert active"),
                Some(Step::Expired) => debug!(id = ?instance.id(), "alert countdown expired"),
                Some(Step::Removed) => removed.push(instance.id()),
                None => {}
            }
        }

        for id in removed {
            if let Some(pos) = self.instances.iter().position(|i| i.id() == id) {
                let instance = self.instances.remove(pos);
                self.finalize(instance, now);
            }
        }
    }

    pub fn hover_enter(&mut self, id: AlertId, now: Instant) {
        if let Some(instance) = self.instances.iter_mut().find(|i| i.id() == id) {
            instance.hover_enter(now);
        }
    }

    pub fn hover_leave(&mut self, id: AlertId, now: Instant) {
        if let Some(instance) = self.instances.iter_mut().find(|i| i.id() == id) {
            instance.hover_leave(now);
        }
    }

    /// Routes a click. Returns true if it started the alert's dismissal.
    pub fn click(&mut self, id: AlertId, target: ClickTarget, now: Instant) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| i.id() == id) else {
            return false;
        };
        instance.click(target, now, &mut self.surface)
    }

    /// Routes a key press. Returns true if it started the alert's dismissal.
    pub fn key(&mut self, id: AlertId, key: &Key, now: Instant) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| i.id() == id) else {
            return false;
        };
        instance.key(key, now, &mut self.surface)
    }

    /// Dismisses every active alert that asked to close on overlay clicks.
    pub fn overlay_clicked(&mut self, now: Instant) {
        if !self.overlay.is_shown() {
            return;
        }
        for instance in &mut self.instances {
            let options = instance.options();
            if options.overlay && options.overlay_close {
                instance.begin_dismiss(DismissReason::Overlay, now, &mut self.surface);
            }
        }
    }

    /// Dismisses an alert through the normal exit animation.
    ///
    /// Returns true if the dismissal started; alerts that are not active
    /// (still entering, already leaving, unknown) are left alone.
    pub fn dismiss(&mut self, id: AlertId, now: Instant) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| i.id() == id) else {
            return false;
        };
        instance.begin_dismiss(DismissReason::Programmatic, now, &mut self.surface)
    }

    /// Cancels everything: drops queued requests (their completions read as
    /// [`Outcome::Cancelled`]), collapses live alerts without animation
    /// ([`Outcome::Cleared`], no user callbacks) and removes the overlay.
    pub fn clear_all(&mut self, now: Instant) {
        let dropped = self.queue.len();
        self.queue.clear();

        let collapsed = self.instances.len();
        for mut instance in self.instances.drain(..) {
            instance.force_remove(now, &mut self.surface);
        }

        self.slot = None;
        self.overlay.reset(&mut self.surface);
        debug!(collapsed, dropped, "alerts cleared");
    }

    /// Number of alerts in the `Active` phase.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.instances
            .iter()
            .filter(|i| i.phase() == Phase::Active)
            .count()
    }

    /// Number of admitted alerts that have not been removed yet.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.instances.len()
    }

    /// Number of queued requests.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Number of countdowns still running or paused.
    #[must_use]
    pub fn pending_countdowns(&self) -> usize {
        self.instances
            .iter()
            .filter(|i| i.has_pending_countdown())
            .count()
    }

    /// Returns whether there are any alerts (live or queued).
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.instances.is_empty() || !self.queue.is_empty()
    }

    /// Phase of a live alert; `None` once it has been removed.
    #[must_use]
    pub fn phase(&self, id: AlertId) -> Option<Phase> {
        self.instance(id).map(AlertInstance::phase)
    }

    /// Countdown time left for a live alert.
    #[must_use]
    pub fn remaining(&self, id: AlertId, now: Instant) -> Option<Duration> {
        self.instance(id).and_then(|i| i.remaining(now))
    }

    /// Returns a live alert.
    #[must_use]
    pub fn instance(&self, id: AlertId) -> Option<&AlertInstance> {
        self.instances.iter().find(|i| i.id() == id)
    }

    /// Live alerts, oldest first.
    pub fn instances(&self) -> impl Iterator<Item = &AlertInstance> {
        self.instances.iter()
    }

    /// Returns whether the shared overlay is shown.
    #[must_use]
    pub fn overlay_shown(&self) -> bool {
        self.overlay.is_shown()
    }

    fn admit(&mut self, request: AlertRequest, now: Instant) {
        let AlertRequest {
            message,
            options,
            mut resolver,
        } = request;
        let id = AlertId::new();

        self.container.position = options.position;
        self.container.z_index = options.z_index;
        self.sync_container();

        if options.overlay {
            self.overlay
                .acquire(&mut self.surface, options.overlay_color, options.z_index);
        }

        let content = if options.html {
            Content::Markup(&message)
        } else {
            Content::Text(&message)
        };
        let spec = RenderSpec {
            id,
            content,
            icon: self.icons.resolve(&options),
            options: &options,
        };
        let handle = match self.surface.render(&spec) {
            Ok(handle) => handle,
            Err(err) => {
                warn!(%err, "alert skipped: surface could not render it");
                if options.overlay {
                    self.overlay.release(&mut self.surface);
                }
                resolver.resolve(Outcome::Skipped);
                return;
            }
        };

        self.surface.play_enter(handle, &options.animation_in);

        if let Some(source) = self.sounds.resolve(&options) {
            if let Err(err) = self.player.play(source) {
                warn!(%err, source, "sound playback failed");
            }
        }

        if let Some(on_show) = &options.on_show {
            on_show.call(id);
        }
        if options.focus {
            self.surface.focus(handle);
        }

        let queued = options.queue;
        let auto_dismiss = options.auto_dismisses();
        let mut instance = AlertInstance::new(id, handle, message, options, resolver, now);
        instance.begin_showing(now);

        if !auto_dismiss {
            // Nothing will time out; release the caller (and the queue) now.
            instance.resolve(Outcome::Presented);
        } else if queued {
            instance.take_slot();
            self.slot = Some(id);
        }

        debug!(?id, queued, auto_dismiss, "alert admitted");
        self.instances.push(instance);
    }

    /// Runs the `Removed` side effects in order: dismissal callback, overlay
    /// release, completion, queue drain.
    fn finalize(&mut self, mut instance: AlertInstance, now: Instant) {
        instance.run_dismiss_callback();

        if instance.options().overlay {
            self.overlay.release(&mut self.surface);
        }

        let reason = instance
            .dismiss_reason()
            .unwrap_or(DismissReason::Programmatic);
        instance.resolve(Outcome::Dismissed(reason));
        debug!(id = ?instance.id(), ?reason, "alert removed");

        if instance.release_slot() && self.slot == Some(instance.id()) {
            self.slot = None;
        }
        self.drain(now);
    }

    /// Admits queued requests while the slot is free.
    fn drain(&mut self, now: Instant) {
        while self.slot.is_none() {
            let Some(request) = self.queue.pop_front() else {
                break;
            };
            self.admit(request, now);
        }
    }

    fn sync_container(&mut self) {
        if let Err(err) = self.surface.configure_container(&self.container) {
            debug!(%err, "container update skipped");
        }
    }
}
