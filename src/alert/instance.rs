// SPDX-License-Identifier: MPL-2.0
//! Lifecycle state machine of one presented alert.
//!
//! ```text
//! Created -> Showing -> Active -> Dismissing -> Removed
//! ```
//!
//! An instance only touches its own element on the surface. Cross-alert
//! effects (callbacks, overlay, completion, queue draining) are applied by
//! the controller when [`Step::Removed`] is reported.

use super::completion::{DismissReason, Outcome, Resolver};
use super::countdown::Countdown;
use super::options::AlertOptions;
use crate::surface::{Handle, Surface};
use iced::keyboard::{key::Named, Key};
use std::time::{Duration, Instant};

/// Unique identifier for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    /// Enter animation running; not interactive yet.
    Showing,
    /// Interactive; the countdown (if any) is running.
    Active,
    /// Exit animation running.
    Dismissing,
    Removed,
}

/// Fixed animation windows of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// `Showing -> Active`.
    pub enter: Duration,
    /// Pause between the dismissal trigger and the fade.
    pub exit_delay: Duration,
    /// Fade before the element is detached.
    pub exit_fade: Duration,
}

impl AnimationTiming {
    /// Total time spent in `Dismissing`.
    #[must_use]
    pub fn exit_total(&self) -> Duration {
        self.exit_delay + self.exit_fade
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        use crate::config::defaults::{
            DEFAULT_ENTER_WINDOW_MS, DEFAULT_EXIT_DELAY_MS, DEFAULT_EXIT_FADE_MS,
        };
        Self {
            enter: Duration::from_millis(DEFAULT_ENTER_WINDOW_MS),
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
            exit_fade: Duration::from_millis(DEFAULT_EXIT_FADE_MS),
        }
    }
}

/// Where a click on an alert landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere outside the close button and the buttons region.
    Body,
    CloseButton,
    /// Action button by index.
    Button(usize),
}

/// Transition reported by [`AlertInstance::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Activated,
    Expired,
    Removed,
}

/// One admitted alert.
#[derive(Debug)]
pub struct AlertInstance {
    id: AlertId,
    handle: Handle,
    message: String,
    options: AlertOptions,
    phase: Phase,
    phase_since: Instant,
    countdown: Option<Countdown>,
    dismiss_reason: Option<DismissReason>,
    faded: bool,
    /// Pointer is over the element; tracked from `Showing` on.
    hovered: bool,
    /// Whether this alert holds the serialized queue slot.
    holds_slot: bool,
    resolver: Resolver,
}

impl AlertInstance {
    pub(crate) fn new(
        id: AlertId,
        handle: Handle,
        message: String,
        options: AlertOptions,
        resolver: Resolver,
        now: Instant,
    ) -> Self {
        Self {
            id,
            handle,
            message,
            options,
            phase: Phase::Created,
            phase_since: now,
            countdown: None,
            dismiss_reason: None,
            faded: false,
            hovered: false,
            holds_slot: false,
            resolver,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn options(&self) -> &AlertOptions {
        &self.options
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        self.dismiss_reason
    }

    /// Returns whether the countdown is running or paused.
    #[must_use]
    pub fn has_pending_countdown(&self) -> bool {
        self.countdown.as_ref().is_some_and(|c| !c.is_expired())
    }

    /// Time left on the countdown, `None` when no countdown is running.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.countdown.as_ref().map(|c| c.remaining(now))
    }

    pub(crate) fn take_slot(&mut self) {
        self.holds_slot = true;
    }

    pub(crate) fn release_slot(&mut self) -> bool {
        std::mem::replace(&mut self.holds_slot, false)
    }

    pub(crate) fn resolve(&mut self, outcome: Outcome) -> bool {
        self.resolver.resolve(outcome)
    }

    /// `Created -> Showing`, once the element is rendered.
    pub(crate) fn begin_showing(&mut self, now: Instant) {
        if self.phase == Phase::Created {
            self.enter(Phase::Showing, now);
        }
    }

    /// Moves the instance forward in time.
    pub(crate) fn advance<S: Surface>(
        &mut self,
        now: Instant,
        timing: &AnimationTiming,
        surface: &mut S,
    ) -> Option<Step> {
        let in_phase = now.saturating_duration_since(self.phase_since);
        match self.phase {
            Phase::Created | Phase::Removed => None,
            Phase::Showing => {
                if in_phase < timing.enter {
                    return None;
                }
                self.enter(Phase::Active, now);
                if self.options.auto_dismisses() {
                    let mut countdown =
                        Countdown::start(self.options.timeout, self.options.pause_on_hover, now);
                    if self.hovered {
                        countdown.pause(now);
                    }
                    self.countdown = Some(countdown);
                }
                Some(Step::Activated)
            }
            Phase::Active => {
                let countdown = self.countdown.as_mut()?;
                if countdown.poll(now) {
                    self.begin_dismiss(DismissReason::Timeout, now, surface);
                    return Some(Step::Expired);
                }
                if self.options.progress_bar {
                    surface.set_progress(self.handle, countdown.fraction_remaining(now));
                }
                None
            }
            Phase::Dismissing => {
                if !self.faded && in_phase >= timing.exit_delay {
                    self.faded = true;
                    surface.fade_out(self.handle);
                }
                if in_phase < timing.exit_total() {
                    return None;
                }
                surface.detach(self.handle);
                self.enter(Phase::Removed, now);
                Some(Step::Removed)
            }
        }
    }

    /// `Active -> Dismissing`. Returns false (and does nothing) unless the
    /// instance is active, so only the first trigger is honored.
    pub(crate) fn begin_dismiss<S: Surface>(
        &mut self,
        reason: DismissReason,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.dismiss_reason = Some(reason);
        self.countdown = None;
        self.enter(Phase::Dismissing, now);
        surface.play_exit(self.handle, &self.options.animation_out);
        true
    }

    /// Collapses the instance straight to `Removed`, skipping animation.
    pub(crate) fn force_remove<S: Surface>(&mut self, now: Instant, surface: &mut S) {
        if self.phase == Phase::Removed {
            return;
        }
        self.countdown = None;
        surface.detach(self.handle);
        self.enter(Phase::Removed, now);
        self.resolver.resolve(Outcome::Cleared);
    }

    pub(crate) fn hover_enter(&mut self, now: Instant) {
        if self.phase == Phase::Removed {
            return;
        }
        self.hovered = true;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.pause(now);
        }
    }

    pub(crate) fn hover_leave(&mut self, now: Instant) {
        if self.phase == Phase::Removed {
            return;
        }
        self.hovered = false;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.resume(now);
        }
    }

    /// Handles a click. Returns true when it started the dismissal.
    pub(crate) fn click<S: Surface>(
        &mut self,
        target: ClickTarget,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        match target {
            ClickTarget::Body => {
                if let Some(on_click) = &self.options.on_click {
                    on_click.call(self.id);
                }
                false
            }
            ClickTarget::CloseButton => {
                self.options.close_button
                    && self.begin_dismiss(DismissReason::CloseButton, now, surface)
            }
            ClickTarget::Button(index) => {
                let Some(button) = self.options.buttons.get(index) else {
                    return false;
                };
                let closes = button.closes_alert();
                if let Some(action) = &button.action {
                    action.call(());
                }
                closes && self.begin_dismiss(DismissReason::Button(index), now, surface)
            }
        }
    }

    /// Handles a key press. Escape closes closeable alerts.
    pub(crate) fn key<S: Surface>(&mut self, key: &Key, now: Instant, surface: &mut S) -> bool {
        matches!(key, Key::Named(Named::Escape))
            && self.options.close_button
            && self.begin_dismiss(DismissReason::Escape, now, surface)
    }

    /// Runs the dismissal-specific user callback.
    pub(crate) fn run_dismiss_callback(&self) {
        let callback = match self.dismiss_reason {
            Some(reason) if reason.is_timeout() => self.options.on_timeout.as_ref(),
            Some(_) => self.options.on_close.as_ref(),
            None => None,
        };
        if let Some(callback) = callback {
            callback.call(());
        }
    }

    fn enter(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_since = now;
    }
}
