// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios driven with an explicit clock.

use iced_alerts::alert::ClickTarget;
use iced_alerts::controller::Message;
use iced_alerts::surface::SurfaceEvent;
use iced_alerts::{
    AlertId, Button, Controller, DismissReason, HeadlessSurface, Outcome, Overrides, Phase,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn controller() -> Controller<HeadlessSurface> {
    Controller::new(HeadlessSurface::new())
}

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

fn bump(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// ID of the most recently admitted alert.
fn newest(controller: &Controller<HeadlessSurface>) -> AlertId {
    controller
        .instances()
        .last()
        .map(|instance| instance.id())
        .expect("an alert is live")
}

#[test]
fn queued_alerts_complete_in_submission_order() {
    let mut controller = controller();
    let t0 = Instant::now();
    let mut first = controller.submit("first", Overrides::new().timeout_ms(1000), t0);
    let mut second = controller.submit("second", Overrides::new().timeout_ms(1000), t0);
    let mut third = controller.submit("third", Overrides::new().timeout_ms(1000), t0);

    let mut resolved = Vec::new();
    let mut at = t0;
    while resolved.len() < 3 && at < t0 + ms(10_000) {
        at += ms(16);
        controller.tick(at);
        assert!(controller.active_count() <= 1);
        for (name, completion) in [
            ("first", &mut first),
            ("second", &mut second),
            ("third", &mut third),
        ] {
            if !resolved.contains(&name) && completion.is_resolved() {
                resolved.push(name);
            }
        }
    }

    assert_eq!(resolved, vec!["first", "second", "third"]);
}

#[test]
fn queued_error_waits_for_success_removal() {
    let mut controller = controller();
    let t0 = Instant::now();
    let mut success = controller.submit("Saved", Overrides::new().severity("success"), t0);
    let mut error = controller.submit("Failed", Overrides::new().severity("error"), t0);
    let success_id = newest(&controller);

    controller.tick(t0 + ms(300));
    assert_eq!(controller.phase(success_id), Some(Phase::Active));
    assert_eq!(controller.queued_count(), 1);

    // Success expires and starts leaving; the error is still buffered
    controller.tick(t0 + ms(5300));
    assert_eq!(controller.phase(success_id), Some(Phase::Dismissing));
    assert_eq!(controller.queued_count(), 1);
    assert_eq!(controller.pending_countdowns(), 0);

    // Removal releases the slot and admits the error
    controller.tick(t0 + ms(5700));
    assert_eq!(controller.phase(success_id), None);
    assert_eq!(
        success.try_outcome(),
        Some(Outcome::Dismissed(DismissReason::Timeout))
    );
    let error_id = newest(&controller);
    assert_eq!(controller.phase(error_id), Some(Phase::Showing));
    assert_eq!(controller.remaining(error_id, t0 + ms(5700)), None);

    controller.tick(t0 + ms(6000));
    assert_eq!(controller.phase(error_id), Some(Phase::Active));
    assert_eq!(
        controller.remaining(error_id, t0 + ms(6000)),
        Some(ms(5000))
    );
    assert_eq!(error.try_outcome(), None);
}

#[test]
fn unqueued_alerts_are_active_together() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _held = controller.submit("queued", Overrides::new(), t0);
    let _a = controller.submit("a", Overrides::new().queue(false), t0);
    let _b = controller.submit("b", Overrides::new().queue(false), t0);
    let _waiting = controller.submit("waiting", Overrides::new(), t0);

    controller.tick(t0 + ms(300));
    assert_eq!(controller.active_count(), 3);
    assert_eq!(controller.queued_count(), 1);
}

#[test]
fn hover_pause_delays_expiry_by_paused_time() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _done = controller.submit("hover me", Overrides::new().timeout_ms(5000), t0);
    let id = newest(&controller);

    let active_at = t0 + ms(300);
    controller.tick(active_at);

    controller.handle_message(&Message::HoverEnter(id), active_at + ms(2000));
    controller.tick(active_at + ms(8000));
    assert_eq!(controller.phase(id), Some(Phase::Active));
    assert_eq!(controller.remaining(id, active_at + ms(8000)), Some(ms(3000)));

    let leave_at = active_at + ms(12_000);
    controller.handle_message(&Message::HoverLeave(id), leave_at);

    controller.tick(leave_at + ms(2999));
    assert_eq!(controller.phase(id), Some(Phase::Active));

    controller.tick(leave_at + ms(3000));
    assert_eq!(controller.phase(id), Some(Phase::Dismissing));
}

#[test]
fn hover_during_enter_window_starts_countdown_paused() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _done = controller.submit("early hover", Overrides::new().timeout_ms(1000), t0);
    let id = newest(&controller);

    controller.handle_message(&Message::HoverEnter(id), t0 + ms(100));
    controller.tick(t0 + ms(300));
    controller.tick(t0 + ms(5000));
    assert_eq!(controller.phase(id), Some(Phase::Active));
    assert_eq!(controller.remaining(id, t0 + ms(5000)), Some(ms(1000)));

    let leave_at = t0 + ms(6000);
    controller.handle_message(&Message::HoverLeave(id), leave_at);
    controller.tick(leave_at + ms(999));
    assert_eq!(controller.phase(id), Some(Phase::Active));

    controller.tick(leave_at + ms(1000));
    assert_eq!(controller.phase(id), Some(Phase::Dismissing));
}

#[test]
fn hover_that_left_during_enter_window_does_not_pause() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _done = controller.submit("passing by", Overrides::new().timeout_ms(1000), t0);
    let id = newest(&controller);

    controller.hover_enter(id, t0 + ms(50));
    controller.hover_leave(id, t0 + ms(150));
    controller.tick(t0 + ms(300));
    controller.tick(t0 + ms(1300));

    assert_eq!(controller.phase(id), Some(Phase::Dismissing));
}

#[test]
fn hover_without_pause_on_hover_keeps_counting() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _done = controller.submit(
        "busy",
        Overrides::new().timeout_ms(1000).pause_on_hover(false),
        t0,
    );
    let id = newest(&controller);

    controller.tick(t0 + ms(300));
    controller.hover_enter(id, t0 + ms(400));
    controller.tick(t0 + ms(1300));

    assert_eq!(controller.phase(id), Some(Phase::Dismissing));
}

#[test]
fn closing_button_runs_action_once_then_dismisses() {
    let mut controller = controller();
    let t0 = Instant::now();
    let presses = counter();
    let closes = counter();
    let mut done = controller.submit(
        "Undo?",
        Overrides::new()
            .button(Button::new("Undo").close_on_click(true).on_press(bump(&presses)))
            .on_close(bump(&closes)),
        t0,
    );
    let id = newest(&controller);

    controller.tick(t0 + ms(300));
    assert!(controller.click(id, ClickTarget::Button(0), t0 + ms(1000)));
    assert_eq!(presses.load(Ordering::SeqCst), 1);
    assert_eq!(controller.phase(id), Some(Phase::Dismissing));

    // Further clicks while leaving are ignored
    assert!(!controller.click(id, ClickTarget::Button(0), t0 + ms(1050)));
    assert_eq!(presses.load(Ordering::SeqCst), 1);

    controller.tick(t0 + ms(1400));
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(
        done.try_outcome(),
        Some(Outcome::Dismissed(DismissReason::Button(0)))
    );
}

#[test]
fn non_closing_button_keeps_alert_open() {
    let mut controller = controller();
    let t0 = Instant::now();
    let presses = counter();
    let _done = controller.submit(
        "Details",
        Overrides::new().button(Button::new("More").close_on_click(false).on_press(bump(&presses))),
        t0,
    );
    let id = newest(&controller);

    controller.tick(t0 + ms(300));
    assert!(!controller.click(id, ClickTarget::Button(0), t0 + ms(500)));
    assert!(!controller.click(id, ClickTarget::Button(0), t0 + ms(600)));

    assert_eq!(presses.load(Ordering::SeqCst), 2);
    assert_eq!(controller.phase(id), Some(Phase::Active));
}

#[test]
fn two_dismissal_triggers_close_once() {
    let mut controller = controller();
    let t0 = Instant::now();
    let closes = counter();
    let timeouts = counter();
    let mut done = controller.submit(
        "twice",
        Overrides::new()
            .on_close(bump(&closes))
            .on_timeout(bump(&timeouts)),
        t0,
    );
    let id = newest(&controller);

    controller.tick(t0 + ms(300));
    controller.handle_message(
        &Message::Click(id, ClickTarget::CloseButton),
        t0 + ms(500),
    );
    controller.handle_message(
        &Message::KeyPressed(
            id,
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
        ),
        t0 + ms(510),
    );
    controller.tick(t0 + ms(10_000));

    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(timeouts.load(Ordering::SeqCst), 0);
    assert_eq!(
        controller
            .surface()
            .count(|event| matches!(event, SurfaceEvent::Detached(_))),
        1
    );
    assert_eq!(
        done.try_outcome(),
        Some(Outcome::Dismissed(DismissReason::CloseButton))
    );
}

#[test]
fn clicks_during_enter_animation_are_ignored() {
    let mut controller = controller();
    let t0 = Instant::now();
    let clicks = counter();
    let clicked = Arc::clone(&clicks);
    let _done = controller.submit(
        "entering",
        Overrides::new().on_click(move |_| {
            clicked.fetch_add(1, Ordering::SeqCst);
        }),
        t0,
    );
    let id = newest(&controller);

    assert!(!controller.click(id, ClickTarget::CloseButton, t0 + ms(100)));
    controller.click(id, ClickTarget::Body, t0 + ms(100));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(controller.phase(id), Some(Phase::Showing));

    controller.tick(t0 + ms(300));
    controller.click(id, ClickTarget::Body, t0 + ms(400));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(controller.phase(id), Some(Phase::Active));
}

#[test]
fn overlay_with_zero_timeout_is_torn_down_by_clear() {
    let mut controller = controller();
    let t0 = Instant::now();
    let closes = counter();
    let timeouts = counter();
    let mut done = controller.submit(
        "Blocking",
        Overrides::new()
            .overlay(true)
            .timeout(Duration::ZERO)
            .on_close(bump(&closes))
            .on_timeout(bump(&timeouts)),
        t0,
    );

    assert_eq!(done.try_outcome(), Some(Outcome::Presented));
    assert!(controller.overlay_shown());
    assert!(controller.surface().overlay_visible());

    controller.tick(t0 + ms(300));
    controller.clear_all(t0 + ms(1000));

    assert!(!controller.overlay_shown());
    assert!(!controller.surface().overlay_visible());
    assert_eq!(controller.live_count(), 0);
    assert_eq!(controller.pending_countdowns(), 0);

    let events_after_clear = controller.surface().events().len();
    controller.tick(t0 + ms(60_000));
    assert_eq!(controller.surface().events().len(), events_after_clear);
    assert_eq!(closes.load(Ordering::SeqCst), 0);
    assert_eq!(timeouts.load(Ordering::SeqCst), 0);
}

#[test]
fn zero_timeout_alert_does_not_hold_the_queue() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _sticky = controller.submit("sticky", Overrides::new().timeout_ms(0), t0);
    let _next = controller.submit("next", Overrides::new(), t0);

    assert_eq!(controller.live_count(), 2);
    assert_eq!(controller.queued_count(), 0);
}

#[test]
fn clear_cancels_buffered_requests() {
    let mut controller = controller();
    let t0 = Instant::now();
    let mut live = controller.submit("live", Overrides::new(), t0);
    let mut buffered = controller.submit("buffered", Overrides::new(), t0);

    controller.tick(t0 + ms(300));
    controller.clear_all(t0 + ms(400));

    assert_eq!(live.try_outcome(), Some(Outcome::Cleared));
    assert_eq!(buffered.try_outcome(), Some(Outcome::Cancelled));
    assert!(!controller.has_alerts());

    // The controller is usable again afterwards
    let _again = controller.submit("again", Overrides::new(), t0 + ms(500));
    assert_eq!(controller.live_count(), 1);
}

#[test]
fn overlay_is_reference_counted() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _a = controller.submit("a", Overrides::new().queue(false).overlay(true), t0);
    let a = newest(&controller);
    let _b = controller.submit("b", Overrides::new().queue(false).overlay(true), t0);
    let b = newest(&controller);
    controller.tick(t0 + ms(300));

    controller.dismiss(a, t0 + ms(400));
    controller.tick(t0 + ms(800));
    assert_eq!(controller.phase(a), None);
    assert!(controller.surface().overlay_visible());

    controller.dismiss(b, t0 + ms(900));
    controller.tick(t0 + ms(1300));
    assert!(!controller.surface().overlay_visible());
    assert_eq!(
        controller
            .surface()
            .count(|event| matches!(event, SurfaceEvent::OverlayShown { .. })),
        1
    );
}

#[test]
fn overlay_click_closes_only_opted_in_alerts() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _closable = controller.submit(
        "closable",
        Overrides::new().queue(false).overlay(true).overlay_close(true),
        t0,
    );
    let closable = newest(&controller);
    let _modal = controller.submit("modal", Overrides::new().queue(false).overlay(true), t0);
    let modal = newest(&controller);
    controller.tick(t0 + ms(300));

    controller.handle_message(&Message::OverlayClicked, t0 + ms(500));

    assert_eq!(
        controller.instance(closable).and_then(|i| i.dismiss_reason()),
        Some(DismissReason::Overlay)
    );
    assert_eq!(controller.phase(modal), Some(Phase::Active));
}

#[test]
fn render_failure_skips_and_keeps_draining() {
    let mut surface = HeadlessSurface::new();
    surface.set_container_missing(true);
    let mut controller = Controller::new(surface);
    let t0 = Instant::now();

    let mut first = controller.submit("a", Overrides::new(), t0);
    let mut second = controller.submit("b", Overrides::new(), t0);

    assert_eq!(first.try_outcome(), Some(Outcome::Skipped));
    assert_eq!(second.try_outcome(), Some(Outcome::Skipped));

    controller.surface_mut().set_container_missing(false);
    let _third = controller.submit("c", Overrides::new(), t0 + ms(10));
    assert_eq!(controller.live_count(), 1);
}

#[tokio::test]
async fn completion_can_be_awaited() {
    let mut controller = controller();
    let t0 = Instant::now();
    let done = controller.submit("await me", Overrides::new().timeout_ms(100), t0);

    controller.tick(t0 + ms(300));
    controller.tick(t0 + ms(400));
    controller.tick(t0 + ms(800));

    assert_eq!(done.await, Outcome::Dismissed(DismissReason::Timeout));
}

#[tokio::test]
async fn dropped_controller_cancels_completions() {
    let mut controller = controller();
    let t0 = Instant::now();
    let _live = controller.submit("live", Overrides::new(), t0);
    let buffered = controller.submit("buffered", Overrides::new(), t0);
    drop(controller);

    assert_eq!(buffered.await, Outcome::Cancelled);
}
