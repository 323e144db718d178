// SPDX-License-Identifier: MPL-2.0
//! One-shot completion handles returned to callers of `show`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Which path started an alert's dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The countdown expired.
    Timeout,
    /// The close button was pressed.
    CloseButton,
    /// Escape was pressed while the alert was closeable.
    Escape,
    /// An action button (by index) was pressed.
    Button(usize),
    /// The shared overlay was clicked.
    Overlay,
    /// The host dismissed the alert directly.
    Programmatic,
}

impl DismissReason {
    /// Returns true for the countdown path, which reports through
    /// `on_timeout` instead of `on_close`.
    #[must_use]
    pub fn is_timeout(self) -> bool {
        matches!(self, DismissReason::Timeout)
    }
}

/// Final result observed by the caller of `show`.
///
/// Completions never fail; every path ends in one of these outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The alert went through its exit animation and was removed.
    Dismissed(DismissReason),
    /// The alert has no timeout; the caller is released once it is shown.
    Presented,
    /// The alert was visible when `clear` collapsed it.
    Cleared,
    /// The alert was still queued when `clear` dropped it.
    Cancelled,
    /// The surface could not render the alert.
    Skipped,
}

/// Sending half, owned by the request and then by its alert instance.
#[derive(Debug)]
pub(crate) struct Resolver(Option<oneshot::Sender<Outcome>>);

impl Resolver {
    /// Fulfils the completion. Returns false if it was already fulfilled.
    pub(crate) fn resolve(&mut self, outcome: Outcome) -> bool {
        match self.0.take() {
            Some(sender) => {
                // The caller may have dropped its handle; that is fine.
                let _ = sender.send(outcome);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_resolved(&self) -> bool {
        self.0.is_none()
    }
}

/// Receiving half handed to the caller.
///
/// Await it from async code, or poll it with [`Completion::try_outcome`]
/// from a synchronous update loop.
#[derive(Debug)]
#[must_use = "a completion does nothing unless awaited or polled"]
pub struct Completion {
    receiver: oneshot::Receiver<Outcome>,
    outcome: Option<Outcome>,
}

impl Completion {
    /// Returns the outcome if the alert has already resolved.
    pub fn try_outcome(&mut self) -> Option<Outcome> {
        if self.outcome.is_none() {
            self.outcome = match self.receiver.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => Some(Outcome::Cancelled),
            };
        }
        self.outcome
    }

    /// Returns whether the alert has resolved.
    pub fn is_resolved(&mut self) -> bool {
        self.try_outcome().is_some()
    }
}

impl Future for Completion {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.outcome {
            return Poll::Ready(outcome);
        }
        let polled = Pin::new(&mut self.receiver).poll(cx);
        polled.map(|received| {
            // A dropped sender means the request was discarded by `clear`.
            let outcome = received.unwrap_or(Outcome::Cancelled);
            self.outcome = Some(outcome);
            outcome
        })
    }
}

/// Creates a linked resolver/completion pair.
pub(crate) fn channel() -> (Resolver, Completion) {
    let (sender, receiver) = oneshot::channel();
    (
        Resolver(Some(sender)),
        Completion {
            receiver,
            outcome: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_completion_has_no_outcome() {
        let (_resolver, mut completion) = channel();
        assert_eq!(completion.try_outcome(), None);
        assert!(!completion.is_resolved());
    }

    #[test]
    fn resolver_fulfils_exactly_once() {
        let (mut resolver, mut completion) = channel();
        assert!(resolver.resolve(Outcome::Presented));
        assert!(!resolver.resolve(Outcome::Cleared));
        assert!(resolver.is_resolved());

        assert_eq!(completion.try_outcome(), Some(Outcome::Presented));
        // The outcome is cached after the first read.
        assert_eq!(completion.try_outcome(), Some(Outcome::Presented));
    }

    #[test]
    fn dropped_resolver_reads_as_cancelled() {
        let (resolver, mut completion) = channel();
        drop(resolver);
        assert_eq!(completion.try_outcome(), Some(Outcome::Cancelled));
    }

    #[tokio::test]
    async fn completion_can_be_awaited() {
        let (mut resolver, completion) = channel();
        resolver.resolve(Outcome::Dismissed(DismissReason::Escape));
        assert_eq!(
            completion.await,
            Outcome::Dismissed(DismissReason::Escape)
        );
    }

    #[test]
    fn only_timeout_is_timeout() {
        assert!(DismissReason::Timeout.is_timeout());
        assert!(!DismissReason::CloseButton.is_timeout());
        assert!(!DismissReason::Button(0).is_timeout());
    }
}
