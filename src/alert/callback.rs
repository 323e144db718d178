// SPDX-License-Identifier: MPL-2.0
//! Shareable user callbacks attached to alert options.

use std::fmt;
use std::sync::Arc;

/// A cloneable callback invoked with a value of type `T`.
///
/// Options are merged by cloning, so callbacks are reference counted rather
/// than boxed.
pub struct Callback<T = ()>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Callback<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, value: T) {
        (self.0)(value);
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn clones_share_the_same_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let callback = Callback::new(move |step: usize| {
            counter.fetch_add(step, Ordering::SeqCst);
        });

        let clone = callback.clone();
        callback.call(1);
        clone.call(2);

        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn debug_output_hides_the_closure() {
        let callback: Callback = Callback::new(|()| {});
        assert_eq!(format!("{callback:?}"), "Callback(..)");
    }
}
