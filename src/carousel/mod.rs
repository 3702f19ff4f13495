//! Auto-advancing index over a fixed list, used for the testimonial
//! carousel and the image marquee.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_MARQUEE_INTERVAL: Duration = Duration::from_millis(4000);

fn step(active: &AtomicUsize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let update = |i: usize| {
        if forward {
            Some((i + 1) % len)
        } else {
            Some((i + len - 1) % len)
        }
    };
    // The closure never returns `None` so this can't fail
    match active.fetch_update(Ordering::SeqCst, Ordering::SeqCst, update) {
        Ok(prev) | Err(prev) => update(prev).unwrap_or(prev),
    }
}

/// A fixed list plus the index of the item currently shown. Clones
/// share the same index.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    items: Arc<[T]>,
    active: Arc<AtomicUsize>,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.active())
    }

    /// Advance one item, wrapping to the start. Returns the new index.
    pub fn next(&self) -> usize {
        step(&self.active, self.len(), true)
    }

    /// Go back one item, wrapping to the end. Returns the new index.
    pub fn prev(&self) -> usize {
        step(&self.active, self.len(), false)
    }

    /// Jump straight to `index`. Out of range indices are ignored.
    pub fn select(&self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.active.store(index, Ordering::SeqCst);
        true
    }

    /// Advance every `interval` until the returned handle is stopped
    /// or dropped. The first advance happens one full interval from
    /// now.
    pub fn autoplay(&self, interval: Duration) -> Autoplay {
        let cancel = CancellationToken::new();
        let active = Arc::clone(&self.active);
        let len = self.len();
        let interval = interval.max(Duration::from_millis(1));

        let token = cancel.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let index = step(&active, len, true);
                        tracing::trace!(index, "Carousel advanced");
                    }
                }
            }
        });

        Autoplay { cancel }
    }
}

/// Teardown hook for a carousel's repeating tick.
#[derive(Debug)]
pub struct Autoplay {
    cancel: CancellationToken,
}

impl Autoplay {
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
