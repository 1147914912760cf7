//! Fan-in completion
//!
//! [`FanIn`] joins several independent completion signals into one callback.
//! It is used when a single user callback has to wait for a group of
//! animation channels that finish in arbitrary order.
//!
//! ```rust,ignore
//! let fan_in = after_n_calls(2, Box::new(|| println!("both done")));
//! translate.set(target, None, Some(fan_in.completion()))?;
//! scale.set(target, None, Some(fan_in.completion()))?;
//! ```
//!
//! Signals may arrive synchronously while completions are still being handed
//! out; counting starts at construction, not after every completion has been
//! distributed.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

/// A one-shot completion callback.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

struct FanInState {
    remaining: AtomicUsize,
    callback: Mutex<Option<Callback>>,
}

/// Fires a stored callback exactly once after `n` signals.
///
/// Clones share the same counter. Signals past the n-th are ignored.
#[derive(Clone)]
pub struct FanIn {
    state: Arc<FanInState>,
}

/// Wraps `callback` so that it runs after being signalled `n` times.
///
/// `n == 0` is treated as a single signal.
#[must_use]
pub fn after_n_calls(n: usize, callback: Callback) -> FanIn {
    FanIn::new(n, callback)
}

impl FanIn {
    #[must_use]
    pub fn new(n: usize, callback: Callback) -> Self {
        Self {
            state: Arc::new(FanInState {
                remaining: AtomicUsize::new(n.max(1)),
                callback: Mutex::new(Some(callback)),
            }),
        }
    }

    /// Records one completion. Runs the callback on the last expected one.
    pub fn signal(&self) {
        let previous = self
            .state
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        if previous == Ok(1) {
            // Take the callback out before running it so a re-entrant signal
            // sees an empty slot.
            let callback = self.state.callback.lock().take();
            if let Some(callback) = callback {
                log::trace!("FanIn: last completion received");
                callback();
            }
        }
    }

    /// A boxed callback that signals this fan-in once when invoked.
    #[must_use]
    pub fn completion(&self) -> Callback {
        let fan_in = self.clone();
        Box::new(move || fan_in.signal())
    }

    /// Signals still outstanding before the callback fires.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.remaining.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

impl fmt::Debug for FanIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanIn")
            .field("remaining", &self.remaining())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn counter() -> (Arc<AtomicUsize>, Callback) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        (
            hits,
            Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn test_fires_after_n_signals() {
        let (hits, cb) = counter();
        let fan_in = after_n_calls(3, cb);

        fan_in.signal();
        fan_in.signal();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(fan_in.remaining(), 1);

        fan_in.signal();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(fan_in.is_complete());
    }

    #[test]
    fn test_extra_signals_ignored() {
        let (hits, cb) = counter();
        let fan_in = after_n_calls(2, cb);
        for _ in 0..5 {
            fan_in.signal();
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_is_one_signal() {
        let (hits, cb) = counter();
        let fan_in = after_n_calls(0, cb);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        fan_in.signal();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_shuffled_completions() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let (hits, cb) = counter();
            let fan_in = after_n_calls(6, cb);
            let mut completions: Vec<Callback> = (0..6).map(|_| fan_in.completion()).collect();
            completions.shuffle(&mut rng);

            for (i, done) in completions.into_iter().enumerate() {
                assert_eq!(hits.load(Ordering::SeqCst), 0, "fired early at {i}");
                done();
            }
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_signal_before_all_completions_handed_out() {
        let (hits, cb) = counter();
        let fan_in = after_n_calls(2, cb);

        // First completion runs immediately, as a synchronously finishing
        // channel would.
        (fan_in.completion())();
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let second = fan_in.completion();
        second();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
