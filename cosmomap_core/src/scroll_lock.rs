//! Reference-counted background scroll suppression.
//!
//! The detail view acquires a [`ScrollGuard`] while mounted. The host is
//! locked when the first guard appears and unlocked when the last one is
//! dropped, so overlapping mounts (rapid open/close, remounts) never leave
//! the page stuck without scrolling.

use std::sync::{Arc, Mutex, PoisonError};

/// Something whose scrolling can be switched off, e.g. the document body.
pub trait ScrollHost: Send + Sync {
    /// Suppress scrolling.
    fn lock(&self);
    /// Restore scrolling to its state before [`ScrollHost::lock`].
    fn unlock(&self);
}

struct Inner<H> {
    host: H,
    depth: Mutex<usize>,
}

/// Shared lock over a [`ScrollHost`].
pub struct ScrollLock<H: ScrollHost> {
    inner: Arc<Inner<H>>,
}

impl<H: ScrollHost> Clone for ScrollLock<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: ScrollHost> ScrollLock<H> {
    /// Wrap a host; nothing is locked yet.
    pub fn new(host: H) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                depth: Mutex::new(0),
            }),
        }
    }

    /// Take a guard, locking the host if this is the first one.
    pub fn acquire(&self) -> ScrollGuard<H> {
        let mut depth = self.inner.depth.lock().unwrap_or_else(PoisonError::into_inner);
        if *depth == 0 {
            self.inner.host.lock();
        }
        *depth += 1;
        ScrollGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of live guards.
    pub fn depth(&self) -> usize {
        *self.inner.depth.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.inner.host
    }
}

/// Keeps the host locked until dropped.
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollGuard<H: ScrollHost> {
    inner: Arc<Inner<H>>,
}

impl<H: ScrollHost> Drop for ScrollGuard<H> {
    fn drop(&mut self) {
        let mut depth = self.inner.depth.lock().unwrap_or_else(PoisonError::into_inner);
        *depth = depth.saturating_sub(1);
        if *depth == 0 {
            self.inner.host.unlock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingHost {
        events: Mutex<Vec<&'static str>>,
    }

    impl RecordingHost {
        fn events(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ScrollHost for RecordingHost {
        fn lock(&self) {
            self.events.lock().unwrap().push("lock");
        }

        fn unlock(&self) {
            self.events.lock().unwrap().push("unlock");
        }
    }

    #[test]
    fn single_guard_locks_and_restores() {
        let lock = ScrollLock::new(RecordingHost::default());
        let guard = lock.acquire();
        assert_eq!(lock.depth(), 1);
        drop(guard);
        assert_eq!(lock.depth(), 0);
        assert_eq!(lock.host().events(), vec!["lock", "unlock"]);
    }

    #[test]
    fn nested_guards_unlock_once_at_the_end() {
        let lock = ScrollLock::new(RecordingHost::default());
        let outer = lock.acquire();
        let inner = lock.clone().acquire();
        drop(outer);
        assert_eq!(lock.host().events(), vec!["lock"]);
        drop(inner);
        assert_eq!(lock.host().events(), vec!["lock", "unlock"]);
    }

    #[test]
    fn rapid_open_close_returns_to_baseline() {
        let lock = ScrollLock::new(RecordingHost::default());
        let before = lock.depth();
        for _ in 0..25 {
            let guard = lock.acquire();
            assert_eq!(lock.depth(), before + 1);
            drop(guard);
        }
        assert_eq!(lock.depth(), before);
        let events = lock.host().events();
        assert_eq!(events.len(), 50);
        assert_eq!(events.last(), Some(&"unlock"));
    }

    #[test]
    fn guard_released_on_unwind() {
        let lock = ScrollLock::new(RecordingHost::default());
        let clone = lock.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = clone.acquire();
            panic!("render fault");
        }));
        assert!(result.is_err());
        assert_eq!(lock.depth(), 0);
        assert_eq!(lock.host().events(), vec!["lock", "unlock"]);
    }
}
