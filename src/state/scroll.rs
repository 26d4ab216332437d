/// Page scroll lock
///
/// The lightbox holds a `ScrollLock` for as long as it is open. The page
/// refuses to scroll while any lock is alive, and dropping the lock (closing
/// the modal, changing the filter, or dropping the whole state) releases it.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Hands out scroll locks and reports whether any is alive
#[derive(Debug, Clone, Default)]
pub struct ScrollGate {
    holders: Arc<AtomicUsize>,
}

impl ScrollGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress page scrolling until the returned guard is dropped
    pub fn acquire(&self) -> ScrollLock {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Guard keeping page scrolling suppressed
#[derive(Debug)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_released_on_drop() {
        let gate = ScrollGate::new();
        assert!(!gate.is_locked());

        let lock = gate.acquire();
        assert!(gate.is_locked());

        drop(lock);
        assert!(!gate.is_locked());
    }

    #[test]
    fn test_nested_locks() {
        let gate = ScrollGate::new();
        let first = gate.acquire();
        let second = gate.clone().acquire();

        drop(first);
        assert!(gate.is_locked());
        drop(second);
        assert!(!gate.is_locked());
    }
}
