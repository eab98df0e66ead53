//! Epoch-guarded state cell shared between an effect handle and its timer/observer task.
//!
//! The handle bumps the epoch on cancel; a task only publishes while its epoch is current.
//! Check and send happen under one lock, so once `invalidate` returns no stale task can
//! publish, regardless of whether its abort has been observed yet.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

#[derive(Debug)]
struct Inner<T> {
    epoch: u64,
    tx: watch::Sender<T>,
}

#[derive(Debug)]
pub struct StateCell<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(Mutex::new(Inner { epoch: 0, tx })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.lock().tx.subscribe()
    }

    pub fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    /// Cuts off every task holding the current epoch. Returns the new epoch.
    pub fn invalidate(&self) -> u64 {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.epoch
    }

    /// Publishes `value` if `epoch` is still current. Returns false for a stale task.
    pub fn publish(&self, epoch: u64, value: T) -> bool {
        let inner = self.lock();
        if inner.epoch != epoch {
            return false;
        }
        inner.tx.send_replace(value);
        true
    }
}

impl<T: Clone> StateCell<T> {
    pub fn get(&self) -> T {
        self.lock().tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_with_current_epoch() {
        let cell = StateCell::new(0u32);
        let epoch = cell.epoch();
        assert!(cell.publish(epoch, 7));
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn test_stale_epoch_is_rejected() {
        let cell = StateCell::new(0u32);
        let stale = cell.epoch();
        let fresh = cell.invalidate();
        assert!(!cell.publish(stale, 1));
        assert_eq!(cell.get(), 0);
        assert!(cell.publish(fresh, 2));
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn test_subscriber_sees_published_value() {
        let cell = StateCell::new("a".to_string());
        let mut rx = cell.subscribe();
        cell.publish(cell.epoch(), "b".to_string());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "b");
    }
}
