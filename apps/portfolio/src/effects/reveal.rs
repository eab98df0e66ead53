//! Scroll reveal: flips an element's `revealed` flag once it becomes visible enough.
//!
//! The transition is one-shot: after the first crossing the observer stops listening and
//! the flag never goes back to false.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::cell::StateCell;

/// Used when a threshold is not a number.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    pub revealed: bool,
}

/// One report from the viewport-intersection source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// Fraction of the element's area inside the viewport, 0..=1.
    pub visible_fraction: f64,
}

impl IntersectionEntry {
    pub fn new(visible_fraction: f64) -> Self {
        Self { visible_fraction }
    }
}

/// Clamps a threshold into `0..=1`. NaN falls back to [`DEFAULT_THRESHOLD`].
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Synchronous observer: feed it intersection entries, get at most one transition back.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    revealed: bool,
    observing: bool,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
            revealed: false,
            observing: true,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        RevealState {
            revealed: self.revealed,
        }
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Returns the transition on the first crossing, `None` otherwise.
    pub fn on_intersection(&mut self, entry: IntersectionEntry) -> Option<RevealState> {
        if !self.observing || !self.crosses(entry) {
            return None;
        }
        self.revealed = true;
        self.observing = false;
        Some(self.state())
    }

    /// Stops observing without revealing.
    pub fn disconnect(&mut self) {
        self.observing = false;
    }

    fn crosses(&self, entry: IntersectionEntry) -> bool {
        entry.visible_fraction > 0.0 && entry.visible_fraction >= self.threshold
    }
}

/// Task-driven observer attached to an intersection signal channel.
///
/// Dropping the handle detaches it; a detach before any crossing emits nothing.
#[derive(Debug)]
pub struct ScrollReveal {
    cell: StateCell<RevealState>,
    threshold: f64,
    task: Option<JoinHandle<()>>,
}

impl ScrollReveal {
    /// Begins observing `signals`. Must be called from within a tokio runtime.
    pub fn observe(threshold: f64, mut signals: mpsc::Receiver<IntersectionEntry>) -> Self {
        let cell = StateCell::new(RevealState::default());
        let mut observer = RevealObserver::new(threshold);
        let threshold = observer.threshold();
        let epoch = cell.epoch();

        let task_cell = cell.clone();
        let task = tokio::spawn(async move {
            while let Some(entry) = signals.recv().await {
                if let Some(state) = observer.on_intersection(entry) {
                    if task_cell.publish(epoch, state) {
                        debug!(threshold, fraction = entry.visible_fraction, "Element revealed");
                    }
                    break;
                }
            }
            // `signals` drops here: the source sees the observer is gone.
        });

        Self {
            cell,
            threshold,
            task: Some(task),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn subscribe(&self) -> watch::Receiver<RevealState> {
        self.cell.subscribe()
    }

    pub fn state(&self) -> RevealState {
        self.cell.get()
    }

    pub fn is_observing(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops observing. No state update happens after this returns.
    pub fn detach(&mut self) {
        self.cell.invalidate();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.detach();
    }
}
