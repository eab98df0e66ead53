//! Typing reveal: discloses a string one character per tick after an initial delay.
//!
//! [`TypingCursor`] is the pure state machine; [`TypingReveal`] drives it with tokio timers
//! and publishes every step through a watch channel.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use super::cell::StateCell;

/// Snapshot of a typing reveal. `displayed_prefix` is always a prefix of the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingState {
    pub displayed_prefix: String,
    pub done: bool,
}

/// Inputs of one reveal run. A change in any field restarts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingParams {
    pub text: String,
    /// Zero means reveal everything at once.
    pub char_interval: Duration,
    pub initial_delay: Duration,
}

impl TypingParams {
    pub fn new(text: impl Into<String>, char_interval: Duration, initial_delay: Duration) -> Self {
        Self {
            text: text.into(),
            char_interval,
            initial_delay,
        }
    }

    /// Builds params from signed millisecond values. Non-positive values clamp to zero.
    pub fn from_millis(text: impl Into<String>, char_interval_ms: i64, initial_delay_ms: i64) -> Self {
        Self::new(text, clamp_millis(char_interval_ms), clamp_millis(initial_delay_ms))
    }
}

fn clamp_millis(ms: i64) -> Duration {
    Duration::from_millis(u64::try_from(ms).unwrap_or(0))
}

// ────────────────────────────────────────────────────────────────────────────
// State machine
// ────────────────────────────────────────────────────────────────────────────

/// Tracks how much of a text has been revealed, by byte offset on a char boundary.
#[derive(Debug, Clone)]
pub struct TypingCursor {
    text: String,
    boundary: usize,
}

impl TypingCursor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            boundary: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.boundary >= self.text.len()
    }

    pub fn state(&self) -> TypingState {
        TypingState {
            displayed_prefix: self.text[..self.boundary].to_string(),
            done: self.is_done(),
        }
    }

    /// Reveals one more character. Returns `None` once the whole text is shown.
    pub fn advance(&mut self) -> Option<TypingState> {
        let next = self.text[self.boundary..].chars().next()?;
        self.boundary += next.len_utf8();
        Some(self.state())
    }

    pub fn reveal_all(&mut self) -> TypingState {
        self.boundary = self.text.len();
        self.state()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Timer-driven handle
// ────────────────────────────────────────────────────────────────────────────

/// Owns at most one in-flight reveal task. Dropping the handle detaches it.
///
/// `start` must be called from within a tokio runtime.
#[derive(Debug)]
pub struct TypingReveal {
    cell: StateCell<TypingState>,
    params: Option<TypingParams>,
    task: Option<JoinHandle<()>>,
}

impl Default for TypingReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingReveal {
    pub fn new() -> Self {
        Self {
            cell: StateCell::new(TypingState::default()),
            params: None,
            task: None,
        }
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<TypingState> {
        self.cell.subscribe()
    }

    pub fn state(&self) -> TypingState {
        self.cell.get()
    }

    /// Starts (or restarts) the reveal. Same params as the running/finished run is a no-op.
    pub fn start(&mut self, params: TypingParams) {
        if self.params.as_ref() == Some(&params) {
            return;
        }
        self.cancel();

        let epoch = self.cell.epoch();
        let mut cursor = TypingCursor::new(params.text.clone());

        if cursor.is_done() {
            self.cell.publish(epoch, cursor.state());
            self.params = Some(params);
            return;
        }

        self.cell.publish(epoch, TypingState::default());
        debug!(
            chars = params.text.chars().count(),
            interval = ?params.char_interval,
            delay = ?params.initial_delay,
            "Typing reveal started"
        );

        let cell = self.cell.clone();
        let char_interval = params.char_interval;
        let initial_delay = params.initial_delay;
        self.task = Some(tokio::spawn(async move {
            time::sleep(initial_delay).await;

            if char_interval.is_zero() {
                cell.publish(epoch, cursor.reveal_all());
                return;
            }

            let mut ticker = time::interval_at(time::Instant::now() + char_interval, char_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(state) = cursor.advance() else {
                    break;
                };
                let done = state.done;
                if !cell.publish(epoch, state) || done {
                    break;
                }
            }
        }));
        self.params = Some(params);
    }

    /// Stops the in-flight run. No state update happens after this returns.
    pub fn cancel(&mut self) {
        self.cell.invalidate();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.params = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for TypingReveal {
    fn drop(&mut self) {
        self.cancel();
    }
}
