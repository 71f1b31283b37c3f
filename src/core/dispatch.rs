//! Delayed driver assignment
//!
//! A `Dispatcher` holds at most one pending one-shot task. The task sleeps
//! for the configured delay and then posts its message on the channel the
//! event loop drains. Scheduling again, cancelling, or dropping the
//! dispatcher aborts whatever is still pending.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// One-shot delayed message sender
#[derive(Debug)]
pub struct Dispatcher<M> {
    tx: mpsc::Sender<M>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> Dispatcher<M> {
    /// Create a dispatcher posting to `tx` after `delay`
    pub fn new(tx: mpsc::Sender<M>, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Post `message` once the delay elapses, replacing any pending message
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, message: M) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        debug!(delay_ms = delay.as_millis() as u64, "scheduling dispatch");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session was torn down
            let _ = tx.send(message).await;
        }));
    }

    /// Abort the pending message, returning whether one was still waiting
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("pending dispatch cancelled");
                true
            }
            _ => false,
        }
    }

    /// Whether a message is still waiting to be sent
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl<M> Drop for Dispatcher<M> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
