//! Transient notification banner with a single cancellable dismissal timer.
//!
//! The scheduler owns at most one pending dismissal task. Every call to
//! [`NotificationScheduler::notify`] aborts the previous task before spawning a
//! new one, and each task only clears the notification generation it was
//! created for, so an older countdown can never wipe a newer message even if
//! the abort races with the timer firing.

use std::{sync::Arc, time::Duration};

use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    message: String,
    generation: u64,
}

impl Notification {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

struct PendingDismissal {
    generation: u64,
    task: JoinHandle<()>,
}

pub struct NotificationScheduler {
    runtime: Handle,
    state: Arc<watch::Sender<Notification>>,
    pending: Option<PendingDismissal>,
}

impl NotificationScheduler {
    pub fn new(runtime: Handle) -> Self {
        let (state, _) = watch::channel(Notification::default());
        Self {
            runtime,
            state: Arc::new(state),
            pending: None,
        }
    }

    /// Shows `message` for `duration`, replacing whatever is currently shown
    /// and restarting the countdown.
    pub fn notify(&mut self, message: impl Into<String>, duration: Duration) {
        self.cancel_pending();

        let message = message.into();
        let generation = self.state.borrow().generation.wrapping_add(1);
        self.state.send_replace(Notification {
            message,
            generation,
        });

        let state = Arc::clone(&self.state);
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let cleared = state.send_if_modified(|current| {
                if current.generation != generation || current.message.is_empty() {
                    return false;
                }
                current.message.clear();
                true
            });
            debug!(generation, cleared, "notification dismissal fired");
        });

        debug!(generation, ?duration, "notification scheduled");
        self.pending = Some(PendingDismissal { generation, task });
    }

    /// Hides the current message right away and drops the pending countdown.
    pub fn dismiss(&mut self) {
        self.cancel_pending();
        self.state.send_if_modified(|current| {
            if current.message.is_empty() {
                return false;
            }
            current.message.clear();
            true
        });
    }

    pub fn message(&self) -> String {
        self.state.borrow().message.clone()
    }

    pub fn current(&self) -> Notification {
        self.state.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }

    pub fn has_pending_dismissal(&self) -> bool {
        self.pending
            .as_ref()
            .map(|pending| !pending.task.is_finished())
            .unwrap_or(false)
    }

    pub fn subscribe(&self) -> watch::Receiver<Notification> {
        self.state.subscribe()
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !pending.task.is_finished() {
                debug!(
                    generation = pending.generation,
                    "cancelling pending notification dismissal"
                );
            }
            pending.task.abort();
        }
    }
}

impl Drop for NotificationScheduler {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
#[path = "tests/notification_tests.rs"]
mod tests;
