//! Queueing of UI actions raised while a frame is being drawn.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiAction;

/// Returns `false` when the action was dropped.
pub fn dispatch_ui_action(action_tx: &Sender<UiAction>, action: UiAction) -> bool {
    let action_name = action.name();
    match action_tx.try_send(action) {
        Ok(()) => {
            tracing::debug!(action = action_name, "queued ui action");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(action = action_name, "ui action queue is full; dropping action");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(action = action_name, "ui action queue disconnected");
            false
        }
    }
}
