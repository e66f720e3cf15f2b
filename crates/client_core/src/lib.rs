use std::time::Duration;

use shared::domain::{Anecdote, AnecdoteId, NewAnecdote};
use tokio::runtime::Handle;
use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod notification;
pub mod pages;
pub mod router;
pub mod store;

pub use config::Settings;
pub use error::ClientError;
pub use field::{Field, FieldBinding, FieldKind};
pub use form::{CreateForm, FormField};
pub use notification::{Notification, NotificationScheduler};
pub use router::{Navigator, Route};
pub use store::{AnecdoteStore, VoteOutcome};

/// Banner text shown after an add.
pub fn creation_message(content: &str) -> String {
    format!("a new anecdote {content} created!")
}

/// What a route renders, looked up fresh from the store on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    List(&'a [Anecdote]),
    Create,
    About,
    Anecdote(Option<&'a Anecdote>),
    NotFound,
}

/// Owned application state: the anecdote store plus the notification banner.
/// Views read through shared borrows; every mutation goes through
/// [`AnecdoteApp::add`], [`AnecdoteApp::vote`] or the notification methods.
pub struct AnecdoteApp {
    store: AnecdoteStore,
    notifications: NotificationScheduler,
    notification_duration: Duration,
}

impl AnecdoteApp {
    pub fn new(store: AnecdoteStore, runtime: Handle, notification_duration: Duration) -> Self {
        Self {
            store,
            notifications: NotificationScheduler::new(runtime),
            notification_duration,
        }
    }

    pub fn from_settings(settings: &Settings, runtime: Handle) -> Self {
        let store = if settings.seed_anecdotes {
            AnecdoteStore::seeded()
        } else {
            AnecdoteStore::new()
        };
        Self::new(store, runtime, settings.notification_duration())
    }

    pub fn add(&mut self, candidate: NewAnecdote) -> AnecdoteId {
        let message = creation_message(&candidate.content);
        let id = self.store.add(candidate);
        info!(anecdote_id = id.0, total = self.store.len(), "anecdote created");
        self.notifications.notify(message, self.notification_duration);
        id
    }

    pub fn vote(&mut self, id: AnecdoteId) -> VoteOutcome {
        let outcome = self.store.vote(id);
        if let VoteOutcome::Voted { votes } = outcome {
            debug!(anecdote_id = id.0, votes, "anecdote voted");
        }
        outcome
    }

    pub fn find_by_id(&self, id: AnecdoteId) -> Option<&Anecdote> {
        self.store.find_by_id(id)
    }

    pub fn anecdotes(&self) -> &[Anecdote] {
        self.store.anecdotes()
    }

    pub fn store(&self) -> &AnecdoteStore {
        &self.store
    }

    pub fn notification(&self) -> String {
        self.notifications.message()
    }

    pub fn notifications(&self) -> &NotificationScheduler {
        &self.notifications
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.notify(message, self.notification_duration);
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_duration
    }

    pub fn resolve(&self, route: Option<Route>) -> View<'_> {
        match route {
            Some(Route::List) => View::List(self.store.anecdotes()),
            Some(Route::Create) => View::Create,
            Some(Route::About) => View::About,
            Some(Route::Anecdote(id)) => View::Anecdote(id.and_then(|id| self.find_by_id(id))),
            None => View::NotFound,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
