//! Actions emitted by views and applied by the reducer.

use shared::domain::AnecdoteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Navigate(String),
    Back,
    Vote(AnecdoteId),
    SubmitAnecdote,
    ResetForm,
    DismissNotification,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::Back => "back",
            Self::Vote(_) => "vote",
            Self::SubmitAnecdote => "submit_anecdote",
            Self::ResetForm => "reset_form",
            Self::DismissNotification => "dismiss_notification",
        }
    }
}
