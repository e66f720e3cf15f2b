//! State transitions for queued UI actions.

use client_core::{
    router::LIST_PATH, AnecdoteApp, ClientError, CreateForm, Navigator, Route, Settings, View,
};
use tokio::runtime::Handle;

use crate::controller::events::UiAction;

pub struct GuiState {
    pub app: AnecdoteApp,
    pub navigator: Navigator,
    pub form: CreateForm,
}

impl GuiState {
    pub fn new(settings: &Settings, runtime: Handle) -> Result<Self, ClientError> {
        Ok(Self {
            app: AnecdoteApp::from_settings(settings, runtime),
            navigator: Navigator::new(&settings.base_url)?,
            form: CreateForm::default(),
        })
    }

    pub fn current_route(&self) -> Option<Route> {
        self.navigator.current_route()
    }

    pub fn current_view(&self) -> View<'_> {
        self.app.resolve(self.current_route())
    }
}

pub fn apply_action(state: &mut GuiState, action: UiAction) {
    match action {
        UiAction::Navigate(href) => navigate(state, &href),
        UiAction::Back => {
            state.navigator.back();
        }
        UiAction::Vote(id) => {
            state.app.vote(id);
        }
        UiAction::SubmitAnecdote => {
            state.form.submit(&mut state.app);
            navigate(state, LIST_PATH);
        }
        UiAction::ResetForm => state.form.reset(),
        UiAction::DismissNotification => state.app.dismiss_notification(),
    }
}

fn navigate(state: &mut GuiState, href: &str) {
    if let Err(err) = state.navigator.navigate(href) {
        tracing::warn!("ignoring navigation to '{href}': {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_action, GuiState};
    use crate::controller::events::UiAction;
    use client_core::{FormField, Route, Settings, View};
    use shared::domain::AnecdoteId;
    use std::time::Duration;
    use tokio::runtime::Handle;

    fn state() -> GuiState {
        GuiState::new(&Settings::default(), Handle::current()).expect("gui state")
    }

    fn edit(state: &mut GuiState, field: FormField, value: &str) {
        state.form.field_mut(field).binding().on_change(value);
    }

    #[tokio::test(start_paused = true)]
    async fn starts_on_the_list_view() {
        let state = state();
        assert_eq!(state.current_route(), Some(Route::List));
        assert!(matches!(state.current_view(), View::List(list) if list.len() == 2));
    }

    #[tokio::test(start_paused = true)]
    async fn list_link_then_vote_updates_detail_view() {
        let mut state = state();
        apply_action(&mut state, UiAction::Navigate("anecdotes/2".to_string()));
        apply_action(&mut state, UiAction::Vote(AnecdoteId(2)));

        match state.current_view() {
            View::Anecdote(Some(anecdote)) => {
                assert_eq!(anecdote.id, AnecdoteId(2));
                assert_eq!(anecdote.votes, 1);
            }
            other => panic!("unexpected view: {other:?}"),
        }
        assert_eq!(
            state.app.find_by_id(AnecdoteId(1)).map(|a| a.votes),
            Some(0)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn submitting_adds_notifies_and_returns_to_list() {
        let mut state = state();
        apply_action(&mut state, UiAction::Navigate("/create".to_string()));
        edit(&mut state, FormField::Content, "test");
        edit(&mut state, FormField::Author, "a");
        edit(&mut state, FormField::Info, "http://x");
        apply_action(&mut state, UiAction::SubmitAnecdote);

        assert_eq!(state.current_route(), Some(Route::List));
        assert_eq!(state.app.anecdotes().len(), 3);
        assert!(state.form.is_untouched());
        assert!(state.app.notification().contains("test"));

        tokio::time::sleep(Duration::from_millis(5001)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(state.app.notification(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_clears_fields_and_stays_on_form() {
        let mut state = state();
        apply_action(&mut state, UiAction::Navigate("/create".to_string()));
        edit(&mut state, FormField::Content, "draft");
        apply_action(&mut state, UiAction::ResetForm);

        assert!(state.form.is_untouched());
        assert_eq!(state.current_route(), Some(Route::Create));
        assert_eq!(state.app.anecdotes().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn voting_for_a_missing_anecdote_changes_nothing() {
        let mut state = state();
        let before = state.app.store().clone();
        apply_action(&mut state, UiAction::Navigate("/anecdotes/77".to_string()));
        apply_action(&mut state, UiAction::Vote(AnecdoteId(77)));

        assert_eq!(state.app.store(), &before);
        assert_eq!(state.current_view(), View::Anecdote(None));
    }

    #[tokio::test(start_paused = true)]
    async fn back_and_dismiss() {
        let mut state = state();
        apply_action(&mut state, UiAction::Navigate("/about".to_string()));
        apply_action(&mut state, UiAction::Back);
        assert_eq!(state.current_route(), Some(Route::List));

        state.app.notify("hello");
        apply_action(&mut state, UiAction::DismissNotification);
        assert_eq!(state.app.notification(), "");
    }
}
