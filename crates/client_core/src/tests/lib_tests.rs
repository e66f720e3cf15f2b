use super::*;

use std::time::Duration;

const FIVE_SECONDS: Duration = Duration::from_millis(5000);

fn seeded_app() -> AnecdoteApp {
    AnecdoteApp::new(AnecdoteStore::seeded(), Handle::current(), FIVE_SECONDS)
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn voting_on_seeded_store_touches_only_the_target() {
    let mut app = seeded_app();

    assert_eq!(app.vote(AnecdoteId(2)), VoteOutcome::Voted { votes: 1 });

    assert_eq!(app.anecdotes().len(), 2);
    assert_eq!(app.find_by_id(AnecdoteId(1)).map(|a| a.votes), Some(0));
    assert_eq!(app.find_by_id(AnecdoteId(2)).map(|a| a.votes), Some(1));
    assert_eq!(app.notification(), "");
}

#[tokio::test(start_paused = true)]
async fn adding_announces_the_new_anecdote_then_clears() {
    let mut app = seeded_app();

    let id = app.add(NewAnecdote::new("test", "a", "http://x"));

    assert_eq!(app.anecdotes().len(), 3);
    assert_ne!(id, AnecdoteId(1));
    assert_ne!(id, AnecdoteId(2));
    let added = app.find_by_id(id).expect("added anecdote");
    assert_eq!(added.votes, 0);
    assert_eq!(added.content, "test");

    let message = app.notification();
    assert!(!message.is_empty());
    assert!(message.contains("test"), "unexpected message: {message}");

    tokio::time::sleep(FIVE_SECONDS + Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(app.notification(), "");
}

#[tokio::test(start_paused = true)]
async fn later_add_keeps_its_message_for_a_full_duration() {
    let mut app = seeded_app();
    app.add(NewAnecdote::new("first", "a", "http://x"));
    tokio::time::sleep(Duration::from_millis(4000)).await;
    settle().await;

    app.add(NewAnecdote::new("second", "b", "http://y"));
    tokio::time::sleep(Duration::from_millis(4000)).await;
    settle().await;
    assert!(app.notification().contains("second"));

    tokio::time::sleep(Duration::from_millis(1001)).await;
    settle().await;
    assert_eq!(app.notification(), "");
}

#[tokio::test(start_paused = true)]
async fn form_submission_adds_and_clears_the_fields() {
    let mut app = seeded_app();
    let mut form = CreateForm::default();
    form.content.on_change("Code never lies, comments sometimes do");
    form.author.on_change("Ron Jeffries");
    form.info.on_change("https://ronjeffries.com");
    assert_eq!(form.info.kind(), FieldKind::Url);

    let id = form.submit(&mut app);

    assert!(form.is_untouched());
    let added = app.find_by_id(id).expect("added");
    assert_eq!(added.author, "Ron Jeffries");
    assert_eq!(added.info, "https://ronjeffries.com");
    assert!(app.notification().contains("Code never lies"));
}

#[tokio::test(start_paused = true)]
async fn form_reset_clears_every_field_without_adding() {
    let mut app = seeded_app();
    let mut form = CreateForm::default();
    form.content.on_change("draft");
    form.author.on_change("me");
    form.reset();

    assert!(form.is_untouched());
    assert_eq!(form.candidate(), NewAnecdote::default());
    assert_eq!(app.anecdotes().len(), 2);
    app.dismiss_notification();
    assert_eq!(app.notification(), "");
}

#[tokio::test(start_paused = true)]
async fn resolve_reads_the_store_on_every_call() {
    let mut app = seeded_app();
    let route = Route::resolve("/anecdotes/1");

    match app.resolve(route) {
        View::Anecdote(Some(anecdote)) => assert_eq!(anecdote.votes, 0),
        other => panic!("unexpected view: {other:?}"),
    }

    app.vote(AnecdoteId(1));
    match app.resolve(route) {
        View::Anecdote(Some(anecdote)) => assert_eq!(anecdote.votes, 1),
        other => panic!("unexpected view: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn resolve_covers_every_route() {
    let app = seeded_app();
    assert!(matches!(app.resolve(Some(Route::List)), View::List(list) if list.len() == 2));
    assert_eq!(app.resolve(Some(Route::Create)), View::Create);
    assert_eq!(app.resolve(Some(Route::About)), View::About);
    assert_eq!(
        app.resolve(Some(Route::Anecdote(Some(AnecdoteId(99))))),
        View::Anecdote(None)
    );
    assert_eq!(app.resolve(Some(Route::Anecdote(None))), View::Anecdote(None));
    assert_eq!(app.resolve(None), View::NotFound);
}

#[tokio::test(start_paused = true)]
async fn settings_control_seeding_and_duration() {
    let settings = Settings {
        notification_ms: 250,
        seed_anecdotes: false,
        ..Settings::default()
    };
    let mut app = AnecdoteApp::from_settings(&settings, Handle::current());
    assert!(app.anecdotes().is_empty());
    assert_eq!(app.notification_duration(), Duration::from_millis(250));

    let id = app.add(NewAnecdote::new("only", "me", ""));
    assert_eq!(id, AnecdoteId(1));

    tokio::time::sleep(Duration::from_millis(251)).await;
    settle().await;
    assert_eq!(app.notification(), "");
}

#[test]
fn form_fields_are_addressable_by_name() {
    let mut form = CreateForm::default();
    for which in FormField::ALL {
        form.field_mut(which).on_change(which.label());
    }
    assert_eq!(form.content.value(), "content");
    assert_eq!(form.author.value(), "author");
    assert_eq!(form.field(FormField::Info).value(), "url for more info");
}

#[test]
fn creation_message_embeds_the_content_verbatim() {
    assert_eq!(
        creation_message("Code never lies"),
        "a new anecdote Code never lies created!"
    );
    assert_eq!(creation_message(""), "a new anecdote  created!");
}
