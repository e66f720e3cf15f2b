//! Terminal session: owned app state plus text/JSON rendering of views.

use anyhow::Result;
use client_core::{
    pages, router::LIST_PATH, AnecdoteApp, ClientError, CreateForm, FormField, Navigator,
    Settings, View, VoteOutcome,
};
use serde_json::json;
use shared::domain::{Anecdote, NewAnecdote};
use tokio::runtime::Handle;

use crate::command::{ReplCommand, HELP};

pub enum Step {
    Continue(String),
    Quit,
}

pub struct Session {
    app: AnecdoteApp,
    navigator: Navigator,
    form: CreateForm,
    json: bool,
}

impl Session {
    pub fn new(settings: &Settings, runtime: Handle, json: bool) -> Result<Self, ClientError> {
        Ok(Self {
            app: AnecdoteApp::from_settings(settings, runtime),
            navigator: Navigator::new(&settings.base_url)?,
            form: CreateForm::default(),
            json,
        })
    }

    pub fn execute(&mut self, command: ReplCommand) -> Result<Step> {
        let output = match command {
            ReplCommand::List => self.render(View::List(self.app.anecdotes()))?,
            ReplCommand::Open(href) => {
                self.navigator.navigate(&href)?;
                self.render_current()?
            }
            ReplCommand::Show => self.render_current()?,
            ReplCommand::Vote(id) => match self.app.vote(id) {
                VoteOutcome::Voted { votes } if self.json => {
                    serde_json::to_string_pretty(&json!({ "voted": id, "votes": votes }))?
                }
                VoteOutcome::Voted { votes } => format!("anecdote {id} has {votes} votes"),
                VoteOutcome::NotFound => String::new(),
            },
            ReplCommand::Add(candidate) => {
                self.fill_form(candidate);
                self.form.submit(&mut self.app);
                self.navigator.navigate(LIST_PATH)?;
                if self.json {
                    let mut value = self.view_json(self.app.resolve(self.navigator.current_route()));
                    value["notification"] = json!(self.app.notification());
                    serde_json::to_string_pretty(&value)?
                } else {
                    format!("{}\n{}", self.render_notification()?, self.render_current()?)
                }
            }
            ReplCommand::Notification => self.render_notification()?,
            ReplCommand::Dismiss => {
                self.app.dismiss_notification();
                String::new()
            }
            ReplCommand::Back => {
                self.navigator.back();
                self.render_current()?
            }
            ReplCommand::Help => HELP.to_string(),
            ReplCommand::Quit => return Ok(Step::Quit),
        };
        Ok(Step::Continue(output))
    }

    pub fn app(&self) -> &AnecdoteApp {
        &self.app
    }

    pub fn current_path(&self) -> &str {
        self.navigator.current_path()
    }

    fn fill_form(&mut self, candidate: NewAnecdote) {
        let NewAnecdote {
            content,
            author,
            info,
        } = candidate;
        self.form.field_mut(FormField::Content).on_change(content);
        self.form.field_mut(FormField::Author).on_change(author);
        self.form.field_mut(FormField::Info).on_change(info);
    }

    fn render_current(&self) -> Result<String> {
        self.render(self.app.resolve(self.navigator.current_route()))
    }

    fn render_notification(&self) -> Result<String> {
        let message = self.app.notification();
        if self.json {
            return Ok(serde_json::to_string_pretty(&json!({ "notification": message }))?);
        }
        Ok(if message.is_empty() {
            "(no notification)".to_string()
        } else {
            format!("[{message}]")
        })
    }

    fn render(&self, view: View<'_>) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(&self.view_json(view))?);
        }

        Ok(match view {
            View::List(anecdotes) => render_list(anecdotes),
            View::Create => self.render_form(),
            View::About => render_about(),
            View::Anecdote(Some(anecdote)) => render_anecdote(anecdote),
            View::Anecdote(None) | View::NotFound => String::new(),
        })
    }

    fn view_json(&self, view: View<'_>) -> serde_json::Value {
        match view {
            View::List(anecdotes) => json!({ "view": "list", "anecdotes": anecdotes }),
            View::Create => {
                let fields: Vec<_> = FormField::ALL
                    .into_iter()
                    .map(|which| {
                        let field = self.form.field(which);
                        json!({
                            "label": which.label(),
                            "kind": field.kind().as_str(),
                            "value": field.value(),
                        })
                    })
                    .collect();
                json!({ "view": "create", "fields": fields })
            }
            View::About => json!({ "view": "about" }),
            View::Anecdote(anecdote) => json!({ "view": "anecdote", "anecdote": anecdote }),
            View::NotFound => json!({ "view": null }),
        }
    }

    fn render_form(&self) -> String {
        let mut out = String::from("create a new anecdote\n");
        for field in FormField::ALL {
            out.push_str(&format!(
                "  {}: {}\n",
                field.label(),
                self.form.field(field).value()
            ));
        }
        out.push_str("use `add <content> | <author> | <info>` to submit");
        out
    }
}

fn render_list(anecdotes: &[Anecdote]) -> String {
    let mut out = String::from("Anecdotes");
    for anecdote in anecdotes {
        out.push_str(&format!("\n  [{}] {}", anecdote.id, anecdote.content));
    }
    out
}

fn render_anecdote(anecdote: &Anecdote) -> String {
    let mut out = format!(
        "{}\nby {}\nhas {} votes",
        anecdote.content, anecdote.author, anecdote.votes
    );
    if !anecdote.info.is_empty() {
        out.push_str(&format!("\nfor more info see {}", anecdote.info));
    }
    out
}

fn render_about() -> String {
    format!(
        "{}\n{}\n\n  {}\n\n{}\n\n{} {}. See {} for the source code.",
        pages::ABOUT_TITLE,
        pages::ABOUT_INTRO,
        pages::ABOUT_QUOTE,
        pages::ABOUT_OUTRO,
        pages::FOOTER_PREFIX,
        pages::FOOTER_COURSE_URL,
        pages::FOOTER_SOURCE_URL,
    )
}
