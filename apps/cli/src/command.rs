//! REPL line parsing.

use shared::domain::{AnecdoteId, NewAnecdote};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list                                  show all anecdotes
  open <path>                           navigate, e.g. `open /about` or `open anecdotes/2`
  show                                  render the current route
  vote <id>                             vote for an anecdote
  add <content> | <author> | <info>     create an anecdote and return to the list
  notification                          print the notification banner
  dismiss                               hide the notification banner
  back                                  go to the previous location
  help                                  this text
  quit                                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Open(String),
    Show,
    Vote(AnecdoteId),
    Add(NewAnecdote),
    Notification,
    Dismiss,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplParseError {
    #[error("unknown command '{0}'; try `help`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{command}` takes no arguments")]
    UnexpectedArgument { command: &'static str },
    #[error("'{0}' is not a valid anecdote id")]
    InvalidId(String),
    #[error("expected `add <content> | <author> | <info>`")]
    MalformedAdd,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, ReplParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => no_args("list", rest, ReplCommand::List)?,
        "show" => no_args("show", rest, ReplCommand::Show)?,
        "notification" => no_args("notification", rest, ReplCommand::Notification)?,
        "dismiss" => no_args("dismiss", rest, ReplCommand::Dismiss)?,
        "back" => no_args("back", rest, ReplCommand::Back)?,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        "open" | "go" => {
            if rest.is_empty() {
                return Err(ReplParseError::MissingArgument("open"));
            }
            ReplCommand::Open(rest.to_string())
        }
        "vote" => {
            if rest.is_empty() {
                return Err(ReplParseError::MissingArgument("vote"));
            }
            let id = rest
                .parse::<i64>()
                .map_err(|_| ReplParseError::InvalidId(rest.to_string()))?;
            ReplCommand::Vote(AnecdoteId(id))
        }
        "add" => ReplCommand::Add(parse_add(rest)?),
        other => return Err(ReplParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn no_args(
    command: &'static str,
    rest: &str,
    parsed: ReplCommand,
) -> Result<ReplCommand, ReplParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ReplParseError::UnexpectedArgument { command })
    }
}

// Any string is accepted for each part; only the separators are checked.
fn parse_add(rest: &str) -> Result<NewAnecdote, ReplParseError> {
    if rest.is_empty() {
        return Err(ReplParseError::MissingArgument("add"));
    }
    let mut parts = rest.split('|').map(str::trim);
    let content = parts.next().unwrap_or_default();
    let author = parts.next().unwrap_or_default();
    let info = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(ReplParseError::MalformedAdd);
    }
    Ok(NewAnecdote::new(content, author, info))
}
