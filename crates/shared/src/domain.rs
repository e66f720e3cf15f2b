use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(AnecdoteId);

/// A stored anecdote. Records are never edited in place; voting swaps in a
/// copy produced by [`Anecdote::with_vote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anecdote {
    pub id: AnecdoteId,
    pub content: String,
    pub author: String,
    pub info: String,
    pub votes: u32,
}

impl Anecdote {
    pub fn with_vote(&self) -> Self {
        Self {
            votes: self.votes.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Candidate produced by the creation form, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnecdote {
    pub content: String,
    pub author: String,
    pub info: String,
}

impl NewAnecdote {
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            info: info.into(),
        }
    }

    pub fn into_anecdote(self, id: AnecdoteId) -> Anecdote {
        Anecdote {
            id,
            content: self.content,
            author: self.author,
            info: self.info,
            votes: 0,
        }
    }
}
