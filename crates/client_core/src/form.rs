use shared::domain::{AnecdoteId, NewAnecdote};

use crate::{field::Field, AnecdoteApp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Content,
    Author,
    Info,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Content, Self::Author, Self::Info];

    pub fn label(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Author => "author",
            Self::Info => "url for more info",
        }
    }
}

/// State behind the "create new" view: one controlled field per input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub content: Field,
    pub author: Field,
    pub info: Field,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            content: Field::text(),
            author: Field::text(),
            info: Field::url(),
        }
    }
}

impl CreateForm {
    pub fn candidate(&self) -> NewAnecdote {
        NewAnecdote::new(
            self.content.value(),
            self.author.value(),
            self.info.value(),
        )
    }

    pub fn field(&self, which: FormField) -> &Field {
        match which {
            FormField::Content => &self.content,
            FormField::Author => &self.author,
            FormField::Info => &self.info,
        }
    }

    pub fn field_mut(&mut self, which: FormField) -> &mut Field {
        match which {
            FormField::Content => &mut self.content,
            FormField::Author => &mut self.author,
            FormField::Info => &mut self.info,
        }
    }

    /// Adds the current values as a new anecdote and clears the fields, as if
    /// the form had been unmounted and mounted again.
    pub fn submit(&mut self, app: &mut AnecdoteApp) -> AnecdoteId {
        let id = app.add(self.candidate());
        self.reset();
        id
    }

    pub fn reset(&mut self) {
        self.content.reset();
        self.author.reset();
        self.info.reset();
    }

    pub fn is_untouched(&self) -> bool {
        self.content.is_empty() && self.author.is_empty() && self.info.is_empty()
    }
}
