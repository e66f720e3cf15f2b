//! Controlled text input state.

/// Input type reported to the control a [`Field`] is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldKind {
    #[default]
    Text,
    Url,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
        }
    }
}

/// Mutable handle on a field, shaped for direct attachment to a text input:
/// the control reads `value`/`kind` and reports edits through `on_change`.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldBinding<'a> {
    field: &'a mut Field,
}

impl FieldBinding<'_> {
    pub fn value(&self) -> &str {
        &self.field.value
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.field.on_change(value);
    }
}

/// One form input's value. Every operation is total: any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    kind: FieldKind,
    value: String,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub fn url() -> Self {
        Self::new(FieldKind::Url)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn binding(&mut self) -> FieldBinding<'_> {
        FieldBinding { field: self }
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
#[path = "tests/field_tests.rs"]
mod tests;
