//! Path routing and navigation history.

use std::mem;

use shared::domain::AnecdoteId;
use tracing::debug;
use url::Url;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost/";

pub const LIST_PATH: &str = "/";
pub const CREATE_PATH: &str = "/create";
pub const ABOUT_PATH: &str = "/about";

pub fn anecdote_path(id: AnecdoteId) -> String {
    format!("/anecdotes/{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    About,
    /// `/anecdotes/:id`. A parameter that is not a number still selects this
    /// route, it just never matches a stored anecdote.
    Anecdote(Option<AnecdoteId>),
}

impl Route {
    /// Matches an application path (no query or fragment). A single trailing
    /// slash is ignored.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let mut segments = path.strip_prefix('/')?.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Some(Self::List),
            (Some("create"), None, None) => Some(Self::Create),
            (Some("about"), None, None) => Some(Self::About),
            (Some("anecdotes"), Some(id), None) if !id.is_empty() => {
                Some(Self::Anecdote(id.parse::<i64>().ok().map(AnecdoteId)))
            }
            _ => None,
        }
    }
}

/// Current location plus a back stack. Absolute hrefs (`/create`) resolve
/// against the application base, relative ones (`anecdotes/2`) against the
/// current location.
#[derive(Debug, Clone)]
pub struct Navigator {
    base: Url,
    location: Url,
    history: Vec<Url>,
}

impl Navigator {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::OpaqueBaseUrl(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self {
            location: base.clone(),
            base,
            history: Vec::new(),
        })
    }

    pub fn navigate(&mut self, href: &str) -> Result<(), ClientError> {
        let joined = match href.strip_prefix('/') {
            Some(app_relative) => self.base.join(app_relative),
            None => self.location.join(href),
        };
        let next = joined.map_err(|source| ClientError::InvalidLocation {
            href: href.to_string(),
            source,
        })?;
        if next == self.location {
            return Ok(());
        }

        self.history.push(mem::replace(&mut self.location, next));
        debug!(path = self.current_path(), "navigated");
        Ok(())
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.location = previous;
                debug!(path = self.current_path(), "navigated back");
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Location path relative to the base, always starting with `/`.
    /// `None` when the location has left the application base.
    pub fn app_path(&self) -> Option<String> {
        if self.location.origin() != self.base.origin() {
            return None;
        }
        let base_path = self.base.path().trim_end_matches('/');
        let rest = self.location.path().strip_prefix(base_path)?;
        if rest.is_empty() {
            return Some("/".to_string());
        }
        rest.starts_with('/').then(|| rest.to_string())
    }

    pub fn current_path(&self) -> &str {
        self.location.path()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.app_path().as_deref().and_then(Route::resolve)
    }

    pub fn location(&self) -> &Url {
        &self.location
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
