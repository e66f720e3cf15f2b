use shared::domain::{Anecdote, AnecdoteId, NewAnecdote};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Voted { votes: u32 },
    NotFound,
}

/// Ordered in-memory anecdote collection. Ids come from a counter that always
/// stays above every id already present; once the counter runs past
/// `i64::MAX`, the lowest positive id nobody holds is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnecdoteStore {
    anecdotes: Vec<Anecdote>,
    // `None` once the counter is exhausted.
    next_id: Option<i64>,
}

impl Default for AnecdoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnecdoteStore {
    pub fn new() -> Self {
        Self {
            anecdotes: Vec::new(),
            next_id: Some(1),
        }
    }

    pub fn with_anecdotes(anecdotes: Vec<Anecdote>) -> Self {
        let next_id = anecdotes
            .iter()
            .map(|anecdote| anecdote.id.0)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { anecdotes, next_id }
    }

    pub fn seeded() -> Self {
        Self::with_anecdotes(vec![
            Anecdote {
                id: AnecdoteId(1),
                content: "If it hurts, do it more often".to_string(),
                author: "Jez Humble".to_string(),
                info: "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html".to_string(),
                votes: 0,
            },
            Anecdote {
                id: AnecdoteId(2),
                content: "Premature optimization is the root of all evil".to_string(),
                author: "Donald Knuth".to_string(),
                info: "http://wiki.c2.com/?PrematureOptimization".to_string(),
                votes: 0,
            },
        ])
    }

    pub fn add(&mut self, candidate: NewAnecdote) -> AnecdoteId {
        let id = self.allocate_id();
        self.anecdotes.push(candidate.into_anecdote(id));
        id
    }

    pub fn vote(&mut self, id: AnecdoteId) -> VoteOutcome {
        let Some(slot) = self.anecdotes.iter_mut().find(|anecdote| anecdote.id == id) else {
            debug!(anecdote_id = id.0, "vote ignored: no anecdote with this id");
            return VoteOutcome::NotFound;
        };
        *slot = slot.with_vote();
        VoteOutcome::Voted { votes: slot.votes }
    }

    pub fn find_by_id(&self, id: AnecdoteId) -> Option<&Anecdote> {
        self.anecdotes.iter().find(|anecdote| anecdote.id == id)
    }

    pub fn anecdotes(&self) -> &[Anecdote] {
        &self.anecdotes
    }

    pub fn len(&self) -> usize {
        self.anecdotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anecdotes.is_empty()
    }

    fn allocate_id(&mut self) -> AnecdoteId {
        if let Some(next) = self.next_id {
            self.next_id = next.checked_add(1);
            return AnecdoteId(next);
        }

        let mut taken: Vec<i64> = self
            .anecdotes
            .iter()
            .map(|anecdote| anecdote.id.0)
            .filter(|id| *id > 0)
            .collect();
        taken.sort_unstable();
        taken.dedup();
        // At most `taken.len()` steps, so this cannot overflow.
        let mut free = 1;
        for id in taken {
            if id != free {
                break;
            }
            free += 1;
        }
        debug!(anecdote_id = free, "id counter exhausted, reusing the lowest free id");
        AnecdoteId(free)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
