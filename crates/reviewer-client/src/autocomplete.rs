use crate::api::ReviewApi;
use crate::ticker::{suggest, Suggestion};
use tracing::{debug, error, trace};

/// Upper-case the search field in place; applied after every keystroke.
pub fn normalize(field: &mut String) {
    if field.chars().any(char::is_lowercase) {
        *field = field.to_uppercase();
    }
}

/// Look up suggestions for `term`.
///
/// Never fails: a transport or decoding error is logged and produces no suggestions.
pub async fn source<A: ReviewApi>(api: &A, term: &str) -> Vec<Suggestion> {
    match api.get_tickers().await {
        Ok(tickers) => {
            let suggestions = suggest(&tickers, term);
            trace!(
                "{} of {} tickers match \"{term}\"",
                suggestions.len(),
                tickers.len()
            );
            suggestions
        }
        Err(err) => {
            error!("failed to fetch tickers, error({err})");
            Vec::new()
        }
    }
}

/// Suggestion state for the search field.
///
/// Every lookup is stamped with a token; only the response to the most recent lookup is
/// shown, so a slow reply to an older keystroke can't overwrite a newer one.
#[derive(Debug, Default)]
pub struct Autocomplete {
    issued: u64,
    suggestions: Vec<Suggestion>,
    highlighted: Option<usize>,
}

impl Autocomplete {
    /// Stamp a new lookup; any reply to an earlier one is now stale.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Show `suggestions` if `token` belongs to the latest lookup. Returns whether they were
    /// accepted.
    pub fn accept(&mut self, token: u64, suggestions: Vec<Suggestion>) -> bool {
        if token != self.issued {
            debug!(
                "discarding stale suggestions, token {token} (latest {})",
                self.issued
            );
            return false;
        }
        self.suggestions = suggestions;
        self.highlighted = None;
        true
    }

    /// Hide the list and invalidate whatever is still in flight.
    pub fn close(&mut self) {
        self.issued += 1;
        self.suggestions.clear();
        self.highlighted = None;
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < self.suggestions.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }
}
