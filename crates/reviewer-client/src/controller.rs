use crate::api::ReviewApi;
use crate::autocomplete::{self, Autocomplete};
use crate::browser::ChartOpener;
use crate::review::{self, ReviewList};
use crate::search::{self, SearchHistory, SearchOutcome, PENDING_NOTICE};
use crate::ticker::Suggestion;
use tracing::{debug, error, info, trace};

/// Work the page wants done outside itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the published reviews.
    LoadReviews,

    /// Fetch suggestions for `term`, stamped with `token`.
    Lookup { token: u64, term: String },

    /// Record a search that had no review.
    SaveHistory(SearchHistory),

    /// Open a detail chart, by server-relative path.
    OpenChart(String),
}

/// Results of an [`Effect`], fed back through [`PageController::complete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Reviews(ReviewList),
    Suggestions {
        token: u64,
        suggestions: Vec<Suggestion>,
    },
}

/// Carry out `effect`. Nothing here fails: every error is logged and degraded.
pub async fn perform<A, O>(api: &A, opener: &O, effect: Effect) -> Option<Completion>
where
    A: ReviewApi,
    O: ChartOpener + ?Sized,
{
    trace!("performing {effect:?}");
    match effect {
        Effect::LoadReviews => Some(Completion::Reviews(review::fetch_reviews(api).await)),
        Effect::Lookup { token, term } => Some(Completion::Suggestions {
            token,
            suggestions: autocomplete::source(api, &term).await,
        }),
        Effect::SaveHistory(record) => {
            search::save_history(api, &record).await;
            None
        }
        Effect::OpenChart(path) => {
            if let Err(err) = opener.open(&path) {
                error!("failed to open chart, error({err})");
            }
            None
        }
    }
}

/// State of the review page: the search field, its suggestions, the rendered reviews and
/// where the view is scrolled.
///
/// Methods never touch the network; those that need something fetched or sent return
/// [`Effect`]s, and their results come back via [`PageController::complete`].
#[derive(Debug, Default)]
pub struct PageController {
    field: String,
    autocomplete: Autocomplete,
    reviews: ReviewList,
    loaded: bool,
    deferred_search: Option<String>,
    scrolled_to: Option<usize>,
    notice: Option<&'static str>,
    last_outcome: Option<SearchOutcome>,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The one-off work to do when the page opens.
    pub fn init(&self) -> Vec<Effect> {
        vec![Effect::LoadReviews]
    }

    // field
    // ----------------------------------------------------------------------------

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Type `c` into the field.
    pub fn input(&mut self, c: char) -> Vec<Effect> {
        self.field.push(c);
        self.keystroke()
    }

    pub fn backspace(&mut self) -> Vec<Effect> {
        self.field.pop();
        self.keystroke()
    }

    /// Replace the field, e.g. from a pasted value.
    pub fn set_field(&mut self, value: &str) -> Vec<Effect> {
        self.field = value.to_string();
        self.keystroke()
    }

    fn keystroke(&mut self) -> Vec<Effect> {
        autocomplete::normalize(&mut self.field);
        if self.field.is_empty() {
            self.autocomplete.close();
            return Vec::new();
        }
        vec![Effect::Lookup {
            token: self.autocomplete.issue(),
            term: self.field.clone(),
        }]
    }

    // suggestions
    // ----------------------------------------------------------------------------

    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    pub fn autocomplete_mut(&mut self) -> &mut Autocomplete {
        &mut self.autocomplete
    }

    /// Pick a suggestion: its value (not its label) replaces the field and the search runs.
    pub fn select_suggestion(&mut self, index: usize) -> Vec<Effect> {
        let Some(value) = self
            .autocomplete
            .suggestions()
            .get(index)
            .map(|suggestion| suggestion.value.clone())
        else {
            return Vec::new();
        };
        debug!("suggestion {value} selected");
        self.field = value;
        self.autocomplete.close();
        self.submit()
    }

    /// Enter in the field: take the highlighted suggestion if there is one, else search
    /// for what was typed.
    pub fn enter(&mut self) -> Vec<Effect> {
        match self.autocomplete.highlighted() {
            Some(index) => self.select_suggestion(index),
            None => {
                self.autocomplete.close();
                self.submit()
            }
        }
    }

    // reviews
    // ----------------------------------------------------------------------------

    pub fn reviews(&self) -> &ReviewList {
        &self.reviews
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn scrolled_to(&self) -> Option<usize> {
        self.scrolled_to
    }

    /// Move the view by `delta` entries, clamped to the list.
    pub fn scroll_by(&mut self, delta: isize) {
        if self.reviews.is_empty() {
            return;
        }
        let last = self.reviews.len() - 1;
        let current = self.scrolled_to.unwrap_or(0);
        self.scrolled_to = Some(current.saturating_add_signed(delta).min(last));
    }

    /// Open the detail chart of the review at `index`.
    pub fn open_chart(&self, index: usize) -> Vec<Effect> {
        self.reviews
            .get(index)
            .map(|review| vec![Effect::OpenChart(review.chart_url())])
            .unwrap_or_default()
    }

    // search
    // ----------------------------------------------------------------------------

    /// Run the search for the field's current value.
    ///
    /// Before the reviews have loaded the search is held back, and runs for the name
    /// submitted here as soon as they arrive.
    pub fn submit(&mut self) -> Vec<Effect> {
        let target = self.field.to_uppercase();
        if !self.loaded {
            debug!("reviews still loading, deferring search for {target}");
            self.deferred_search = Some(target);
            return Vec::new();
        }
        self.route(&target)
    }

    fn route(&mut self, target: &str) -> Vec<Effect> {
        let outcome = search::route(&self.reviews, target);
        let effects = match &outcome {
            SearchOutcome::Found { index, stock_name } => {
                info!("review for {stock_name} found at position {index}");
                self.scrolled_to = Some(*index);
                Vec::new()
            }
            SearchOutcome::NotFound { stock_name } => {
                info!("no review for {stock_name}");
                self.notice = Some(PENDING_NOTICE);
                vec![Effect::SaveHistory(SearchHistory {
                    stock_name: stock_name.clone(),
                })]
            }
        };
        self.last_outcome = Some(outcome);
        effects
    }

    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // completions
    // ----------------------------------------------------------------------------

    /// Apply the result of a performed [`Effect`].
    pub fn complete(&mut self, completion: Completion) -> Vec<Effect> {
        match completion {
            Completion::Reviews(reviews) => {
                self.reviews = reviews;
                self.loaded = true;
                self.scrolled_to = None;
                match self.deferred_search.take() {
                    Some(target) => self.route(&target),
                    None => Vec::new(),
                }
            }
            Completion::Suggestions { token, suggestions } => {
                self.autocomplete.accept(token, suggestions);
                Vec::new()
            }
        }
    }

    /// Perform `effects` one after another, feeding their results back in, until nothing
    /// is left to do.
    pub async fn run<A, O>(&mut self, api: &A, opener: &O, effects: Vec<Effect>)
    where
        A: ReviewApi,
        O: ChartOpener + ?Sized,
    {
        let mut queue = std::collections::VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            if let Some(completion) = perform(api, opener, effect).await {
                queue.extend(self.complete(completion));
            }
        }
    }
}
