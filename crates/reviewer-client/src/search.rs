use crate::api::ReviewApi;
use crate::review::ReviewList;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Shown whenever a search finds no review.
pub const PENDING_NOTICE: &str = "Review is being prepared. Please try again later.";

/// Body of `POST /save_search_history`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchHistory {
    pub stock_name: String,
}

/// Reply to `POST /save_search_history`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HistoryReceipt {
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Position of the first review whose heading contains the name.
    Found { index: usize, stock_name: String },
    NotFound { stock_name: String },
}

impl SearchOutcome {
    pub fn stock_name(&self) -> &str {
        match self {
            SearchOutcome::Found { stock_name, .. } | SearchOutcome::NotFound { stock_name } => {
                stock_name
            }
        }
    }
}

/// Find the first review whose heading contains `input` (upper-cased).
///
/// Plain substring matching: "AA" lands on "AAPL vs VOO", and so does "VOO".
pub fn route(reviews: &ReviewList, input: &str) -> SearchOutcome {
    let stock_name = input.to_uppercase();
    match reviews
        .iter()
        .position(|review| review.heading().contains(&stock_name))
    {
        Some(index) => SearchOutcome::Found { index, stock_name },
        None => SearchOutcome::NotFound { stock_name },
    }
}

/// Record a search that had no review. Failures are only logged.
pub async fn save_history<A: ReviewApi>(api: &A, record: &SearchHistory) {
    match api.save_search_history(record).await {
        Ok(HistoryReceipt { success: true }) => {
            info!("saved {} to search history", record.stock_name)
        }
        Ok(HistoryReceipt { success: false }) => {
            error!("server refused to save {} to search history", record.stock_name)
        }
        Err(err) => error!("failed to save search history, error({err})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    fn reviews() -> ReviewList {
        ReviewList::from_filenames([
            "comparison_QQQ_VOO.png",
            "comparison_AAPL_VOO.png",
            "comparison_AA_VOO.png",
        ])
    }

    #[test]
    fn lower_case_search_finds_review() {
        assert_eq!(
            route(&reviews(), "aapl"),
            SearchOutcome::Found {
                index: 1,
                stock_name: "AAPL".into()
            }
        );
    }

    #[test]
    fn first_substring_match_wins() {
        // "AA vs VOO" is listed after "AAPL vs VOO"
        assert_eq!(
            route(&reviews(), "AA"),
            SearchOutcome::Found {
                index: 1,
                stock_name: "AA".into()
            }
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(
            route(&reviews(), "zzzz"),
            SearchOutcome::NotFound {
                stock_name: "ZZZZ".into()
            }
        );
    }

    #[test]
    fn nothing_is_found_in_an_empty_list() {
        let outcome = route(&ReviewList::default(), "AAPL");
        assert!(matches!(outcome, SearchOutcome::NotFound { .. }));
        assert_eq!(outcome.stock_name(), "AAPL");
    }

    #[test]
    fn history_body_shape() {
        let record = SearchHistory {
            stock_name: "ZZZZ".into(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"stock_name":"ZZZZ"}"#
        );
    }

    #[tokio::test]
    async fn saving_history_survives_failures() {
        let record = SearchHistory {
            stock_name: "ZZZZ".into(),
        };

        let api = FakeApi::offline();
        save_history(&api, &record).await;
        assert!(api.history().is_empty());

        let api = FakeApi::default().refusing_history();
        save_history(&api, &record).await;
        assert_eq!(api.history(), vec![record]);
    }
}
