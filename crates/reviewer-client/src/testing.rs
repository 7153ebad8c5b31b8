//! In-memory stand-ins for the review service and the browser.

use crate::api::{ReviewApi, HISTORY_PATH, IMAGES_PATH, TICKERS_PATH};
use crate::browser::ChartOpener;
use crate::error::{ClientError, Result};
use crate::search::{HistoryReceipt, SearchHistory};
use crate::ticker::Ticker;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn apple() -> Ticker {
    Ticker {
        symbol: "AAPL".into(),
        name: "Apple Inc.".into(),
        market: "NASDAQ".into(),
        sector: "Technology".into(),
        industry: "Consumer Electronics".into(),
    }
}

pub(crate) fn microsoft() -> Ticker {
    Ticker {
        symbol: "MSFT".into(),
        name: "Microsoft Corporation".into(),
        market: "NASDAQ".into(),
        sector: "Technology".into(),
        industry: "Software".into(),
    }
}

fn unavailable(path: &str) -> ClientError {
    ClientError::Status {
        url: path.to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// `None` in any slot makes that endpoint fail.
#[derive(Debug)]
pub(crate) struct FakeApi {
    tickers: Option<Vec<Ticker>>,
    images: Option<Vec<String>>,
    history_reply: Option<bool>,
    history: Mutex<Vec<SearchHistory>>,
    history_attempts: AtomicUsize,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            tickers: Some(Vec::new()),
            images: Some(Vec::new()),
            history_reply: Some(true),
            history: Mutex::new(Vec::new()),
            history_attempts: AtomicUsize::new(0),
        }
    }
}

impl FakeApi {
    pub(crate) fn offline() -> Self {
        Self {
            tickers: None,
            images: None,
            history_reply: None,
            history: Mutex::new(Vec::new()),
            history_attempts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_tickers(mut self, tickers: Vec<Ticker>) -> Self {
        self.tickers = Some(tickers);
        self
    }

    pub(crate) fn with_images<const N: usize>(mut self, images: [&str; N]) -> Self {
        self.images = Some(images.iter().map(|image| image.to_string()).collect());
        self
    }

    /// History writes are accepted but answered with `success: false`.
    pub(crate) fn refusing_history(mut self) -> Self {
        self.history_reply = Some(false);
        self
    }

    pub(crate) fn failing_history(mut self) -> Self {
        self.history_reply = None;
        self
    }

    /// Every history record the server accepted, in order.
    pub(crate) fn history(&self) -> Vec<SearchHistory> {
        self.history.lock().unwrap().clone()
    }

    /// History writes issued, whether or not they went through.
    pub(crate) fn history_attempts(&self) -> usize {
        self.history_attempts.load(Ordering::SeqCst)
    }
}

impl ReviewApi for FakeApi {
    async fn get_tickers(&self) -> Result<Vec<Ticker>> {
        self.tickers.clone().ok_or_else(|| unavailable(TICKERS_PATH))
    }

    async fn get_images(&self) -> Result<Vec<String>> {
        self.images.clone().ok_or_else(|| unavailable(IMAGES_PATH))
    }

    async fn save_search_history(&self, record: &SearchHistory) -> Result<HistoryReceipt> {
        self.history_attempts.fetch_add(1, Ordering::SeqCst);
        let success = self.history_reply.ok_or_else(|| unavailable(HISTORY_PATH))?;
        self.history.lock().unwrap().push(record.clone());
        Ok(HistoryReceipt { success })
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ChartOpener for RecordingOpener {
    fn open(&self, path: &str) -> Result<()> {
        self.opened.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
