use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::search::{HistoryReceipt, SearchHistory};
use crate::ticker::Ticker;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, error, trace};

pub const TICKERS_PATH: &str = "/api/get_tickers";
pub const IMAGES_PATH: &str = "/api/get_images";
pub const HISTORY_PATH: &str = "/save_search_history";

/// The three endpoints of the review service.
///
/// Implementations return errors; deciding what a failure means for the page is left to the
/// callers in [`crate::autocomplete`], [`crate::review`] and [`crate::search`].
pub trait ReviewApi: Send + Sync {
    /// `GET /api/get_tickers`: the full ticker list, unfiltered.
    fn get_tickers(&self) -> impl Future<Output = Result<Vec<Ticker>>> + Send;

    /// `GET /api/get_images`: filenames of the published comparison charts.
    fn get_images(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `POST /save_search_history`.
    fn save_search_history(
        &self,
        record: &SearchHistory,
    ) -> impl Future<Output = Result<HistoryReceipt>> + Send;
}

/// [`ReviewApi`] over HTTP, with [`reqwest`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: HttpClient,
    config: Config,
}

impl HttpApi {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        trace!("GET {url}");
        let response = self.client.get(&url).send().await.map_err(|err| {
            error!("failed to fetch {url}, error({err})");
            err
        })?;
        read_json(url, response).await
    }
}

/// Check the status, then decode the body.
async fn read_json<T: DeserializeOwned>(url: String, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status { url, status });
    }

    let body = response.bytes().await?;
    debug!("{} bytes received from {url}", body.len());
    serde_json::from_slice(&body).map_err(|err| {
        error!("failed to parse JSON from {url}, error({err})");
        ClientError::from(err)
    })
}

impl ReviewApi for HttpApi {
    async fn get_tickers(&self) -> Result<Vec<Ticker>> {
        self.get_json(TICKERS_PATH).await
    }

    async fn get_images(&self) -> Result<Vec<String>> {
        self.get_json(IMAGES_PATH).await
    }

    async fn save_search_history(&self, record: &SearchHistory) -> Result<HistoryReceipt> {
        let url = self.config.url(HISTORY_PATH);
        trace!("POST {url} {record:?}");
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|err| {
                error!("failed to post {url}, error({err})");
                err
            })?;
        read_json(url, response).await
    }
}
