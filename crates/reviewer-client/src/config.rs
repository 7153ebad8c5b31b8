use dotenv::var;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILE: &str = "reviewer.log";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read from the environment (and `.env`).
///
/// | variable                | default                   |
/// |-------------------------|---------------------------|
/// | `REVIEWER_BASE_URL`     | `http://127.0.0.1:5000`   |
/// | `USER_AGENT`            | `reviewer/<version>`      |
/// | `REVIEWER_TIMEOUT_SECS` | `10`                      |
/// | `BROWSER`               | platform opener           |
/// | `REVIEWER_LOG`          | `reviewer.log`            |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub browser: Option<String>,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("reviewer/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            browser: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let default = Self::default();

        let timeout = match var("REVIEWER_TIMEOUT_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(err) => {
                    tracing::warn!("ignoring REVIEWER_TIMEOUT_SECS=\"{secs}\", error({err})");
                    default.timeout
                }
            },
            Err(_) => default.timeout,
        };

        Self {
            base_url: var("REVIEWER_BASE_URL").unwrap_or(default.base_url),
            user_agent: var("USER_AGENT").unwrap_or(default.user_agent),
            timeout,
            browser: var("BROWSER").ok().filter(|cmd| !cmd.trim().is_empty()),
            log_file: var("REVIEWER_LOG").unwrap_or(default.log_file),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join a server-relative `path` onto the base url.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
