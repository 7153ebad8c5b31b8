use crate::config::Config;
use crate::error::{ClientError, Result};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

/// Opens a detail chart somewhere outside the page.
pub trait ChartOpener: Send + Sync {
    /// `path` is server-relative, e.g. `/static/images/result_mpl_AAPL.png`.
    fn open(&self, path: &str) -> Result<()>;
}

/// Hands the chart's url to `$BROWSER`, or to the platform's default opener.
#[derive(Clone, Debug)]
pub struct SystemBrowser {
    config: Config,
}

impl SystemBrowser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn command(&self, url: &str) -> Command {
        let mut cmd = match &self.config.browser {
            Some(browser) => Command::new(browser),
            None if cfg!(target_os = "macos") => Command::new("open"),
            None if cfg!(target_os = "windows") => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "start", ""]);
                cmd
            }
            None => Command::new("xdg-open"),
        };
        cmd.arg(url);
        cmd
    }
}

impl ChartOpener for SystemBrowser {
    fn open(&self, path: &str) -> Result<()> {
        let url = self.config.url(path);
        debug!("opening {url}");

        let mut child = self
            .command(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ClientError::Browser {
                url: url.clone(),
                reason: err.to_string(),
            })?;

        // openers exit right away, but the exit status still has to be collected
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => warn!("opener for {url} exited with {status}"),
            Ok(_) => {}
            Err(err) => warn!("failed to wait on opener for {url}, error({err})"),
        });
        Ok(())
    }
}
