use crate::app::AppResult;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{subscriber, Level};
use tracing_subscriber::FmtSubscriber;

/// Send traces to the file at `path`; stdout belongs to the terminal UI.
pub fn init(path: &str, level: Level) -> AppResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}
