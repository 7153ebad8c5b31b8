use reviewer_client::Config;
use reviewer_tui::{app::AppResult, logging};
use tracing::Level;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::from_env();
    logging::init(&config.log_file, Level::INFO)?;
    reviewer_tui::run(config).await
}
