use colored::Colorize;
use reviewer_client::review::{self, chart_path};
use reviewer_client::search::SearchOutcome;
use reviewer_client::{autocomplete, ChartOpener, Config, HttpApi, PageController, SystemBrowser};
use tracing::debug;

/// Print every ticker matching `term`.
pub(crate) async fn suggest(config: Config, term: &str) -> anyhow::Result<()> {
    let api = HttpApi::new(config)?;
    let suggestions = autocomplete::source(&api, term).await;
    if suggestions.is_empty() {
        println!("no tickers match \"{term}\"");
    }
    for suggestion in suggestions {
        println!("{}", suggestion.label);
    }
    Ok(())
}

/// Print the published reviews, in listing order.
pub(crate) async fn reviews(config: Config) -> anyhow::Result<()> {
    let api = HttpApi::new(config)?;
    let reviews = review::fetch_reviews(&api).await;
    debug!("{} reviews listed", reviews.len());
    for review in &reviews {
        println!(
            "{}  {}",
            review.heading().bold(),
            api.config().url(review.image_url()).dimmed()
        );
    }
    Ok(())
}

/// Route one search the way the page would: show the review, or record the miss.
pub(crate) async fn search(config: Config, stock_name: &str) -> anyhow::Result<()> {
    let api = HttpApi::new(config.clone())?;
    let browser = SystemBrowser::new(config);

    let mut page = PageController::new();
    page.set_field(stock_name);
    let mut effects = page.init();
    effects.extend(page.submit());
    page.run(&api, &browser, effects).await;

    match page.last_outcome() {
        Some(SearchOutcome::Found { index, .. }) => {
            if let Some(review) = page.reviews().get(*index) {
                println!(
                    "{}  {}",
                    review.heading().bold().green(),
                    api.config().url(review.image_url())
                );
                println!("chart: {}", api.config().url(&review.chart_url()));
            }
        }
        Some(SearchOutcome::NotFound { .. }) => {
            if let Some(notice) = page.notice() {
                println!("{}", notice.yellow());
            }
        }
        None => {}
    }
    Ok(())
}

/// Open the detail chart for `stock_name`.
pub(crate) fn chart(config: Config, stock_name: &str) -> anyhow::Result<()> {
    let path = chart_path(stock_name);
    SystemBrowser::new(config.clone()).open(&path)?;
    println!("opened {}", config.url(&path));
    Ok(())
}
