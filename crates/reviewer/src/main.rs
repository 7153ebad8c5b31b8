mod cli;
mod page;

use anyhow::anyhow;
use clap::Parser;
use cli::{Cli, Commands, TraceLevel};
use reviewer_client::Config;
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// print traces to stderr, keeping stdout for results
fn preprocess(trace_level: Level) {
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber).expect("Set subscriber");
}

fn level(trace_level: TraceLevel) -> Level {
    match trace_level {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::ERROR => Level::ERROR,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::TRACE => Level::TRACE,
        TraceLevel::WARN => Level::WARN,
    }
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let trace_level = cli.trace.map(level);

    use Commands::*;
    match cli.command.unwrap_or(Tui) {
        // `reviewer [tui]`: the interactive page; traces go to the log file
        Tui => {
            if let Some(trace_level) = trace_level {
                reviewer_tui::logging::init(&config.log_file, trace_level)
                    .map_err(|err| anyhow!("failed to open {}: {err}", config.log_file))?;
            }
            reviewer_tui::run(config)
                .await
                .map_err(|err| anyhow!("{err}"))?;
        }

        command => {
            if let Some(trace_level) = trace_level {
                preprocess(trace_level);
            }
            trace!("running {command:?} against {}", config.base_url);

            match command {
                Suggest { term } => page::suggest(config, &term).await?,
                Reviews => page::reviews(config).await?,
                Search { stock_name } => page::search(config, &stock_name).await?,
                Chart { stock_name } => page::chart(config, &stock_name)?,
                Tui => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}
