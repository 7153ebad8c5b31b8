use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Sets the level of tracing.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,

    /// Address of the review service; overrides REVIEWER_BASE_URL.
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the reviews in the terminal (the default).
    Tui,

    /// List the tickers whose symbol or name contains TERM.
    Suggest {
        /// Part of a symbol or a company name; case is ignored.
        term: String,
    },

    /// List the published reviews.
    Reviews,

    /// Look for a review, recording the search if there isn't one yet.
    Search {
        /// Stock to look for; case is ignored.
        stock_name: String,
    },

    /// Open the detail chart of a stock in the browser.
    Chart {
        /// Stock whose chart to open; case is ignored.
        stock_name: String,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
