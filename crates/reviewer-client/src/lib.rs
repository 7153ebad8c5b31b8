//! Client side of the stock vs VOO review service.
//!
//! The service publishes pre-generated comparison charts; this crate looks up tickers for
//! autocompletion, lists the published reviews, routes searches to a matching review and
//! records searches that have no review yet.
//!
//! Everything that touches the network goes through [`api::ReviewApi`]. The
//! [`controller::PageController`] itself holds no connection; it turns user actions into
//! [`controller::Effect`]s which the caller performs with [`controller::perform`].

pub mod api;
pub mod autocomplete;
pub mod browser;
pub mod config;
pub mod controller;
pub mod error;
pub mod review;
pub mod search;
pub mod ticker;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{HttpApi, ReviewApi};
pub use browser::{ChartOpener, SystemBrowser};
pub use config::Config;
pub use controller::{perform, Completion, Effect, PageController};
pub use error::{ClientError, Result};
