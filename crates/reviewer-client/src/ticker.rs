use serde::{Deserialize, Deserializer, Serialize};

// de
// ----------------------------------------------------------------------------

/// A listed security, as served by `/api/get_tickers`.
///
/// The server dumps a spreadsheet, so anything but the symbol may come through as `null`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    pub symbol: String,
    #[serde(default, deserialize_with = "de_nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "de_nullable")]
    pub market: String,
    #[serde(default, deserialize_with = "de_nullable")]
    pub sector: String,
    #[serde(default, deserialize_with = "de_nullable")]
    pub industry: String,
}

fn de_nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Ticker {
    /// `needle` must already be upper-cased.
    fn matches(&self, needle: &str) -> bool {
        self.symbol.to_uppercase().contains(needle) || self.name.to_uppercase().contains(needle)
    }
}

// suggestions
// ----------------------------------------------------------------------------

/// One autocomplete row: a descriptive `label` to display, and the `value` that lands in the
/// search field when it is picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl From<&Ticker> for Suggestion {
    fn from(ticker: &Ticker) -> Self {
        Self {
            label: format!(
                "{} - {} - {} - {} - {}",
                ticker.symbol, ticker.name, ticker.market, ticker.sector, ticker.industry
            ),
            value: ticker.symbol.clone(),
        }
    }
}

/// Filter `tickers` down to those whose symbol or name contains `term` (ignoring case), in
/// server order.
pub fn suggest(tickers: &[Ticker], term: &str) -> Vec<Suggestion> {
    let needle = term.to_uppercase();
    tickers
        .iter()
        .filter(|ticker| ticker.matches(&needle))
        .map(Suggestion::from)
        .collect()
}
