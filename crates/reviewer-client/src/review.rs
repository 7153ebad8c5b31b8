use crate::api::ReviewApi;
use tracing::{debug, error};

/// Every review compares a stock against this fund.
pub const BENCHMARK: &str = "VOO";

/// Where the server publishes its chart images.
pub const STATIC_IMAGES: &str = "/static/images";

const IMAGE_PREFIX: &str = "comparison_";
const IMAGE_SUFFIX: &str = "_VOO.png";

/// Path of the high-resolution detail chart for `stock_name`.
pub fn chart_path(stock_name: &str) -> String {
    format!("{STATIC_IMAGES}/result_mpl_{}.png", stock_name.to_uppercase())
}

/// A published comparison chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    stock_name: String,
    image_url: String,
}

impl Review {
    /// Build a review from a listed image, e.g. `comparison_AAPL_VOO.png` becomes `AAPL`.
    ///
    /// Only the first occurrence of each token is stripped, and names that don't follow the
    /// pattern are kept whole (upper-cased).
    pub fn from_filename(filename: &str) -> Self {
        let stock_name = filename
            .replacen(IMAGE_PREFIX, "", 1)
            .replacen(IMAGE_SUFFIX, "", 1)
            .to_uppercase();

        Self {
            stock_name,
            image_url: format!("{STATIC_IMAGES}/{filename}"),
        }
    }

    pub fn stock_name(&self) -> &str {
        &self.stock_name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn heading(&self) -> String {
        format!("{} vs {BENCHMARK}", self.stock_name)
    }

    pub fn chart_url(&self) -> String {
        chart_path(&self.stock_name)
    }
}

/// The rendered reviews, in the order the server listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewList(Vec<Review>);

impl ReviewList {
    pub fn from_filenames<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            filenames
                .into_iter()
                .map(|filename| Review::from_filename(filename.as_ref()))
                .collect(),
        )
    }

    pub fn get(&self, index: usize) -> Option<&Review> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReviewList {
    type Item = &'a Review;
    type IntoIter = std::slice::Iter<'a, Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Fetch the published images and turn them into reviews.
///
/// A failed listing is logged and yields an empty list.
pub async fn fetch_reviews<A: ReviewApi>(api: &A) -> ReviewList {
    match api.get_images().await {
        Ok(images) => {
            let reviews = ReviewList::from_filenames(images);
            debug!("{} reviews loaded", reviews.len());
            reviews
        }
        Err(err) => {
            error!("failed to fetch images, error({err})");
            ReviewList::default()
        }
    }
}
