//! Endpoint construction for the news API.
//!
//! Query values are percent-encoded, so free-text searches containing `&`,
//! `#` or spaces cannot corrupt the request URL.

use url::Url;

use crate::error::Result;
use crate::model::query::NewsQuery;

/// Public NewsAPI v2 root.
pub const DEFAULT_API_BASE: &str = "https://newsapi.org/v2";

const TOP_HEADLINES_PATH: &str = "top-headlines";
const EVERYTHING_PATH: &str = "everything";

/// Base location and credential of the news API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsApi {
    base: String,
    api_key: String,
}

impl NewsApi {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Builds the full request URL for `query`, credential included.
    ///
    /// - `TopHeadlines` → `{base}/top-headlines?country=..&category=..&apiKey=..`
    /// - `Everything` → `{base}/everything?q=..&apiKey=..`
    pub fn url_for(&self, query: &NewsQuery) -> Result<Url> {
        let base = self.base.trim_end_matches('/');
        let url = match query {
            NewsQuery::TopHeadlines { country, category } => Url::parse_with_params(
                &format!("{base}/{TOP_HEADLINES_PATH}"),
                &[
                    ("country", country.as_str()),
                    ("category", category.as_str()),
                    ("apiKey", self.api_key.as_str()),
                ],
            )?,
            NewsQuery::Everything { query } => Url::parse_with_params(
                &format!("{base}/{EVERYTHING_PATH}"),
                &[("q", query.as_str()), ("apiKey", self.api_key.as_str())],
            )?,
        };
        Ok(url)
    }
}

impl Default for NewsApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, "")
    }
}
