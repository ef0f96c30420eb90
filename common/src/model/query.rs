//! Query parameters accepted by the widget.
//!
//! A search is either a headline listing narrowed by country and category, or
//! a free-text search across the whole archive. Never both.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "ru";
pub const DEFAULT_CATEGORY: Category = Category::Technology;

/// Countries offered in the country selector, as `(code, label)` pairs.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("ru", "Russia"),
    ("ua", "Ukraine"),
    ("us", "United States"),
    ("gb", "United Kingdom"),
    ("de", "Germany"),
    ("fr", "France"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("ca", "Canada"),
    ("au", "Australia"),
];

/// Headline categories supported by the `top-headlines` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// Value sent in the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::General => "General",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }

    /// Parses a selector value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// One search request against the news API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsQuery {
    TopHeadlines { country: String, category: Category },
    Everything { query: String },
}

impl Default for NewsQuery {
    fn default() -> Self {
        NewsQuery::TopHeadlines {
            country: DEFAULT_COUNTRY.to_string(),
            category: DEFAULT_CATEGORY,
        }
    }
}

impl NewsQuery {
    /// Chooses the query for a form submission: a non-blank search text wins,
    /// otherwise the selected country and category are used.
    pub fn from_form(country: &str, category: Category, search: &str) -> NewsQuery {
        let search = search.trim();
        if search.is_empty() {
            NewsQuery::TopHeadlines {
                country: country.to_string(),
                category,
            }
        } else {
            NewsQuery::Everything {
                query: search.to_string(),
            }
        }
    }
}
