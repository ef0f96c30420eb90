//! Startup configuration of the widget.
//!
//! Built once in `main` from values baked in at compile time and handed to
//! the component tree as a read-only property. Nothing mutates it afterwards.

use news_common::model::layout::LayoutPolicy;
use news_common::model::query::{Category, DEFAULT_CATEGORY, DEFAULT_COUNTRY};
use news_common::requests::{NewsApi, DEFAULT_API_BASE};
use news_common::template::DEFAULT_PLACEHOLDER_IMAGE;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Endpoint root and credential.
    pub api: NewsApi,
    /// Image used by cards whose article has none.
    pub placeholder_image: String,
    /// Selection used for the initial headline load and the form defaults.
    pub default_country: String,
    pub default_category: Category,
    /// Card grouping applied when rendering.
    pub layout: LayoutPolicy,
    pub toast_duration_ms: u32,
}

impl WidgetConfig {
    /// Reads `NEWS_API_BASE`, `NEWS_API_KEY` and `NEWS_LAYOUT` as they were
    /// set when the bundle was compiled.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("NEWS_API_BASE"),
            option_env!("NEWS_API_KEY"),
            option_env!("NEWS_LAYOUT"),
        )
    }

    fn from_values(base: Option<&str>, api_key: Option<&str>, layout: Option<&str>) -> Self {
        let base = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        let layout = match layout.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
            Some("plain") => LayoutPolicy::Plain,
            _ => LayoutPolicy::Paired,
        };

        Self {
            api: NewsApi::new(base, api_key.unwrap_or_default().trim()),
            layout,
            ..Self::default()
        }
    }

    pub fn api_key(&self) -> &str {
        self.api.api_key()
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api: NewsApi::default(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
            default_category: DEFAULT_CATEGORY,
            layout: LayoutPolicy::default(),
            toast_duration_ms: TOAST_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_fall_back_to_defaults() {
        let config = WidgetConfig::from_values(None, None, None);

        assert_eq!(config.api.base(), DEFAULT_API_BASE);
        assert_eq!(config.api_key(), "");
        assert_eq!(config.layout, LayoutPolicy::Paired);
        assert_eq!(config.default_country, "ru");
        assert_eq!(config.default_category, Category::Technology);
    }

    #[test]
    fn explicit_values_are_used() {
        let config =
            WidgetConfig::from_values(Some("http://localhost:9000/v2"), Some(" abc "), Some("Plain"));

        assert_eq!(config.api.base(), "http://localhost:9000/v2");
        assert_eq!(config.api_key(), "abc");
        assert_eq!(config.layout, LayoutPolicy::Plain);
    }

    #[test]
    fn blank_base_is_ignored() {
        let config = WidgetConfig::from_values(Some("  "), None, Some("unknown"));
        assert_eq!(config.api.base(), DEFAULT_API_BASE);
        assert_eq!(config.layout, LayoutPolicy::Paired);
    }
}
