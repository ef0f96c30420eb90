//! Component state for the news search widget.
//!
//! Besides the form selections, the state owns the rendered content region and
//! the "request in flight" flag. The transitions here are pure so they can be
//! exercised without a browser; `update.rs` applies the DOM side effects
//! (loading indicator, toasts) that each [`Completion`] calls for.

use news_common::model::article::Article;
use news_common::model::news::NewsResponse;
use news_common::model::query::Category;
use news_common::template::render_cards;
use news_common::NewsError;

use crate::config::WidgetConfig;

/// Toast shown when a request succeeds with zero articles.
pub const NO_RESULTS_NOTICE: &str = "No articles found for this request";

/// Main state container for the `NewsSearchComponent`.
///
/// Fields are `pub` because they are read by `view` and written by `update`.
pub struct NewsSearchComponent {
    /// Selected country code.
    pub country: String,

    /// Selected headline category.
    pub category: Category,

    /// Free-text search input.
    pub search: String,

    /// Markup currently shown in the content region.
    pub content: String,

    /// True while the authoritative request has not completed.
    pub loading: bool,

    /// Sequence number of the most recently issued request. Completions
    /// carrying any other number are superseded and dropped.
    pub latest_request: u64,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

/// What the orchestrator has to do after a response was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Content region was replaced with this many cards.
    Rendered(usize),
    /// Nothing rendered; the text must be surfaced as a toast.
    Notice(String),
    /// A newer request is in flight; this response was ignored.
    Superseded,
}

impl NewsSearchComponent {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            country: config.default_country.clone(),
            category: config.default_category,
            search: String::new(),
            content: String::new(),
            loading: false,
            latest_request: 0,
            loaded: false,
        }
    }

    /// The submit control is enabled whenever no request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.loading
    }

    /// Marks a new request as in flight and returns its sequence number.
    /// Any earlier request still pending becomes stale.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.latest_request
    }

    /// Drops the loading state without touching the content region.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Removes all rendered article markup.
    pub fn clear_content(&mut self) {
        self.content.clear();
    }

    /// Templates `articles` in order and inserts the result at the start of
    /// the content region in one step, then leaves the loading state.
    pub fn render_content(&mut self, articles: &[Article], config: &WidgetConfig) {
        let fragment = render_cards(articles, config.layout, &config.placeholder_image);
        self.content.insert_str(0, &fragment);
        self.finish_loading();
    }

    /// Applies the completion of request `seq`.
    pub fn on_response(
        &mut self,
        seq: u64,
        result: Result<NewsResponse, NewsError>,
        config: &WidgetConfig,
    ) -> Completion {
        if seq != self.latest_request {
            return Completion::Superseded;
        }

        match result {
            Err(err) => {
                self.finish_loading();
                Completion::Notice(err.to_string())
            }
            Ok(response) if response.articles.is_empty() => {
                self.finish_loading();
                Completion::Notice(NO_RESULTS_NOTICE.to_string())
            }
            Ok(response) => {
                if !self.content.is_empty() {
                    self.clear_content();
                }
                self.render_content(&response.articles, config);
                Completion::Rendered(response.articles.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_common::model::layout::LayoutPolicy;
    use news_common::template::{CARD_CLASS, DEFAULT_PLACEHOLDER_IMAGE};

    fn config() -> WidgetConfig {
        WidgetConfig {
            layout: LayoutPolicy::Plain,
            ..WidgetConfig::default()
        }
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://news.test/{title}"),
            ..Default::default()
        }
    }

    fn response(titles: &[&str]) -> Result<NewsResponse, NewsError> {
        Ok(NewsResponse {
            articles: titles.iter().map(|t| article(t)).collect(),
            ..Default::default()
        })
    }

    fn cards(state: &NewsSearchComponent) -> usize {
        state.content.matches(CARD_CLASS).count()
    }

    #[test]
    fn new_state_uses_configured_selection() {
        let state = NewsSearchComponent::new(&WidgetConfig::default());
        assert_eq!(state.country, "ru");
        assert_eq!(state.category, Category::Technology);
        assert!(state.submit_enabled());
        assert!(state.content.is_empty());
    }

    #[test]
    fn begin_request_disables_submit() {
        let mut state = NewsSearchComponent::new(&config());
        let seq = state.begin_request();

        assert_eq!(seq, 1);
        assert!(state.loading);
        assert!(!state.submit_enabled());
    }

    #[test]
    fn articles_are_rendered_in_order_and_loading_ends() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let seq = state.begin_request();

        let done = state.on_response(seq, response(&["one", "two", "three"]), &config);

        assert_eq!(done, Completion::Rendered(3));
        assert_eq!(cards(&state), 3);
        let one = state.content.find("news.test/one").unwrap();
        let three = state.content.find("news.test/three").unwrap();
        assert!(one < three);
        assert!(!state.loading);
        assert!(state.submit_enabled());
    }

    #[test]
    fn new_results_replace_previous_content() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);

        let first = state.begin_request();
        state.on_response(first, response(&["old-a", "old-b"]), &config);
        let second = state.begin_request();
        state.on_response(second, response(&["new"]), &config);

        assert_eq!(cards(&state), 1);
        assert!(state.content.contains("news.test/new"));
        assert!(!state.content.contains("old-a"));
    }

    #[test]
    fn clear_then_render_nothing_leaves_region_empty() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        state.content = "<div>stale</div>".to_string();

        state.clear_content();
        state.render_content(&[], &config);

        assert!(state.content.is_empty());
    }

    #[test]
    fn empty_result_keeps_content_and_enables_submit() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let first = state.begin_request();
        state.on_response(first, response(&["kept"]), &config);
        let before = state.content.clone();

        let seq = state.begin_request();
        let done = state.on_response(seq, response(&[]), &config);

        assert_eq!(done, Completion::Notice(NO_RESULTS_NOTICE.to_string()));
        assert_eq!(state.content, before);
        assert!(state.submit_enabled());
    }

    #[test]
    fn http_error_notice_contains_status() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let seq = state.begin_request();

        let done = state.on_response(
            seq,
            Err(NewsError::Http {
                status: 429,
                message: None,
            }),
            &config,
        );

        match done {
            Completion::Notice(text) => assert!(text.contains("429")),
            other => panic!("expected a notice, got {other:?}"),
        }
        assert!(state.submit_enabled());
        assert!(state.content.is_empty());
    }

    #[test]
    fn network_error_leaves_loading_state() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let seq = state.begin_request();

        let done = state.on_response(seq, Err(NewsError::Network("offline".into())), &config);

        assert!(matches!(done, Completion::Notice(_)));
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_after_newer_one_is_ignored() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let initial = state.begin_request();
        let manual = state.begin_request();

        assert_eq!(
            state.on_response(manual, response(&["manual"]), &config),
            Completion::Rendered(1)
        );
        assert_eq!(
            state.on_response(initial, response(&["initial"]), &config),
            Completion::Superseded
        );

        assert_eq!(cards(&state), 1);
        assert!(state.content.contains("news.test/manual"));
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_before_newer_one_keeps_loading() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let initial = state.begin_request();
        let manual = state.begin_request();

        assert_eq!(
            state.on_response(initial, response(&["initial"]), &config),
            Completion::Superseded
        );
        assert!(state.loading);
        assert!(state.content.is_empty());

        state.on_response(manual, response(&["manual"]), &config);
        assert!(state.content.contains("news.test/manual"));
        assert!(!state.content.contains("news.test/initial"));
        assert!(!state.loading);
    }

    #[test]
    fn stale_error_does_not_raise_a_notice() {
        let config = config();
        let mut state = NewsSearchComponent::new(&config);
        let stale = state.begin_request();
        let _current = state.begin_request();

        let done = state.on_response(
            stale,
            Err(NewsError::Http {
                status: 500,
                message: None,
            }),
            &config,
        );

        assert_eq!(done, Completion::Superseded);
        assert!(state.loading);
    }

    #[test]
    fn missing_image_renders_placeholder() {
        let config = WidgetConfig::default();
        let mut state = NewsSearchComponent::new(&config);
        let seq = state.begin_request();

        state.on_response(seq, response(&["bare"]), &config);

        assert!(state.content.contains(DEFAULT_PLACEHOLDER_IMAGE));
    }
}
