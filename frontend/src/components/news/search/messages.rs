use news_common::model::news::NewsResponse;
use news_common::model::query::Category;
use news_common::NewsError;

pub enum Msg {
    FetchTopHeadlines { country: String, category: Category },
    Submit,
    SetCountry(String),
    SetCategory(Category),
    SetSearch(String),
    /// Completion of the request numbered `seq`.
    Loaded {
        seq: u64,
        result: Result<NewsResponse, NewsError>,
    },
}
