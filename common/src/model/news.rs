use serde::{Deserialize, Serialize};

use crate::model::article::Article;

/// Successful body of both news endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    /// Missing or `null` collections are read as empty.
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub articles: Vec<Article>,
}

/// Body the API sends alongside a non-2xx status,
/// e.g. `{"status":"error","code":"apiKeyInvalid","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort extraction of a human readable reason from a raw error body.
    pub fn reason_from(body: &str) -> Option<String> {
        let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .message
            .or(parsed.code)
            .filter(|m| !m.trim().is_empty())
    }
}

fn null_as_empty_vec<'de, D>(deserializer: D) -> Result<Vec<Article>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Article>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_article_order() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                { "title": "first", "url": "https://a.test" },
                { "title": "second", "url": "https://b.test" }
            ]
        }"#;

        let response: NewsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.total_results, Some(2));
        let titles: Vec<&str> = response.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn missing_articles_is_empty() {
        let response: NewsResponse = serde_json::from_str(r#"{ "status": "ok" }"#).unwrap();
        assert!(response.articles.is_empty());

        let response: NewsResponse = serde_json::from_str(r#"{ "articles": null }"#).unwrap();
        assert!(response.articles.is_empty());
    }

    #[test]
    fn error_reason_prefers_message() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        assert_eq!(
            ApiErrorBody::reason_from(body).as_deref(),
            Some("Your API key is invalid.")
        );
        assert_eq!(
            ApiErrorBody::reason_from(r#"{"code":"rateLimited"}"#).as_deref(),
            Some("rateLimited")
        );
        assert_eq!(ApiErrorBody::reason_from("<html>bad gateway</html>"), None);
    }
}
