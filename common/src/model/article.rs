use serde::{Deserialize, Serialize};

/// Publisher attribution attached to an article by the news API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single news item as returned by the `top-headlines` and `everything`
/// endpoints.
///
/// Articles are transient view models: they are parsed out of one response
/// body, rendered once into a card and then dropped. The API sends `null`
/// for most fields it does not know, so everything except the link is
/// tolerant of absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline text. `null` titles are read as empty strings.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Short summary, frequently missing for wire stories.
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the full story on the publisher's site.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,

    /// Lead image. When absent the card falls back to a placeholder image.
    #[serde(default)]
    pub url_to_image: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub source: Option<ArticleSource>,

    /// ISO-8601 timestamp, kept as the raw string the API sent.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    /// Returns the image link if it is present and not blank.
    pub fn image(&self) -> Option<&str> {
        self.url_to_image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Name of the publishing outlet, if the API reported one.
    pub fn source_name(&self) -> Option<&str> {
        self.source
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|s| !s.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
