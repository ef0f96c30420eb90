//! String templating of article cards.
//!
//! The widget injects the concatenated output of [`render_cards`] into the
//! content region as one block, so every function here returns plain markup.
//! All article text is escaped before interpolation.

use url::Url;

use crate::model::article::Article;
use crate::model::layout::LayoutPolicy;

/// Image shown on cards whose article has no `urlToImage`.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/600x400?text=No+image";

/// Label of the source link. Deliberately generic, never the article title.
pub const READ_MORE_LABEL: &str = "Read more";

/// Class carried by the outer element of every card.
pub const CARD_CLASS: &str = "news-card";

pub const ROW_OPEN: &str = r#"<div class="row">"#;
pub const ROW_CLOSE: &str = "</div>";

/// Renders the card for `article`, the `index`-th of `total`, applying the
/// row wrapping dictated by `policy`.
pub fn template(
    article: &Article,
    index: usize,
    total: usize,
    policy: LayoutPolicy,
    placeholder_image: &str,
) -> String {
    let mut out = String::new();
    if policy.opens_row(index) {
        out.push_str(ROW_OPEN);
    }
    out.push_str(&card(article, placeholder_image));
    if policy.closes_row(index, total) {
        out.push_str(ROW_CLOSE);
    }
    out
}

/// Concatenates the templates of all `articles`, in input order.
///
/// An empty slice yields an empty string.
pub fn render_cards(articles: &[Article], policy: LayoutPolicy, placeholder_image: &str) -> String {
    let total = articles.len();
    articles
        .iter()
        .enumerate()
        .map(|(index, article)| template(article, index, total, policy, placeholder_image))
        .collect()
}

fn card(article: &Article, placeholder_image: &str) -> String {
    let image = article
        .image()
        .and_then(web_link)
        .map(|url| url.to_string())
        .unwrap_or_else(|| placeholder_image.to_string());
    let title = escape_html(&article.title);
    let description = escape_html(article.description.as_deref().unwrap_or_default());
    let byline = byline(article);
    let action = web_link(&article.url)
        .map(|url| {
            format!(
                r#"<div class="card-action"><a href="{}" target="_blank" rel="noopener noreferrer">{READ_MORE_LABEL}</a></div>"#,
                escape_html(url.as_str())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="col s12 m6 {CARD_CLASS}"><div class="card left-align"><div class="card-image waves-effect waves-block waves-light"><img src="{image}" alt="{title}"></div><div class="card-content"><span class="card-title grey-text text-darken-4">{title}</span>{byline}<p>{description}</p></div>{action}</div></div>"#,
        image = escape_html(&image),
    )
}

/// Outlet, author and publication day joined into one muted line.
fn byline(article: &Article) -> String {
    let day = article
        .published_at
        .as_deref()
        .and_then(|ts| ts.split('T').next())
        .filter(|d| !d.is_empty());
    let author = article.author.as_deref().map(str::trim).filter(|a| !a.is_empty());

    let parts: Vec<String> = [article.source_name(), author, day]
        .into_iter()
        .flatten()
        .map(escape_html)
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!(
        r#"<span class="news-source grey-text">{}</span>"#,
        parts.join(" &middot; ")
    )
}

/// Parses `raw` and keeps it only when it points at an `http` or `https`
/// resource. Anything else (`javascript:`, `data:`, relative paths) is dropped.
fn web_link(raw: &str) -> Option<Url> {
    Url::parse(raw.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
