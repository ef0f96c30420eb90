//! HTTP transport: one GET, one JSON parse, one typed result.
//!
//! Every request completes with either a parsed body or a [`NewsError`],
//! including network failures, so callers can always leave the loading state.

use gloo_net::http::Request;
use news_common::model::news::ApiErrorBody;
use news_common::{NewsError, Result};
use serde::de::DeserializeOwned;

/// Issues a GET to `url` and parses the body of a 2xx response as `T`.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url).send().await.map_err(|err| {
        gloo_console::error!(format!("news request failed before a response: {err}"));
        NewsError::Network(err.to_string())
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| NewsError::Network(err.to_string()))?;

    interpret(status, &body)
}

/// Maps a status code and raw body onto the transport result.
fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if (200..300).contains(&status) {
        Ok(serde_json::from_str(body)?)
    } else {
        Err(NewsError::Http {
            status,
            message: ApiErrorBody::reason_from(body),
        })
    }
}
