//! Update function for the news search component: the request orchestrator.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Building the top-headlines or everything query and dispatching it.
//! - Showing the loading indicator while a request is in flight.
//! - Routing every completion through `NewsSearchComponent::on_response` and
//!   applying the indicator and toast side effects it asks for.

use news_common::model::news::NewsResponse;
use news_common::model::query::{Category, NewsQuery};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::loader::{hide_loader, show_loader};
use crate::transport;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::{Completion, NewsSearchComponent};

/// Central update function for the component.
pub fn update(
    component: &mut NewsSearchComponent,
    ctx: &Context<NewsSearchComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FetchTopHeadlines { country, category } => {
            fetch_top_headlines(component, ctx, country, category);
            true
        }
        Msg::Submit => {
            match NewsQuery::from_form(&component.country, component.category, &component.search) {
                NewsQuery::Everything { query } => fetch_everything(component, ctx, query),
                NewsQuery::TopHeadlines { country, category } => {
                    fetch_top_headlines(component, ctx, country, category)
                }
            }
            true
        }
        Msg::SetCountry(country) => {
            component.country = country;
            false
        }
        Msg::SetCategory(category) => {
            component.category = category;
            false
        }
        Msg::SetSearch(search) => {
            component.search = search;
            false
        }
        Msg::Loaded { seq, result } => on_loaded(component, ctx, seq, result),
    }
}

fn fetch_top_headlines(
    component: &mut NewsSearchComponent,
    ctx: &Context<NewsSearchComponent>,
    country: String,
    category: Category,
) {
    dispatch(component, ctx, NewsQuery::TopHeadlines { country, category });
}

fn fetch_everything(
    component: &mut NewsSearchComponent,
    ctx: &Context<NewsSearchComponent>,
    query: String,
) {
    dispatch(component, ctx, NewsQuery::Everything { query });
}

/// Shows the loading state and sends `query`; the completion comes back as
/// `Msg::Loaded` tagged with the request's sequence number.
fn dispatch(
    component: &mut NewsSearchComponent,
    ctx: &Context<NewsSearchComponent>,
    query: NewsQuery,
) {
    let config = &ctx.props().config;
    let url = match config.api.url_for(&query) {
        Ok(url) => url,
        Err(err) => {
            gloo_console::error!(format!("cannot build request for {query:?}: {err}"));
            show_toast(&err.to_string(), config.toast_duration_ms);
            return;
        }
    };

    let seq = component.begin_request();
    show_loader();
    gloo_console::log!(format!("request #{seq}: {query:?}"));

    let link = ctx.link().clone();
    spawn_local(async move {
        let result = transport::get_json::<NewsResponse>(url.as_str()).await;
        link.send_message(Msg::Loaded { seq, result });
    });
}

fn on_loaded(
    component: &mut NewsSearchComponent,
    ctx: &Context<NewsSearchComponent>,
    seq: u64,
    result: Result<NewsResponse, news_common::NewsError>,
) -> bool {
    let config = &ctx.props().config;
    match component.on_response(seq, result, config) {
        Completion::Rendered(count) => {
            hide_loader();
            gloo_console::log!(format!("request #{seq}: rendered {count} articles"));
            true
        }
        Completion::Notice(text) => {
            hide_loader();
            gloo_console::warn!(format!("request #{seq}: {text}"));
            show_toast(&text, config.toast_duration_ms);
            true
        }
        Completion::Superseded => {
            gloo_console::log!(format!(
                "request #{seq}: superseded by #{}, response dropped",
                component.latest_request
            ));
            false
        }
    }
}
