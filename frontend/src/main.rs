use std::rc::Rc;

use crate::app::{App, AppProps};
use crate::config::WidgetConfig;

mod app;
mod components;
mod config;
mod transport;

fn main() {
    let config = WidgetConfig::from_env();
    if config.api_key().is_empty() {
        gloo_console::warn!("NEWS_API_KEY was not set at build time; requests will be rejected");
    }
    gloo_console::log!(format!("news widget starting against {}", config.api.base()));

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
