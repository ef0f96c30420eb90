use std::rc::Rc;

use crate::components::news::search::NewsSearchComponent;
use crate::config::WidgetConfig;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<WidgetConfig>,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NewsSearchComponent config={ctx.props().config.clone()} />
            </div>
        }
    }
}
