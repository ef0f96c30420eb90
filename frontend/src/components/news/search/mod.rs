//! News search widget: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! On first render the declarative UI widgets are activated and the default
//! headlines are requested. Afterwards requests are driven by the search form.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::auto_init_widgets;
pub use messages::Msg;
pub use props::NewsSearchProps;
pub use state::NewsSearchComponent;

impl Component for NewsSearchComponent {
    type Message = Msg;
    type Properties = NewsSearchProps;

    fn create(ctx: &Context<Self>) -> Self {
        NewsSearchComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            auto_init_widgets();

            let config = &ctx.props().config;
            ctx.link().send_message(Msg::FetchTopHeadlines {
                country: config.default_country.clone(),
                category: config.default_category,
            });
        }
    }
}
