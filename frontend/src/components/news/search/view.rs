//! View rendering for the news search component.
//!
//! The page consists of the search form (`name="controls"`) and the content
//! region. The region's markup is produced by `news_common::template` and
//! mounted as one raw block, so a new result set is a single DOM update.

use news_common::model::query::{Category, COUNTRIES};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::loader::SUBMIT_ID;

use super::messages::Msg;
use super::state::NewsSearchComponent;

/// Main view function: search form above the content region.
pub fn view(component: &NewsSearchComponent, ctx: &Context<NewsSearchComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="news-root">
            { build_form(component, link) }
            { build_content(component) }
        </div>
    }
}

fn build_form(component: &NewsSearchComponent, link: &Scope<NewsSearchComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form name="controls" class="container news-controls" onsubmit={onsubmit}>
            <div class="row">
                <div class="input-field col s12 m3">
                    { country_select(component, link) }
                    <label>{"Country"}</label>
                </div>
                <div class="input-field col s12 m3">
                    { category_select(component, link) }
                    <label>{"Category"}</label>
                </div>
                <div class="input-field col s12 m4">
                    <input
                        id="news-search"
                        name="search"
                        type="text"
                        autocomplete="off"
                        value={component.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetSearch(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                        })}
                    />
                    <label for="news-search">{"Search"}</label>
                </div>
                <div class="input-field col s12 m2">
                    <button
                        id={SUBMIT_ID}
                        class="btn waves-effect waves-light"
                        type="submit"
                        disabled={!component.submit_enabled()}
                    >
                        {"Search"}
                    </button>
                </div>
            </div>
        </form>
    }
}

fn country_select(component: &NewsSearchComponent, link: &Scope<NewsSearchComponent>) -> Html {
    let options = COUNTRIES
        .iter()
        .map(|(code, label)| {
            html! {
                <option value={*code} selected={component.country == *code}>{*label}</option>
            }
        })
        .collect::<Html>();

    html! {
        <select
            name="country"
            onchange={link.callback(|e: Event| {
                Msg::SetCountry(e.target_unchecked_into::<web_sys::HtmlSelectElement>().value())
            })}
        >
            { options }
        </select>
    }
}

fn category_select(component: &NewsSearchComponent, link: &Scope<NewsSearchComponent>) -> Html {
    let options = Category::ALL
        .iter()
        .map(|category| {
            html! {
                <option value={category.as_str()} selected={component.category == *category}>
                    { category.label() }
                </option>
            }
        })
        .collect::<Html>();

    let fallback = component.category;
    html! {
        <select
            name="category"
            onchange={link.callback(move |e: Event| {
                let value = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
                Msg::SetCategory(Category::parse(&value).unwrap_or(fallback))
            })}
        >
            { options }
        </select>
    }
}

/// Content region. Empty when nothing has been rendered yet.
fn build_content(component: &NewsSearchComponent) -> Html {
    let markup = AttrValue::from(component.content.clone());
    html! {
        <div class="news-container container">
            <div class="row">{ Html::from_html_unchecked(markup) }</div>
        </div>
    }
}
