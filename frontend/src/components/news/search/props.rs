//! Properties of the `NewsSearchComponent`.

use std::rc::Rc;

use yew::prelude::*;

use crate::config::WidgetConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsSearchProps {
    /// Read-only startup configuration: API location and key, placeholder
    /// image, default selection and card layout.
    pub config: Rc<WidgetConfig>,
}
