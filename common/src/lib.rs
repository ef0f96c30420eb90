//! Shared, target-independent pieces of the news widget: the API models,
//! query and endpoint construction, card templating and the error type.
//!
//! Nothing in this crate touches the DOM, so it builds and tests on the host.

pub mod error;
pub mod model;
pub mod requests;
pub mod template;

pub use error::{NewsError, Result};
