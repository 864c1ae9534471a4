//! Badge layer
//!
//! - [`template`]: version grammar check and SVG rendering
//! - [`project`]: projects that have a name badge
//! - [`server`]: axum routes turning inference results into badge responses

pub mod project;
pub mod server;
pub mod template;
