//! Transformation module.
//!
//! - Clean: symbol prefix removal, name cleanup, filter and sort
//! - Project: the three label/value lookup lists
//! - Pipeline: end-to-end run

pub mod clean;
pub mod pipeline;
pub mod project;

pub use clean::{clean, clean_name, clean_symbol, filter_and_sort};
pub use pipeline::*;
pub use project::{project, project_view, Views};
