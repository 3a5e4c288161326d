//! Custom axum extractors.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
