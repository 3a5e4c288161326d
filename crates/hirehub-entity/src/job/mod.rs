//! Job listing entity.

pub mod model;

pub use model::{CreateJob, Job};
