//! Job application entity.

pub mod model;
pub mod status;

pub use model::{Application, CreateApplication};
pub use status::ApplicationStatus;
