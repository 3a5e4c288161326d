//! User entity (reserved for future auth).

pub mod model;

pub use model::{CreateUser, User};
