//! Route handlers, organized by domain.

pub mod application;
pub mod health;
pub mod job;
pub mod upload;
