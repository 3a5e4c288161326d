//! # hirehub-store
//!
//! The in-memory record store for HireHub: keyed collections for users,
//! jobs, and applications with CRUD and filter operations.
//!
//! The store is an explicitly constructed object handed to the API layer
//! by `Arc` at startup — there is no hidden global instance, and tests
//! construct a fresh store per case.

pub mod seed;
pub mod store;

pub use store::MemStore;
