//! # hirehub-api
//!
//! HTTP API layer for HireHub: the axum router, handlers, request/response
//! DTOs, and the validating JSON extractor.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
