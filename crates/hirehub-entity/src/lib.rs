//! # hirehub-entity
//!
//! Domain entity models for HireHub: jobs, applications, and users.
//!
//! All entities serialize to camelCase JSON, which is the wire format the
//! HTTP API exposes. Optional fields serialize as explicit `null` rather
//! than being omitted.

pub mod application;
pub mod job;
pub mod user;
