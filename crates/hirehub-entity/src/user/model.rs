//! User entity model.
//!
//! No current API surface creates users; the entity and its store
//! operations are reserved for a future authentication layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Password. Never serialized in responses.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Desired username. Must be unique.
    pub username: String,
    /// Password.
    pub password: String,
}
