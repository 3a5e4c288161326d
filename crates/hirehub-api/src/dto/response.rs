//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Confirmation message response (e.g. after a deletion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Successful resume upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Generated unique filename on disk.
    pub filename: String,
    /// Opaque reference URL to echo back as `resumeUrl`.
    pub url: String,
    /// The filename the client supplied.
    pub original_name: String,
    /// Stored size in bytes.
    pub size: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service is up.
    pub status: String,
    /// Crate version.
    pub version: String,
}
