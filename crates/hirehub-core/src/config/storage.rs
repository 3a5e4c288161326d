//! Resume upload storage configuration.

use serde::{Deserialize, Serialize};

/// Resume storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded resumes are written.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Maximum accepted resume size in bytes (default 5 MiB).
    ///
    /// A file of exactly this size is accepted; anything larger is
    /// rejected before it reaches disk.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_max_upload() -> u64 {
    5 * 1024 * 1024
}
