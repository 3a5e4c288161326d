//! Shared application state threaded through every handler.

use std::sync::Arc;

use hirehub_core::config::AppConfig;
use hirehub_storage::ResumeStore;
use hirehub_store::MemStore;

/// Application state handed to the router at startup.
///
/// The record store is constructed explicitly by the caller (the server
/// binary, or a test) and shared by `Arc` — it is never a hidden global,
/// so every test can build a fresh one.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The in-memory record store.
    pub store: Arc<MemStore>,
    /// Resume file storage.
    pub resumes: Arc<ResumeStore>,
}
