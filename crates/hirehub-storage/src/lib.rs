//! # hirehub-storage
//!
//! Local filesystem storage for uploaded resumes: upload policy
//! enforcement (declared MIME type, size cap), collision-free filename
//! generation, and read-back for serving `/uploads/{filename}`.

pub mod resume;

pub use resume::{ResumeStore, StoredResume, ALLOWED_MIME_TYPES, ALLOWED_TYPE_LABELS};
