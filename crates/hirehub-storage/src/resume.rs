//! Resume file storage on the local filesystem.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;

/// Declared MIME types a resume upload may carry.
///
/// Checked against the client-declared multipart content type, not the
/// file bytes. The client can spoof this, so the check is advisory only —
/// it is not a content-integrity guarantee.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Human-readable labels for the allowed types, for error payloads.
pub const ALLOWED_TYPE_LABELS: &[&str] = &["PDF", "DOC", "DOCX"];

/// Metadata returned after a successful resume upload.
#[derive(Debug, Clone)]
pub struct StoredResume {
    /// Generated unique filename on disk.
    pub filename: String,
    /// Opaque reference URL the client echoes back as `resumeUrl`.
    pub url: String,
    /// The filename the client supplied.
    pub original_name: String,
    /// Stored size in bytes.
    pub size: u64,
}

/// Local filesystem store for uploaded resumes.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    /// Directory all resumes are written to.
    root: PathBuf,
    /// Maximum accepted size in bytes. A file of exactly this size is
    /// accepted; anything larger is rejected.
    max_size: u64,
}

impl ResumeStore {
    /// Create a resume store rooted at the given directory, creating it
    /// if needed.
    pub async fn new(root_path: &str, max_size: u64) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root, max_size })
    }

    /// Validate and persist an uploaded resume.
    ///
    /// Policy checks run before anything touches the disk, so a rejected
    /// upload never leaves a partial file behind.
    pub async fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> AppResult<StoredResume> {
        let declared = content_type.unwrap_or("");
        if !ALLOWED_MIME_TYPES.contains(&declared) {
            return Err(AppError::upload_policy(
                "Only PDF, DOC, and DOCX files are allowed",
            )
            .with_details(serde_json::json!({ "allowedTypes": ALLOWED_TYPE_LABELS })));
        }

        if data.len() as u64 > self.max_size {
            return Err(AppError::upload_policy(format!(
                "File too large. Maximum size is {}MB",
                self.max_size / (1024 * 1024)
            )));
        }

        let filename = self.fresh_filename(original_name);
        let path = self.root.join(&filename);

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write resume: {filename}"),
                e,
            )
        })?;

        debug!(filename = %filename, bytes = data.len(), "Stored resume");
        Ok(StoredResume {
            url: format!("/uploads/{filename}"),
            original_name: original_name.to_string(),
            size: data.len() as u64,
            filename,
        })
    }

    /// Read back a previously stored resume for serving.
    ///
    /// Returns the file bytes and a content type derived from the
    /// extension. Absence maps to not-found; traversal attempts are
    /// rejected outright.
    pub async fn open(&self, filename: &str) -> AppResult<(Bytes, &'static str)> {
        // With separators rejected, only a whole `..` segment can traverse;
        // interior dots in a stored name (e.g. `my..cv.pdf`) are legitimate.
        if filename.contains('/') || filename.contains('\\') || filename == ".." {
            return Err(AppError::not_found(format!("File not found: {filename}")));
        }

        let path = self.root.join(filename);
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {filename}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read resume: {filename}"),
                    e,
                )
            }
        })?;

        Ok((Bytes::from(data), mime_from_name(filename)))
    }

    /// Generate a stored filename combining a timestamp, a random
    /// component, and the sanitized original name.
    ///
    /// Re-rolls on the off chance the name already exists; a stored file
    /// is never overwritten.
    fn fresh_filename(&self, original_name: &str) -> String {
        let original = sanitize_filename(original_name);
        loop {
            let filename = format!(
                "{}-{}-{}",
                chrono::Utc::now().timestamp_millis(),
                rand::random::<u32>(),
                original
            );
            if !self.root.join(&filename).exists() {
                return filename;
            }
        }
    }

    /// The storage root (used by tests to inspect disk state).
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Strip path components and control characters from a client-supplied
/// filename, keeping only the final segment.
fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim()
        .trim_matches('.');
    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}

/// Content type for serving a stored resume, from its extension.
fn mime_from_name(name: &str) -> &'static str {
    match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
