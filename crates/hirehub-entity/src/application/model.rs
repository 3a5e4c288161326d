//! Job application entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::ApplicationStatus;

/// A submitted job application.
///
/// After creation the only mutable field is `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application identifier. System-generated.
    pub id: Uuid,
    /// The job this application targets. Must reference an existing job
    /// at creation time (enforced by the handler layer).
    pub job_id: Uuid,
    /// Applicant's full name.
    pub full_name: String,
    /// Applicant's email address.
    pub email: String,
    /// Applicant's phone number.
    pub phone: String,
    /// Opaque reference URL from a prior resume upload, if any.
    pub resume_url: Option<String>,
    /// Cover letter text, if any.
    pub cover_letter: Option<String>,
    /// Current status. Stored as a string; the handler layer keeps it
    /// within [`ApplicationStatus`].
    pub status: String,
}

impl Application {
    /// The status every new application starts in.
    pub fn default_status() -> String {
        ApplicationStatus::Pending.as_str().to_string()
    }
}

/// Data required to submit a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    /// Target job id.
    pub job_id: Uuid,
    /// Applicant's full name.
    pub full_name: String,
    /// Applicant's email address.
    pub email: String,
    /// Applicant's phone number.
    pub phone: String,
    /// Opaque resume reference URL from a prior upload.
    pub resume_url: Option<String>,
    /// Cover letter text.
    pub cover_letter: Option<String>,
}
