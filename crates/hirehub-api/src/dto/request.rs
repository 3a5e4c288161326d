//! Request DTOs with validation.
//!
//! Unknown JSON fields are ignored on deserialization (serde default),
//! never rejected. Validation only decides pass/fail — defaults for
//! optional fields are applied downstream by the store.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use hirehub_entity::application::CreateApplication;
use hirehub_entity::job::CreateJob;

use crate::extractors::json::WireNames;

/// Create job request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Job title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Hiring company.
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    /// Job location.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Employment type.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub job_type: String,
    /// Free-form description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Ordered list of requirements.
    pub requirements: Vec<String>,
    /// Salary range.
    pub salary: Option<String>,
    /// Experience level.
    #[validate(length(min = 1, message = "Experience level is required"))]
    pub experience_level: String,
}

impl WireNames for CreateJobRequest {
    fn wire_name(field: &str) -> &str {
        match field {
            "job_type" => "type",
            "experience_level" => "experienceLevel",
            other => other,
        }
    }
}

impl CreateJobRequest {
    /// Convert into the store-level insert payload.
    pub fn into_create_job(self) -> CreateJob {
        CreateJob {
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type,
            description: self.description,
            requirements: self.requirements,
            salary: self.salary,
            experience_level: self.experience_level,
        }
    }
}

/// Submit application request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    /// Target job id. Must reference an existing job (checked by the
    /// handler before any store mutation).
    pub job_id: Uuid,
    /// Applicant's full name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Applicant's email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Applicant's phone number.
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Opaque resume reference URL from a prior upload.
    pub resume_url: Option<String>,
    /// Cover letter text.
    pub cover_letter: Option<String>,
}

impl WireNames for CreateApplicationRequest {
    fn wire_name(field: &str) -> &str {
        match field {
            "job_id" => "jobId",
            "full_name" => "fullName",
            "resume_url" => "resumeUrl",
            "cover_letter" => "coverLetter",
            other => other,
        }
    }
}

impl CreateApplicationRequest {
    /// Convert into the store-level insert payload.
    pub fn into_create_application(self) -> CreateApplication {
        CreateApplication {
            job_id: self.job_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            resume_url: self.resume_url,
            cover_letter: self.cover_letter,
        }
    }
}

/// Update application status request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    /// The new status. Must be one of the four legal values; validated
    /// by the handler against [`hirehub_entity::application::ApplicationStatus`].
    pub status: String,
}

// No serde renames on this body.
impl WireNames for UpdateStatusRequest {}
