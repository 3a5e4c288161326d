//! Job listing entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published job listing.
///
/// Immutable once created, except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier. System-generated, never client-supplied.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Job location.
    pub location: String,
    /// Employment type (e.g. `"Full-time"`, `"Part-time"`, `"Contract"`,
    /// `"Internship"`).
    #[serde(rename = "type")]
    pub job_type: String,
    /// Free-form description.
    pub description: String,
    /// Ordered list of requirements.
    pub requirements: Vec<String>,
    /// Salary range, if disclosed.
    pub salary: Option<String>,
    /// Experience level (e.g. `"Entry Level"`, `"Mid Level"`, `"Senior"`).
    pub experience_level: String,
}

/// Data required to create a new job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Job location.
    pub location: String,
    /// Employment type.
    #[serde(rename = "type")]
    pub job_type: String,
    /// Free-form description.
    pub description: String,
    /// Ordered list of requirements.
    pub requirements: Vec<String>,
    /// Salary range, if disclosed.
    pub salary: Option<String>,
    /// Experience level.
    pub experience_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_serializes_to_camel_case_with_explicit_null_salary() {
        let job = Job {
            id: Uuid::new_v4(),
            title: "X".into(),
            company: "Y".into(),
            location: "Z".into(),
            job_type: "Full-time".into(),
            description: "d".into(),
            requirements: vec!["A".into()],
            salary: None,
            experience_level: "Entry Level".into(),
        };

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert_eq!(value["experienceLevel"], "Entry Level");
        assert!(value["salary"].is_null());
    }
}
