//! Job listing CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use hirehub_core::error::AppError;
use hirehub_entity::application::Application;
use hirehub_entity::job::Job;

use crate::dto::request::CreateJobRequest;
use crate::dto::response::MessageResponse;
use crate::extractors::ValidatedJson;
use crate::extractors::path::parse_record_id;
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.store.jobs())
}

/// GET /api/jobs/{id}
///
/// A path segment that is not a UUID names no job, so it gets the same
/// 404 as a well-formed id with no record.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let id = parse_record_id(&id, "Job not found")?;
    state
        .store
        .job(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Job not found"))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> (StatusCode, Json<Job>) {
    let job = state.store.create_job(req.into_create_job());
    (StatusCode::CREATED, Json(job))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_record_id(&id, "Job not found")?;
    if state.store.delete_job(id) {
        Ok(Json(MessageResponse {
            message: "Job deleted successfully".to_string(),
        }))
    } else {
        Err(AppError::not_found("Job not found"))
    }
}

/// GET /api/jobs/{jobId}/applications
///
/// Returns 200 with an array even when the job itself does not exist —
/// an unknown (or malformed) job id simply has no applications.
pub async fn list_job_applications(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Json<Vec<Application>> {
    let applications = Uuid::parse_str(&job_id)
        .map(|id| state.store.applications_by_job(id))
        .unwrap_or_default();
    Json(applications)
}
