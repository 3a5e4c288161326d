//! Application submission and status handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use hirehub_core::error::AppError;
use hirehub_entity::application::{Application, ApplicationStatus};

use crate::dto::request::{CreateApplicationRequest, UpdateStatusRequest};
use crate::extractors::ValidatedJson;
use crate::extractors::path::parse_record_id;
use crate::state::AppState;

/// GET /api/applications
pub async fn list_applications(State(state): State<AppState>) -> Json<Vec<Application>> {
    Json(state.store.applications())
}

/// GET /api/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Application>, AppError> {
    let id = parse_record_id(&id, "Application not found")?;
    state
        .store
        .application(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Application not found"))
}

/// POST /api/applications
///
/// The referential check on `jobId` happens here, before any store
/// mutation — the store itself does not know about job existence.
pub async fn create_application(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    if state.store.job(req.job_id).is_none() {
        return Err(AppError::not_found(
            "Job not found. Cannot submit application for non-existent job.",
        ));
    }

    let application = state.store.create_application(req.into_create_application());
    Ok((StatusCode::CREATED, Json(application)))
}

/// PUT /api/applications/{id}
///
/// The only permitted mutation after creation: the status whitelist is
/// enforced here; the store will take whatever string it is handed.
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<Application>, AppError> {
    let id = parse_record_id(&id, "Application not found")?;
    let status: ApplicationStatus = req.status.parse().map_err(|_| {
        AppError::validation("Invalid status").with_details(
            serde_json::json!({ "validStatuses": ApplicationStatus::valid_values() }),
        )
    })?;

    state
        .store
        .update_application_status(id, status.as_str())
        .map(Json)
        .ok_or_else(|| AppError::not_found("Application not found"))
}
