//! Resume upload and retrieval handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use hirehub_core::error::AppError;

use crate::dto::response::UploadResponse;
use crate::state::AppState;

/// POST /api/upload/resume — multipart upload, single `resume` file field
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let max_size = state.config.storage.max_upload_size_bytes;
    let mut file: Option<(String, Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(max_size, e))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "resume" {
            return Err(AppError::upload_policy(
                "Unexpected field name. Use 'resume' as the field name",
            ));
        }

        let original_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(max_size, e))?;
        file = Some((original_name, content_type, data));
    }

    let (original_name, content_type, data) =
        file.ok_or_else(|| AppError::upload_policy("No file uploaded"))?;

    let stored = state
        .resumes
        .store(&original_name, content_type.as_deref(), data)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Resume uploaded successfully".to_string(),
            filename: stored.filename,
            url: stored.url,
            original_name: stored.original_name,
            size: stored.size,
        }),
    ))
}

/// A body so large it trips the transport limit mid-stream is still an
/// oversize upload, so it gets the same policy message as one caught by
/// the size check.
fn multipart_error(max_size: u64, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::upload_policy(format!(
            "File too large. Maximum size is {}MB",
            max_size / (1024 * 1024)
        ))
    } else {
        AppError::validation(format!("Multipart error: {err}"))
    }
}

/// GET /uploads/{filename} — serve a previously uploaded resume
pub async fn serve_resume(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let (data, content_type) = state.resumes.open(&filename).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}
