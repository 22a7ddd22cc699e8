//! Handlers for the per-faculty file library and the lookup lists used by
//! job forms.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printdesk_core::faculty::FACULTIES;
use printdesk_core::job::JobStatus;
use printdesk_core::library::Upload;

use crate::error::{AppError, AppResult};
use crate::extract::PathParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/faculties
pub async fn list_faculties() -> impl IntoResponse {
    Json(DataResponse { data: FACULTIES })
}

/// GET /api/v1/statuses
pub async fn list_statuses() -> impl IntoResponse {
    Json(DataResponse {
        data: JobStatus::ALL,
    })
}

/// GET /api/v1/library/{faculty}/files
///
/// Filenames available in the faculty's library. Empty when nothing has
/// been uploaded yet.
pub async fn list_files(
    State(state): State<AppState>,
    PathParams(faculty): PathParams<String>,
) -> AppResult<impl IntoResponse> {
    let files = state.workflow.library_files(&faculty).await?;
    Ok(Json(DataResponse { data: files }))
}

/// PUT /api/v1/library/{faculty}/files/{filename}
///
/// Store the raw request body as `filename`, replacing any existing file.
/// Returns 201 with the stored filenames.
pub async fn upload_file(
    State(state): State<AppState>,
    PathParams((faculty, filename)): PathParams<(String, String)>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    if body.is_empty() {
        return Err(AppError::BadRequest("File body must not be empty".into()));
    }

    let stored = state
        .workflow
        .bulk_upload(&faculty, vec![Upload::new(filename, body.to_vec())])
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}
