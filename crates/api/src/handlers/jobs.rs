//! Handlers for the `/jobs` resource.
//!
//! Mutations go through [`JobWorkflow`](printdesk_core::workflow::JobWorkflow);
//! reads go straight to the job store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printdesk_core::faculty::DEFAULT_FACULTY;
use printdesk_core::job::{Job, JobStatus, DEFAULT_PRINTER_ID};
use printdesk_core::store::job_not_found;
use printdesk_core::types::DbId;
use printdesk_core::workflow::JobDraft;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParams, QueryParams};
use crate::query::JobSearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body for `POST /api/v1/jobs`.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub user_name: String,
    pub printer_id: Option<i32>,
    pub faculty: Option<String>,
    /// Filenames picked from the faculty library.
    #[serde(default)]
    pub library_files: Vec<String>,
}

/// Body for `PUT /api/v1/jobs/{id}`. Replaces every mutable field.
#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub user_name: String,
    pub printer_id: i32,
    pub faculty: String,
    pub status: String,
    #[serde(default)]
    pub library_files: Vec<String>,
}

/// Body for `PUT /api/v1/jobs/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a job by ID, mapping absence to `NotFound`.
async fn find_job(state: &AppState, job_id: DbId) -> AppResult<Job> {
    let job = state
        .workflow
        .store()
        .get_job(job_id)
        .await?
        .ok_or_else(|| job_not_found(job_id))?;
    Ok(job)
}

// ---------------------------------------------------------------------------
// List / search
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs
///
/// All jobs, oldest first.
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = state.workflow.store().list_jobs().await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/jobs/search?q=&faculties=&statuses=
///
/// Dashboard search, newest first.
pub async fn search_jobs(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<JobSearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = params.into_search()?;
    let jobs = state.workflow.store().search_jobs(&search).await?;
    Ok(Json(DataResponse { data: jobs }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/jobs
///
/// Create a `Pending` job from library selections. Returns 201 with the
/// created job.
pub async fn create_job(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateJobRequest>,
) -> AppResult<impl IntoResponse> {
    let draft = JobDraft {
        user_name: input.user_name,
        printer_id: input.printer_id.unwrap_or(DEFAULT_PRINTER_ID),
        faculty: input.faculty.unwrap_or_else(|| DEFAULT_FACULTY.to_string()),
    };

    let job = state
        .workflow
        .prepare_new_job(draft, input.library_files, Vec::new())
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    PathParams(job_id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    let job = find_job(&state, job_id).await?;
    Ok(Json(DataResponse { data: job }))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /api/v1/jobs/{id}
///
/// Full edit. Any status may be set directly.
pub async fn update_job(
    State(state): State<AppState>,
    PathParams(job_id): PathParams<DbId>,
    JsonBody(input): JsonBody<UpdateJobRequest>,
) -> AppResult<impl IntoResponse> {
    let status: JobStatus = input.status.parse()?;
    let existing = find_job(&state, job_id).await?;

    let draft = JobDraft {
        user_name: input.user_name,
        printer_id: input.printer_id,
        faculty: input.faculty,
    };
    let job = state
        .workflow
        .apply_edit(&existing, draft, status, input.library_files, Vec::new())
        .await?;

    Ok(Json(DataResponse { data: job }))
}

/// PUT /api/v1/jobs/{id}/status
///
/// Status-only change.
pub async fn set_job_status(
    State(state): State<AppState>,
    PathParams(job_id): PathParams<DbId>,
    JsonBody(input): JsonBody<SetStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let status: JobStatus = input.status.parse()?;
    let job = state.workflow.set_status(job_id, status).await?;
    Ok(Json(DataResponse { data: job }))
}
