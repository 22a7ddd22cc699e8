use axum::routing::{get, put};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /                 list_jobs
/// POST   /                 create_job
/// GET    /search           search_jobs
/// GET    /{id}             get_job
/// PUT    /{id}             update_job
/// PUT    /{id}/status      set_job_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route("/search", get(jobs::search_jobs))
        .route("/{id}", get(jobs::get_job).put(jobs::update_job))
        .route("/{id}/status", put(jobs::set_job_status))
}
