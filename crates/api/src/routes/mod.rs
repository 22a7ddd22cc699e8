pub mod health;
pub mod jobs;
pub mod library;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /faculties                                  faculty list
/// /statuses                                   status list
///
/// /jobs                                       list, create
/// /jobs/search                                dashboard search
/// /jobs/{id}                                  get, full edit
/// /jobs/{id}/status                           status-only change
///
/// /library/{faculty}/files                    list library files
/// /library/{faculty}/files/{filename}         upload one file (raw body)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(library::lookup_router())
        .nest("/jobs", jobs::router())
        .nest("/library", library::router())
}
