use axum::routing::{get, put};
use axum::Router;

use crate::handlers::library;
use crate::state::AppState;

/// Routes mounted at `/library`.
///
/// ```text
/// GET    /{faculty}/files               list_files
/// PUT    /{faculty}/files/{filename}    upload_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{faculty}/files", get(library::list_files))
        .route("/{faculty}/files/{filename}", put(library::upload_file))
}

/// Lookup lists used to populate job forms.
pub fn lookup_router() -> Router<AppState> {
    Router::new()
        .route("/faculties", get(library::list_faculties))
        .route("/statuses", get(library::list_statuses))
}
