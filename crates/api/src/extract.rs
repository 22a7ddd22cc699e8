//! Request extractors whose rejections use the `{ "error", "code" }`
//! envelope instead of axum's plain-text bodies.
//!
//! Each wraps the matching axum extractor and maps its rejection to
//! [`AppError::BadRequest`](crate::error::AppError::BadRequest).

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameters, e.g. a numeric job id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
