//! Request extractors that reject with [`ApiError`]
//!
//! axum's own `Json`, `Path` and `Query` extractors answer bad input with plain-text
//! bodies. These wrappers run the same extraction but route rejections
//! through `ApiError`, so clients always get the JSON error format.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
