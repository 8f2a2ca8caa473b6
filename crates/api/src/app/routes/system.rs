use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::app::dto::{HealthResponse, RootResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn root(Extension(services): Extension<Arc<AppServices>>) -> Json<RootResponse> {
    Json(RootResponse::welcome(services.info()))
}

pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(services.info()))
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
