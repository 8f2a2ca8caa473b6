use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    routing::get,
    Json, Router,
};

use catalog_core::ItemId;
use catalog_items::{Item, StatsSummary};

use crate::app::dto::{DeletedResponse, ListItemsQuery};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// Item routes. `/items/stats` is a literal segment, so it always wins over
/// `/items/:item_id`.
pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/stats", get(get_stats))
        .route("/items/:item_id", get(get_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(body) = body?;
    let item = services.catalog().create_from_json(&body)?;
    tracing::info!(item_id = %item.id, "item created");
    Ok(Json(item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(query) = query?;
    let page = query.page()?;
    Ok(Json(services.catalog().list_items(page)))
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id: ItemId = item_id.parse()?;
    Ok(Json(services.catalog().get_item(id)?))
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id: ItemId = item_id.parse()?;
    let deleted = services.catalog().delete_item(id)?;
    tracing::info!(item_id = %deleted, "item deleted");
    Ok(Json(DeletedResponse::for_item(deleted)))
}

pub async fn get_stats(Extension(services): Extension<Arc<AppServices>>) -> Json<StatsSummary> {
    Json(services.catalog().stats())
}
