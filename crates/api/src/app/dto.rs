use serde::{Deserialize, Serialize};

use catalog_core::{ItemId, ValidationErrors};
use catalog_items::Page;

use crate::config::ServiceInfo;

// -------------------------
// Request DTOs
// -------------------------

/// Raw `skip`/`limit` query values, kept as text so bad integers become
/// field-level validation errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl ListItemsQuery {
    pub fn page(&self) -> Result<Page, ValidationErrors> {
        Page::from_query(self.skip.as_deref(), self.limit.as_deref())
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: &'static str,
}

impl RootResponse {
    pub fn welcome(info: &ServiceInfo) -> Self {
        Self {
            message: format!("Welcome to {}", info.title),
            status: "healthy",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy(info: &ServiceInfo) -> Self {
        Self {
            status: "healthy",
            service: info.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn for_item(id: ItemId) -> Self {
        Self {
            message: format!("Item {id} deleted"),
        }
    }
}
