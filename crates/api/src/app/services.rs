use catalog_items::ItemCatalog;

use crate::config::ServiceInfo;

/// State shared by all handlers: the item catalog and the service identity.
#[derive(Debug, Default)]
pub struct AppServices {
    catalog: ItemCatalog,
    info: ServiceInfo,
}

impl AppServices {
    pub fn new(info: ServiceInfo) -> Self {
        Self {
            catalog: ItemCatalog::new(),
            info,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn info(&self) -> &ServiceInfo {
        &self.info
    }
}
