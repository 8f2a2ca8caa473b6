//! Item catalog module.
//!
//! Holds the in-memory item collection and the rules around it: request
//! validation, paging, and the derived stats summary. No IO, no HTTP.

pub mod catalog;
pub mod item;
pub mod page;
pub mod stats;

pub use catalog::ItemCatalog;
pub use item::{Item, NewItem};
pub use page::{DEFAULT_LIMIT, MAX_PAGE_LIMIT, Page};
pub use stats::StatsSummary;
