//! The in-memory item catalog.
//!
//! One ordered collection plus the next-id counter, both behind a single
//! `RwLock`: every mutation is one step under the write lock, so readers
//! never see a half-applied change.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use catalog_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, NewItem};
use crate::page::Page;
use crate::stats::StatsSummary;

#[derive(Debug)]
struct CatalogState {
    items: Vec<Item>,
    next_id: ItemId,
}

/// Process-wide item collection.
#[derive(Debug)]
pub struct ItemCatalog {
    inner: RwLock<CatalogState>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogState {
                items: Vec::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    // Mutations are a single push or retain, so a poisoned lock still guards
    // consistent state.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate an untrusted body and store the resulting item.
    pub fn create_from_json(&self, body: &Value) -> DomainResult<Item> {
        let new = NewItem::from_json(body)?;
        Ok(self.create_item(new))
    }

    /// Assign the next id and append.
    pub fn create_item(&self, new: NewItem) -> Item {
        let mut state = self.write();
        let id = state.next_id;
        state.next_id = id.next();

        let item = Item::new(id, new);
        state.items.push(item.clone());
        item
    }

    /// Items in insertion order, restricted to `page`.
    pub fn list_items(&self, page: Page) -> Vec<Item> {
        page.window(&self.read().items).to_vec()
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<Item> {
        self.read()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    /// Remove the item with `id`; `NotFound` when nothing matched.
    pub fn delete_item(&self, id: ItemId) -> DomainResult<ItemId> {
        let mut state = self.write();
        let before = state.items.len();
        state.items.retain(|item| item.id != id);

        if state.items.len() == before {
            return Err(DomainError::not_found());
        }
        Ok(id)
    }

    pub fn stats(&self) -> StatsSummary {
        StatsSummary::compute(&self.read().items)
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn widget(name: &str, price: f64) -> NewItem {
        NewItem::new(name, price)
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let catalog = ItemCatalog::new();
        let a = catalog.create_item(widget("a", 1.0));
        let b = catalog.create_item(widget("b", 2.0));
        assert_eq!(a.id, ItemId::from_u64(1));
        assert_eq!(b.id, ItemId::from_u64(2));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let catalog = ItemCatalog::new();
        let a = catalog.create_item(widget("a", 1.0));
        catalog.delete_item(a.id).unwrap();
        let b = catalog.create_item(widget("b", 1.0));
        assert_eq!(b.id, ItemId::from_u64(2));
    }

    #[test]
    fn get_returns_the_created_record() {
        let catalog = ItemCatalog::new();
        let created = catalog.create_item(widget("a", 3.5).with_description("d").with_tax(0.5));
        assert_eq!(catalog.get_item(created.id).unwrap(), created);
    }

    #[test]
    fn unknown_ids_are_not_found_for_get_and_delete() {
        let catalog = ItemCatalog::new();
        let unknown = ItemId::from_u64(99_999);
        assert_eq!(catalog.get_item(unknown), Err(DomainError::NotFound));
        assert_eq!(catalog.delete_item(unknown), Err(DomainError::NotFound));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let catalog = ItemCatalog::new();
        let a = catalog.create_item(widget("a", 1.0));
        assert_eq!(catalog.delete_item(a.id), Ok(a.id));
        assert_eq!(catalog.get_item(a.id), Err(DomainError::NotFound));
        assert_eq!(catalog.delete_item(a.id), Err(DomainError::NotFound));
        assert!(catalog.is_empty());
    }

    #[test]
    fn delete_preserves_order_of_the_rest() {
        let catalog = ItemCatalog::new();
        let ids: Vec<_> = (0..4).map(|i| catalog.create_item(widget("x", i as f64)).id).collect();
        catalog.delete_item(ids[1]).unwrap();
        let remaining: Vec<_> = catalog.list_items(Page::default()).into_iter().map(|i| i.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn create_from_json_validates_first() {
        let catalog = ItemCatalog::new();
        let err = catalog.create_from_json(&json!({"name": "a"})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(catalog.is_empty());

        let item = catalog.create_from_json(&json!({"name": "a", "price": 2})).unwrap();
        assert_eq!(item.id, ItemId::FIRST);
    }

    #[test]
    fn stats_track_the_collection() {
        let catalog = ItemCatalog::new();
        assert_eq!(catalog.stats(), StatsSummary::default());
        catalog.create_item(widget("a", 10.0).with_tax(1.0));
        catalog.create_item(widget("b", 20.0));
        let s = catalog.stats();
        assert_eq!(s.total_items, 2);
        assert_eq!(s.total_value, 31.0);
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let catalog = Arc::new(ItemCatalog::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let catalog = catalog.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| catalog.create_item(widget(&format!("{t}-{i}"), 1.0)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 400);
        assert_eq!(catalog.len(), 400);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: listing returns items in creation order with fresh, increasing ids.
            #[test]
            fn list_preserves_creation_order(
                names in prop::collection::vec("[a-z]{1,12}", 0..40)
            ) {
                let catalog = ItemCatalog::new();
                let created: Vec<Item> = names
                    .iter()
                    .map(|n| catalog.create_item(NewItem::new(n.clone(), 1.0)))
                    .collect();

                let listed = catalog.list_items(Page::default());
                prop_assert_eq!(&listed, &created);
                prop_assert!(created.windows(2).all(|w| w[0].id < w[1].id));
            }

            /// Property: a page is exactly the matching slice of the full listing.
            #[test]
            fn page_is_a_slice_of_the_listing(
                count in 0usize..60,
                skip in -5i64..80,
                limit in -5i64..80,
            ) {
                let catalog = ItemCatalog::new();
                for i in 0..count {
                    catalog.create_item(NewItem::new(format!("i{i}"), i as f64));
                }
                let all = catalog.list_items(Page::new(0, MAX_LIMIT));
                let page = catalog.list_items(Page::new(skip, limit));

                let start = (skip.max(0) as usize).min(count);
                let end = (start + limit.max(0) as usize).min(count);
                prop_assert_eq!(page, all[start..end].to_vec());
            }

            /// Property: total value is the sum of price plus tax-or-zero.
            #[test]
            fn total_value_is_sum_of_gross_values(
                entries in prop::collection::vec((-1000.0f64..1000.0, prop::option::of(0.0f64..100.0)), 1..30)
            ) {
                let catalog = ItemCatalog::new();
                let mut expected = 0.0;
                for (price, tax) in &entries {
                    let mut new = NewItem::new("p", *price);
                    new.tax = *tax;
                    catalog.create_item(new);
                    expected += price + tax.unwrap_or(0.0);
                }
                let stats = catalog.stats();
                prop_assert_eq!(stats.total_items, entries.len());
                prop_assert!((stats.total_value - expected).abs() < 1e-6);
                prop_assert!(stats.min_price <= stats.average_price + 1e-9);
                prop_assert!(stats.average_price <= stats.max_price + 1e-9);
            }
        }

        const MAX_LIMIT: i64 = crate::page::MAX_PAGE_LIMIT as i64;
    }
}
