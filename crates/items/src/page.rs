//! List windows (`skip`/`limit`).

use catalog_core::{FieldError, ValidationErrors};

pub const DEFAULT_SKIP: usize = 0;
pub const DEFAULT_LIMIT: usize = 100;
/// Upper bound on `limit`; larger requests are truncated to it.
pub const MAX_PAGE_LIMIT: usize = 1000;

/// A validated window over the collection.
///
/// Negative inputs clamp to zero and `limit` clamps to [`MAX_PAGE_LIMIT`], so
/// any pair of integers yields a usable page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    skip: usize,
    limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: clamp(skip, usize::MAX),
            limit: clamp(limit, MAX_PAGE_LIMIT),
        }
    }

    /// Build a page from raw query-string values; absent values take defaults.
    pub fn from_query(skip: Option<&str>, limit: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();
        let skip = parse_param("skip", skip, DEFAULT_SKIP as i64, &mut errors);
        let limit = parse_param("limit", limit, DEFAULT_LIMIT as i64, &mut errors);
        ValidationErrors::check(errors)?;
        Ok(Self::new(skip, limit))
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The contiguous slice of `items` this page covers (possibly empty).
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

fn clamp(value: i64, max: usize) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX).min(max)
}

fn parse_param(name: &str, raw: Option<&str>, default: i64, errors: &mut Vec<FieldError>) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            errors.push(FieldError::int_parsing(&["query", name], raw));
            default
        }
    }
}
