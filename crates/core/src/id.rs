//! Strongly-typed item identifier.

use core::num::IntErrorKind;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an item.
///
/// Assigned by the catalog from a process-wide counter starting at 1; never
/// reused. Serialized as a bare integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first id handed out by a fresh catalog.
    pub const FIRST: ItemId = ItemId(1);

    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    ///
    /// Saturates at `u64::MAX`. One id is consumed per create, so a process
    /// cannot get there.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Why a textual id could not become an [`ItemId`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemIdParseError {
    /// Not an integer at all.
    #[error("not an integer: {0:?}")]
    NotInteger(String),

    /// An integer, but no item can ever carry it (zero, negative, or too large).
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl FromStr for ItemId {
    type Err = ItemIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s.trim().parse().map_err(|e: core::num::ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ItemIdParseError::OutOfRange(s.trim().to_string())
            }
            _ => ItemIdParseError::NotInteger(s.to_string()),
        })?;
        if raw < 1 {
            return Err(ItemIdParseError::OutOfRange(raw.to_string()));
        }
        Ok(Self(raw as u64))
    }
}
