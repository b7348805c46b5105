//! Frontend Models
//!
//! Data structures shared by the controllers and the components.

use serde::{Deserialize, Serialize};

/// Session-local identifier for a real list entry (never persisted)
pub type ItemId = u32;

/// Shopping item, also the exact shape persisted under `shoppingList`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub got: bool,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            got: false,
        }
    }
}

/// A real entry in the list: the item plus its session id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: ItemId,
    pub item: Item,
}

/// User profile record (replace-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: "Demo User".to_string(),
            email: "user@example.com".to_string(),
        }
    }
}

/// Derived counts over the real entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub got: usize,
    pub remaining: usize,
}

impl Stats {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let (total, got) = items
            .into_iter()
            .fold((0, 0), |(total, got), item| (total + 1, got + item.got as usize));
        Self {
            total,
            got,
            remaining: total - got,
        }
    }
}

/// Display-only visibility rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Got,
    Need,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Got, FilterMode::Need];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Got => "got",
            FilterMode::Need => "need",
        }
    }

    /// Whether an entry with this `got` flag is shown
    pub fn shows(&self, got: bool) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Got => got,
            FilterMode::Need => !got,
        }
    }
}

/// One rendered row. Demo rows carry no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub id: Option<ItemId>,
    pub text: String,
    pub got: bool,
    pub demo: bool,
}
