//! UI State Store
//!
//! View-only state (filter, input draft, current view) using
//! reactive_stores for field-level reactivity. Nothing here is persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FilterMode;

/// Which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    List,
    Profile,
    Register,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::List, Page::Profile, Page::Register];

    pub fn label(&self) -> &'static str {
        match self {
            Page::List => "List",
            Page::Profile => "Profile",
            Page::Register => "Register",
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Active list filter
    pub filter: FilterMode,
    /// Text in the new-item input
    pub draft: String,
    pub page: Page,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
