//! Application Context
//!
//! Controllers shared via Leptos Context API. Each handler calls exactly one
//! controller operation; the signal wrapping the controller re-renders
//! whatever read from it.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::list::ListController;
use crate::models::{DisplayEntry, FilterMode, ItemId, Profile, Stats};
use crate::profile::ProfileController;
use crate::storage::BrowserStorage;

/// App-wide controllers provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    list: RwSignal<ListController<BrowserStorage>>,
    profile: RwSignal<ProfileController<BrowserStorage>>,
}

impl AppContext {
    /// Load both controllers from local storage
    pub fn new(config: &AppConfig) -> Self {
        Self {
            list: RwSignal::new(ListController::initialize(BrowserStorage, config.items_key.clone())),
            profile: RwSignal::new(ProfileController::initialize(BrowserStorage, config.profile_key.clone())),
        }
    }

    /// Rows for the list view (reactive)
    pub fn display_entries(&self, filter: FilterMode) -> Vec<DisplayEntry> {
        self.list.with(|list| list.display_entries(filter))
    }

    /// Whether the placeholder rows are showing (reactive)
    pub fn is_demo(&self) -> bool {
        self.list.with(|list| list.is_demo())
    }

    /// Current counts (reactive)
    pub fn stats(&self) -> Stats {
        self.list.with(|list| list.stats())
    }

    pub fn add_item(&self, text: &str) -> Option<ItemId> {
        self.list.try_update(|list| list.add_item(text)).flatten()
    }

    pub fn toggle(&self, id: ItemId) {
        self.list.update(|list| {
            list.toggle(id);
        });
    }

    pub fn remove(&self, id: ItemId) {
        self.list.update(|list| {
            list.remove(id);
        });
    }

    /// Current profile (reactive)
    pub fn profile(&self) -> Profile {
        self.profile.with(|p| p.profile().clone())
    }

    /// Returns whether the profile was replaced
    pub fn register(&self, username: &str, email: &str, password: &str) -> bool {
        self.profile
            .try_update(|p| match p.register(username, email, password) {
                Ok(_) => true,
                Err(e) => {
                    log::debug!("Registration ignored: {}", e);
                    false
                }
            })
            .unwrap_or(false)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
