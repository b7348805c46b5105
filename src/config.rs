//! App Configuration
//!
//! Storage keys and log level, with overrides from the page query string.

use log::LevelFilter;
use percent_encoding::percent_decode_str;

pub const ITEMS_KEY: &str = "shoppingList";
pub const PROFILE_KEY: &str = "userProfile";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage key for the item array
    pub items_key: String,
    /// Storage key for the profile record
    pub profile_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items_key: ITEMS_KEY.to_string(),
            profile_key: PROFILE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Apply overrides from a `location.search` string such as `?log=debug`.
    /// Unknown keys and unparsable values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(value).decode_utf8_lossy();
            match key {
                "log" => {
                    if let Ok(level) = value.parse::<LevelFilter>() {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }

        config
    }

    /// Read overrides from the current page URL
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
