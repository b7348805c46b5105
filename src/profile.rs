//! Profile Controller
//!
//! Single replace-only profile record backed by storage.

use log::{debug, error, info, warn};

use crate::error::RegistrationError;
use crate::models::Profile;
use crate::storage::{self, KeyValueStore};

#[derive(Debug, Clone)]
pub struct ProfileController<S: KeyValueStore> {
    store: S,
    key: String,
    profile: Profile,
}

impl<S: KeyValueStore> ProfileController<S> {
    /// Load the stored profile or fall back to the default one
    pub fn initialize(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let profile = match storage::load_json::<Profile>(&store, &key) {
            Ok(Some(profile)) => profile,
            Ok(None) => Profile::default(),
            Err(e) => {
                warn!("Ignoring stored profile under {:?}: {}", key, e);
                Profile::default()
            }
        };
        info!("Profile initialized for {:?}", profile.username);
        Self { store, key, profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace the profile with `{username, email}`. All three fields must be
    /// non-empty after trimming. The password is checked and then dropped.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> Result<&Profile, RegistrationError> {
        let username = non_empty("username", username)?;
        let email = non_empty("email", email)?;
        non_empty("password", password)?;

        self.profile = Profile {
            username: username.to_string(),
            email: email.to_string(),
        };
        if let Err(e) = storage::save_json(&self.store, &self.key, &self.profile) {
            error!("Failed to save profile under {:?}: {}", self.key, e);
        }
        debug!("Registered {:?}", self.profile.username);
        Ok(&self.profile)
    }
}

fn non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str, RegistrationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(RegistrationError::MissingField(field))
    } else {
        Ok(value)
    }
}
