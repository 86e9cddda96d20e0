use crate::error::StoreError;
use crate::i18n::Language;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Store key holding the serialized profile.
pub const PROFILE_KEY: &str = "user_profile";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    /// Preferred UI language
    #[serde(default)]
    pub language: Language,
    pub joined_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            bio: String::new(),
            language: Language::default(),
            joined_at: Utc::now(),
        }
    }
}

pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved profile, if one exists and parses.
    pub fn load(&self) -> Option<UserProfile> {
        let raw = self.store.get(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Ignoring unreadable user profile: {}", e);
                None
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn profiles() -> ProfileStore {
        ProfileStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_new_profile_defaults() {
        let profile = UserProfile::new("Sara");
        assert_eq!(profile.name, "Sara");
        assert_eq!(profile.language, Language::ENGLISH);
        assert!(profile.email.is_empty());
        assert!(profile.bio.is_empty());
    }

    #[test]
    fn test_load_without_saved_profile() {
        assert!(profiles().load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = profiles();
        let mut profile = UserProfile::new("Reza");
        profile.language = Language::PERSIAN;
        profile.email = "reza@example.com".to_string();

        store.save(&profile).unwrap();
        assert_eq!(store.load(), Some(profile));
    }

    #[test]
    fn test_load_corrupt_profile() {
        let raw = Arc::new(MemoryStore::new());
        raw.set(PROFILE_KEY, "[1, 2").unwrap();
        assert!(ProfileStore::new(raw).load().is_none());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let raw = Arc::new(MemoryStore::new());
        raw.set(
            PROFILE_KEY,
            r#"{"name":"Ana","joinedAt":"2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();

        let profile = ProfileStore::new(raw).load().expect("Should parse");
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.language, Language::ENGLISH);
        assert!(profile.bio.is_empty());
    }

    #[test]
    fn test_language_serialized_as_code() {
        let mut profile = UserProfile::new("Lena");
        profile.language = Language::GERMAN;
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["language"], "de");
        assert!(value.get("joinedAt").is_some());
    }
}
