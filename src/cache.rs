//! Durable translation cache.
//!
//! Entries live in the shared [`KeyValueStore`] under `tx:<lang>:<source>`.
//! The cache only grows; entries are removed by an explicit [`TranslationCache::clear`].

use crate::error::StoreError;
use crate::i18n::Language;
use crate::store::KeyValueStore;
use std::sync::Arc;

const KEY_PREFIX: &str = "tx:";

#[derive(Clone)]
pub struct TranslationCache {
    store: Arc<dyn KeyValueStore>,
}

impl TranslationCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Store key for one `(language, source)` pair.
    pub fn key(lang: Language, source: &str) -> String {
        format!("{}{}:{}", KEY_PREFIX, lang.code(), source)
    }

    pub fn get(&self, lang: Language, source: &str) -> Option<String> {
        self.store.get(&Self::key(lang, source))
    }

    /// Record a translation. Rewriting an existing key with the same value is
    /// harmless, which makes overlapping writers safe.
    pub fn put(&self, lang: Language, source: &str, translated: &str) -> Result<(), StoreError> {
        self.store.set(&Self::key(lang, source), translated)
    }

    /// Record a batch of `(source, translation)` pairs in one store write.
    pub fn put_many(&self, lang: Language, pairs: &[(String, String)]) -> Result<(), StoreError> {
        let entries: Vec<(String, String)> = pairs
            .iter()
            .map(|(source, translated)| (Self::key(lang, source), translated.clone()))
            .collect();
        self.store.set_many(&entries)
    }

    /// Number of cached entries for one language.
    pub fn len_for(&self, lang: Language) -> usize {
        self.store
            .keys_with_prefix(&format!("{}{}:", KEY_PREFIX, lang.code()))
            .len()
    }

    /// Remove every cached translation, leaving other store keys alone.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self) -> Result<usize, StoreError> {
        let keys = self.store.keys_with_prefix(KEY_PREFIX);
        for key in &keys {
            self.store.remove(key)?;
        }
        Ok(keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create_cache() -> (TranslationCache, MemoryStore) {
        let store = MemoryStore::new();
        let cache = TranslationCache::new(Arc::new(store.clone()));
        (cache, store)
    }

    #[test]
    fn test_key_format() {
        assert_eq!(
            TranslationCache::key(Language::PERSIAN, "Strongly Agree"),
            "tx:fa:Strongly Agree"
        );
    }

    #[test]
    fn test_key_keeps_colons_in_source() {
        assert_eq!(
            TranslationCache::key(Language::SPANISH, "Note: rest"),
            "tx:es:Note: rest"
        );
    }

    #[test]
    fn test_put_then_get() {
        let (cache, store) = create_cache();

        assert!(cache.get(Language::SPANISH, "Agree").is_none());
        cache.put(Language::SPANISH, "Agree", "De acuerdo").unwrap();

        assert_eq!(
            cache.get(Language::SPANISH, "Agree"),
            Some("De acuerdo".to_string())
        );
        assert_eq!(store.get("tx:es:Agree"), Some("De acuerdo".to_string()));
    }

    #[test]
    fn test_put_many() {
        let (cache, store) = create_cache();
        cache
            .put_many(
                Language::GERMAN,
                &[
                    ("Next".to_string(), "Weiter".to_string()),
                    ("Profile".to_string(), "Profil".to_string()),
                ],
            )
            .unwrap();

        assert_eq!(store.get("tx:de:Next"), Some("Weiter".to_string()));
        assert_eq!(cache.get(Language::GERMAN, "Profile"), Some("Profil".to_string()));
        assert_eq!(cache.len_for(Language::GERMAN), 2);
    }

    #[test]
    fn test_entries_are_per_language() {
        let (cache, _store) = create_cache();
        cache.put(Language::SPANISH, "Agree", "De acuerdo").unwrap();

        assert!(cache.get(Language::FRENCH, "Agree").is_none());
        assert_eq!(cache.len_for(Language::SPANISH), 1);
        assert_eq!(cache.len_for(Language::FRENCH), 0);
    }

    #[test]
    fn test_clear_only_removes_translations() {
        let (cache, store) = create_cache();
        cache.put(Language::SPANISH, "Agree", "De acuerdo").unwrap();
        cache.put(Language::PERSIAN, "Agree", "موافقم").unwrap();
        store.set("chat_history", "[]").unwrap();

        assert_eq!(cache.clear().unwrap(), 2);
        assert!(cache.get(Language::SPANISH, "Agree").is_none());
        assert_eq!(store.get("chat_history"), Some("[]".to_string()));
    }
}
