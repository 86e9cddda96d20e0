//! Ordered resolution strategies for a single `(language, source)` pair.
//!
//! Each tier either finds a translation or passes. A [`ResolverChain`]
//! tries its tiers in order and stops at the first hit.

use crate::cache::TranslationCache;
use crate::i18n::{FallbackDictionary, Language};
use std::sync::Arc;

/// Where a resolved string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Dictionary,
}

/// One resolution tier.
pub trait ResolutionStrategy: Send + Sync {
    fn resolve(&self, lang: Language, source: &str) -> Option<String>;

    fn source(&self) -> Source;
}

/// Tier backed by the durable translation cache.
pub struct CacheTier {
    cache: TranslationCache,
}

impl CacheTier {
    pub fn new(cache: TranslationCache) -> Self {
        Self { cache }
    }
}

impl ResolutionStrategy for CacheTier {
    fn resolve(&self, lang: Language, source: &str) -> Option<String> {
        self.cache.get(lang, source)
    }

    fn source(&self) -> Source {
        Source::Cache
    }
}

/// Tier backed by the static fallback dictionary.
pub struct DictionaryTier {
    dictionary: Arc<FallbackDictionary>,
}

impl DictionaryTier {
    pub fn new(dictionary: Arc<FallbackDictionary>) -> Self {
        Self { dictionary }
    }
}

impl ResolutionStrategy for DictionaryTier {
    fn resolve(&self, lang: Language, source: &str) -> Option<String> {
        self.dictionary.lookup(lang, source).map(str::to_string)
    }

    fn source(&self) -> Source {
        Source::Dictionary
    }
}

/// Tiers tried in insertion order.
#[derive(Default)]
pub struct ResolverChain {
    tiers: Vec<Box<dyn ResolutionStrategy>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(mut self, tier: impl ResolutionStrategy + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// First hit, tagged with the tier it came from.
    pub fn resolve(&self, lang: Language, source: &str) -> Option<(String, Source)> {
        self.tiers
            .iter()
            .find_map(|tier| tier.resolve(lang, source).map(|value| (value, tier.source())))
    }

    /// First hit, or `source` unchanged when no tier has an answer.
    pub fn resolve_or_source(&self, lang: Language, source: &str) -> String {
        self.resolve(lang, source)
            .map(|(value, _)| value)
            .unwrap_or_else(|| source.to_string())
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
