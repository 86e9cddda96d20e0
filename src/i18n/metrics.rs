//! Translation metrics.
//!
//! Counters for cache behavior, remote translator calls, and how often the
//! fallback dictionary had to step in. Each [`Translator`](crate::translation::Translator)
//! owns one instance so independent pipelines do not share counts.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Strings served from the translation cache
    cache_hits: AtomicUsize,

    /// Strings not found in the translation cache
    cache_misses: AtomicUsize,

    /// Batched requests sent to the translate endpoint
    api_calls: AtomicUsize,

    /// Batched requests that failed (transport, status, malformed body)
    api_failures: AtomicUsize,

    /// Strings resolved from the static fallback dictionary
    dictionary_fallbacks: AtomicUsize,

    /// Strings returned untranslated because nothing could resolve them
    untranslated: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hits(&self, count: usize) {
        self.cache_hits.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_cache_misses(&self, count: usize) {
        self.cache_misses.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_api_failure(&self) {
        self.api_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dictionary_fallback(&self) {
        self.dictionary_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_untranslated(&self) {
        self.untranslated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::Relaxed)
    }

    pub fn api_failures(&self) -> usize {
        self.api_failures.load(Ordering::Relaxed)
    }

    pub fn dictionary_fallbacks(&self) -> usize {
        self.dictionary_fallbacks.load(Ordering::Relaxed)
    }

    pub fn untranslated(&self) -> usize {
        self.untranslated.load(Ordering::Relaxed)
    }

    /// Snapshot of all counters plus derived rates.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_cache_queries = hits + misses;
        let cache_hit_rate = if total_cache_queries > 0 {
            (hits as f64 / total_cache_queries as f64) * 100.0
        } else {
            0.0
        };

        let calls = self.api_calls();
        let failures = self.api_failures();
        let api_success_rate = if calls > 0 {
            (calls.saturating_sub(failures) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            api_calls: calls,
            api_failures: failures,
            api_success_rate,
            dictionary_fallbacks: self.dictionary_fallbacks(),
            untranslated: self.untranslated(),
        }
    }
}

/// Point-in-time translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub api_calls: usize,
    pub api_failures: usize,

    /// API success rate as a percentage (0-100)
    pub api_success_rate: f64,

    pub dictionary_fallbacks: usize,
    pub untranslated: usize,
}
