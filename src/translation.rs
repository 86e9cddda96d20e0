use crate::cache::TranslationCache;
use crate::config::Config;
use crate::error::TranslateError;
use crate::i18n::{FallbackDictionary, Language, TranslationMetrics};
use crate::resolve::{CacheTier, DictionaryTier, ResolverChain, Source};
use crate::store::KeyValueStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Batched translate request body
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    texts: &'a [String],
    language: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<String>,
}

/// Thin client for the translate endpoint: one POST per batch.
#[derive(Debug, Clone)]
pub struct RemoteTranslator {
    client: reqwest::Client,
    url: String,
}

impl RemoteTranslator {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.http_client()?, &config.translate_api_url))
    }

    /// Translate `texts` into `lang`. The result has the same length and
    /// order as `texts`; anything else is reported as an error.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        lang: Language,
    ) -> Result<Vec<String>, TranslateError> {
        let request = TranslateRequest {
            texts,
            language: lang.code(),
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslateError::Status { status, body });
        }

        let parsed: TranslateResponse = response.json().await?;

        if parsed.translations.len() != texts.len() {
            return Err(TranslateError::LengthMismatch {
                expected: texts.len(),
                got: parsed.translations.len(),
            });
        }

        Ok(parsed.translations)
    }
}

/// The translation pipeline: durable cache, one batched remote call for
/// whatever is missing, and the static dictionary behind both.
pub struct Translator {
    remote: RemoteTranslator,
    cache: TranslationCache,
    dictionary: Arc<FallbackDictionary>,
    fallback: ResolverChain,
    metrics: Arc<TranslationMetrics>,
}

impl Translator {
    pub fn new(
        remote: RemoteTranslator,
        store: Arc<dyn KeyValueStore>,
        dictionary: FallbackDictionary,
    ) -> Self {
        let cache = TranslationCache::new(store);
        let dictionary = Arc::new(dictionary);
        let fallback = ResolverChain::new()
            .with_tier(CacheTier::new(cache.clone()))
            .with_tier(DictionaryTier::new(Arc::clone(&dictionary)));

        Self {
            remote,
            cache,
            dictionary,
            fallback,
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Translate a batch of English UI strings into `lang`.
    ///
    /// Never fails: the output always has one entry per input, in input
    /// order. English input is returned as-is without touching the cache.
    pub async fn translate_array(&self, texts: &[String], lang: Language) -> Vec<String> {
        if lang.is_canonical() || texts.is_empty() {
            return texts.to_vec();
        }

        let mut resolved: Vec<Option<String>> =
            texts.iter().map(|text| self.cache.get(lang, text)).collect();

        let hits = resolved.iter().filter(|slot| slot.is_some()).count();
        self.metrics.record_cache_hits(hits);
        self.metrics.record_cache_misses(texts.len() - hits);

        // Unique missing sources, first-seen order
        let mut seen = HashSet::new();
        let mut missing = Vec::new();
        for (text, slot) in texts.iter().zip(&resolved) {
            if slot.is_none() && seen.insert(text.as_str()) {
                missing.push(text.clone());
            }
        }

        if missing.is_empty() {
            debug!("All {} strings for {} served from cache", texts.len(), lang);
            return resolved.into_iter().flatten().collect();
        }

        debug!(
            "Requesting {} of {} strings from translate API ({})",
            missing.len(),
            texts.len(),
            lang
        );
        self.metrics.record_api_call();

        match self.remote.translate_batch(&missing, lang).await {
            Ok(translations) => {
                let fresh = self.accept_translations(&missing, translations, lang);
                for (slot, text) in resolved.iter_mut().zip(texts) {
                    if slot.is_none() {
                        *slot = fresh.get(text.as_str()).cloned();
                    }
                }
            }
            Err(e) => {
                self.metrics.record_api_failure();
                warn!(
                    "Translation to {} failed, using fallback dictionary: {}",
                    lang.name(),
                    e
                );
                for (slot, text) in resolved.iter_mut().zip(texts) {
                    if slot.is_none() {
                        *slot = Some(self.resolve_without_remote(text, lang));
                    }
                }
            }
        }

        resolved
            .into_iter()
            .zip(texts)
            .map(|(slot, text)| slot.unwrap_or_else(|| text.clone()))
            .collect()
    }

    /// Single-string convenience over [`Translator::translate_array`].
    pub async fn translate(&self, text: &str, lang: Language) -> String {
        self.translate_array(&[text.to_string()], lang)
            .await
            .into_iter()
            .next()
            .unwrap_or_else(|| text.to_string())
    }

    /// Swap no-op translations for dictionary entries and write everything
    /// to the cache in one batch. Returns source → final translation.
    fn accept_translations<'a>(
        &self,
        sources: &'a [String],
        translations: Vec<String>,
        lang: Language,
    ) -> HashMap<&'a str, String> {
        let accepted: Vec<(String, String)> = sources
            .iter()
            .zip(translations)
            .map(|(source, translated)| {
                let value = if translated == *source {
                    match self.dictionary.lookup(lang, source) {
                        Some(entry) => {
                            self.metrics.record_dictionary_fallback();
                            entry.to_string()
                        }
                        None => translated,
                    }
                } else {
                    translated
                };
                (source.clone(), value)
            })
            .collect();

        if let Err(e) = self.cache.put_many(lang, &accepted) {
            warn!("Failed to cache {} translations for {}: {}", accepted.len(), lang, e);
        }

        sources
            .iter()
            .map(String::as_str)
            .zip(accepted.into_iter().map(|(_, value)| value))
            .collect()
    }

    fn resolve_without_remote(&self, text: &str, lang: Language) -> String {
        match self.fallback.resolve(lang, text) {
            Some((value, Source::Dictionary)) => {
                self.metrics.record_dictionary_fallback();
                value
            }
            Some((value, Source::Cache)) => value,
            None => {
                self.metrics.record_untranslated();
                text.to_string()
            }
        }
    }
}
