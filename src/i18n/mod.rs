//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type over the registry
//! - `detector`: Script and keyword heuristics mapping free text to a `Language`
//! - `strings`: Hand-written UI strings per language
//! - `fallback`: Static translations used when the remote translator cannot help
//! - `metrics`: Translation counters
//!
//! # Example
//!
//! ```rust
//! use mindbridge::i18n::{detect, Language};
//!
//! assert_eq!(detect("Bonjour, comment allez-vous"), Language::FRENCH);
//! assert_eq!(Language::from_code_or_default("xx"), Language::ENGLISH);
//! ```

mod detector;
mod fallback;
mod language;
mod metrics;
mod registry;
mod strings;

pub use detector::{detect, detect_or};
pub use fallback::FallbackDictionary;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
