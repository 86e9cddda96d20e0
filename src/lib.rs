//! Language detection, cached UI translation and keyword intent routing for
//! a multilingual mental-health companion app.

pub mod analysis;
pub mod cache;
pub mod chat;
pub mod config;
pub mod error;
pub mod i18n;
pub mod intent;
pub mod profile;
pub mod resolve;
pub mod retry;
pub mod store;
pub mod translation;
