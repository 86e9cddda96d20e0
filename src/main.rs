use anyhow::{Context, Result};
use mindbridge::config::Config;
use mindbridge::i18n::FallbackDictionary;
use mindbridge::intent::IntentRouter;
use mindbridge::store::{FileStore, KeyValueStore};
use mindbridge::translation::{RemoteTranslator, Translator};
use std::sync::Arc;
use tracing::info;

const QUIZ_LABELS: [&str; 5] = [
    "Strongly Agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly Disagree",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mindbridge=info".parse()?),
        )
        .init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        anyhow::bail!("Usage: mindbridge \"<text>\"");
    }

    let config = Config::from_env()?;
    let store: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(&config.store_path)
            .with_context(|| format!("Failed to open store at {}", config.store_path))?,
    );

    // Text the detector cannot place is read as the configured language
    let router = IntentRouter::default().with_fallback_language(config.default_language);
    let (language, suggestions) = router.route(&text);
    info!("Detected language: {} ({})", language.name(), language);

    println!("Language: {} ({})", language.native_name(), language);
    if suggestions.is_empty() {
        println!("No suggestions");
    }
    for action in &suggestions {
        println!("  [{}] {} -> {}", action.priority, action.label, action.target);
    }

    let translator = Translator::new(
        RemoteTranslator::from_config(&config)?,
        store,
        FallbackDictionary::builtin(),
    );
    let labels: Vec<String> = QUIZ_LABELS.iter().map(|s| s.to_string()).collect();
    let translated = translator.translate_array(&labels, language).await;

    println!("Quiz answers:");
    for (source, label) in labels.iter().zip(&translated) {
        println!("  {} = {}", source, label);
    }

    info!(
        "Translation metrics: {}",
        serde_json::to_string(&translator.metrics().report())?
    );
    Ok(())
}
