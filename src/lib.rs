pub mod config;
pub mod lexicon; // Symptom catalogue, suffix and time tables
pub mod extraction; // Normalize → tokenize → match → composites → dedupe
pub mod service; // Translation + report assembly

pub use extraction::{ExtractionResult, SymptomExtractor, SymptomMention};
pub use lexicon::{Language, Lexicon, LexiconError, Period};
pub use service::{ExtractionReport, ServiceError, SymptomService, TranslationError, Translator};

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Build an extractor from the configured lexicon source.
///
/// Intended for process startup: a lexicon error means the catalogue is
/// inconsistent and the host should refuse to start.
pub fn build_extractor(source: &config::LexiconSource) -> Result<SymptomExtractor, LexiconError> {
    let lexicon = source.load()?;
    tracing::info!(
        "{} v{} ready with {} symptoms",
        config::APP_NAME,
        config::APP_VERSION,
        lexicon.symptoms().len()
    );
    Ok(SymptomExtractor::new(Arc::new(lexicon)))
}
