use std::sync::Arc;
use std::time::Instant;

use crate::lexicon::{Lexicon, LexiconError};

use super::composite::resolve_composites;
use super::dedup::dedupe;
use super::matcher::match_symptoms;
use super::normalize::normalize;
use super::tokenize::tokenize;
use super::types::ExtractionResult;

/// Single entry point of the extraction core.
///
/// Holds an immutable, shared [`Lexicon`]; cloning the extractor is cheap and
/// concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct SymptomExtractor {
    lexicon: Arc<Lexicon>,
}

impl SymptomExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Extractor backed by the built-in lexicon.
    pub fn with_builtin_lexicon() -> Result<Self, LexiconError> {
        Ok(Self::new(Arc::new(Lexicon::builtin()?)))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract symptom mentions from Korean text and its English translation.
    ///
    /// Matcher output comes first (catalogue order), followed by composite
    /// expansions; repeated `(symptom, time)` pairs are then dropped.
    /// Never fails: empty or garbled input yields an empty result.
    pub fn extract(&self, original_text: &str, translated_text: &str) -> ExtractionResult {
        let started = Instant::now();

        let cleaned = normalize(original_text);
        let stems = tokenize(&cleaned, self.lexicon.suffix_rules());

        let mut mentions = match_symptoms(&cleaned, translated_text, &stems, &self.lexicon);
        let matched = mentions.len();
        let composites = resolve_composites(&cleaned, &mentions, &self.lexicon);
        mentions.extend(composites);

        let mentions = dedupe(mentions);

        tracing::debug!(
            stems = stems.len(),
            matched,
            total = mentions.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Symptom extraction complete"
        );

        ExtractionResult::from_mentions(mentions)
    }
}
