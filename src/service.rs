//! Request-level composition around the extraction core.
//!
//! Cleans the raw complaint, obtains an English translation from an injected
//! [`Translator`], runs the extractor and packages everything into the
//! report document returned to callers. Transport is left to the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::{normalize, ExtractionResult, SymptomExtractor};

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Translation backend unavailable: {0}")]
    Unavailable(String),

    #[error("Translation failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Korean → English translation capability.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

impl<F> Translator for F
where
    F: Fn(&str) -> Result<String, TranslationError> + Send + Sync,
{
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        self(text)
    }
}

/// Response document: `{ original, cleaned, translated, results }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub original: String,
    pub cleaned: String,
    pub translated: String,
    pub results: ExtractionResult,
}

impl ExtractionReport {
    pub fn to_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct SymptomService<T: Translator> {
    extractor: SymptomExtractor,
    translator: T,
}

impl<T: Translator> SymptomService<T> {
    pub fn new(extractor: SymptomExtractor, translator: T) -> Self {
        Self {
            extractor,
            translator,
        }
    }

    pub fn extractor(&self) -> &SymptomExtractor {
        &self.extractor
    }

    /// Clean, translate and extract a single complaint.
    pub fn analyze(&self, original: &str) -> Result<ExtractionReport, ServiceError> {
        let cleaned = normalize(original);
        let translated = self.translator.translate(&cleaned).map_err(|e| {
            tracing::warn!(error = %e, "Translation failed; no extraction performed");
            e
        })?;

        let results = self.extractor.extract(&cleaned, &translated);

        tracing::info!(
            cleaned_chars = cleaned.chars().count(),
            symptoms = results.len(),
            "Complaint analyzed"
        );

        Ok(ExtractionReport {
            original: original.to_string(),
            cleaned,
            translated,
            results,
        })
    }
}
