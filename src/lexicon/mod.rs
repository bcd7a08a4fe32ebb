//! Lexical tables: symptom catalogue, suffix rules, time keywords, composites.
//!
//! Built once into an immutable [`Lexicon`] and shared read-only by every
//! extraction call. Configuration problems are reported at load time and are
//! meant to stop the process before it serves a single request.

pub mod types;
pub mod loader;
mod catalogue;
mod suffixes;
mod time_keywords;

pub use types::*;
pub use loader::Lexicon;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon file {0}: {1}")]
    Io(String, String),

    #[error("Failed to parse lexicon {0}: {1}")]
    Parse(String, String),

    #[error("Lexicon contains no symptoms")]
    EmptyCatalogue,

    #[error("Symptom at position {0} has a blank name")]
    BlankName(usize),

    #[error("Duplicate symptom name: {0}")]
    DuplicateSymptom(String),

    #[error("Symptom '{0}' has no Korean keywords, English keywords or token sets")]
    EmptyDefinition(String),

    #[error("Symptom '{symptom}' token set {index} has an empty side")]
    EmptyTokenSet { symptom: String, index: usize },

    #[error("Composite rule at position {0} has a blank trigger phrase")]
    BlankTrigger(usize),

    #[error("Composite '{trigger}' names unknown symptom '{symptom}'")]
    UnknownCompositeSymptom { trigger: String, symptom: String },
}
