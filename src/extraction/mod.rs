//! Rule-based symptom extraction.
//!
//! ```text
//! raw ──normalize──▶ cleaned ──tokenize──▶ stems
//! cleaned + translated + stems ──match_symptoms──▶ mentions
//! cleaned + mentions ──resolve_composites──▶ extra mentions
//! mentions ++ extra ──dedupe──▶ ExtractionResult
//! ```
//!
//! Pure and synchronous: no I/O, no shared mutable state.

pub mod types;
pub mod normalize;
pub mod tokenize;
pub mod time_detect;
pub mod matcher;
pub mod composite;
pub mod dedup;
pub mod orchestrator;

pub use types::*;
pub use normalize::normalize;
pub use tokenize::{reduce_to_stem, tokenize};
pub use time_detect::detect_time;
pub use matcher::match_symptoms;
pub use composite::resolve_composites;
pub use dedup::dedupe;
pub use orchestrator::SymptomExtractor;
