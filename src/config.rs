use std::path::PathBuf;

use crate::lexicon::{Lexicon, LexiconError};

/// Application-level constants
pub const APP_NAME: &str = "symptom-extract";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable pointing at an external lexicon JSON file.
pub const LEXICON_PATH_ENV: &str = "SYMPTOM_LEXICON_PATH";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,symptom_extract=info"
}

/// Where the lexical tables come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexiconSource {
    /// Tables compiled into the binary.
    #[default]
    Builtin,
    /// External JSON file with the same shape.
    File(PathBuf),
}

impl LexiconSource {
    /// Resolve from `SYMPTOM_LEXICON_PATH`; unset or blank means builtin.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(LEXICON_PATH_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path.trim())),
            _ => Self::Builtin,
        }
    }

    /// Build and validate the lexicon. Errors here should abort startup.
    pub fn load(&self) -> Result<Lexicon, LexiconError> {
        match self {
            Self::Builtin => Lexicon::builtin(),
            Self::File(path) => Lexicon::load(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_symptom_extract() {
        assert_eq!(APP_NAME, "symptom-extract");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn unset_or_blank_env_means_builtin() {
        assert_eq!(LexiconSource::from_value(None), LexiconSource::Builtin);
        assert_eq!(LexiconSource::from_value(Some("  ".into())), LexiconSource::Builtin);
    }

    #[test]
    fn path_env_means_file() {
        assert_eq!(
            LexiconSource::from_value(Some(" /etc/lexicon.json ".into())),
            LexiconSource::File(PathBuf::from("/etc/lexicon.json"))
        );
    }

    #[test]
    fn builtin_source_loads() {
        let lexicon = LexiconSource::default().load().unwrap();
        assert_eq!(lexicon.symptoms().len(), 52);
    }

    #[test]
    fn file_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = LexiconSource::File(dir.path().join("nope.json"));
        assert!(matches!(source.load(), Err(LexiconError::Io(..))));
    }
}
