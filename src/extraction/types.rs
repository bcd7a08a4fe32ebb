use serde::{Deserialize, Serialize};

use crate::lexicon::Period;

/// A recognised symptom with its optional time-of-day context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymptomMention {
    pub symptom: String,
    pub time: Option<Period>,
}

impl SymptomMention {
    pub fn new(symptom: impl Into<String>, time: Option<Period>) -> Self {
        Self {
            symptom: symptom.into(),
            time,
        }
    }
}

/// Which rule produced a match. Used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    KoreanKeyword,
    EnglishKeyword,
    TokenSet,
    Composite,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KoreanKeyword => "ko_keyword",
            Self::EnglishKeyword => "en_keyword",
            Self::TokenSet => "token_set",
            Self::Composite => "composite",
        }
    }
}

/// Ordered, de-duplicated extraction output. Created per call, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    mentions: Vec<SymptomMention>,
}

impl ExtractionResult {
    pub(crate) fn from_mentions(mentions: Vec<SymptomMention>) -> Self {
        Self { mentions }
    }

    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymptomMention> {
        self.mentions.iter()
    }

    pub fn mentions(&self) -> &[SymptomMention] {
        &self.mentions
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.mentions.iter().any(|m| m.symptom == symptom)
    }

    /// Distinct symptom names in first-seen order, as the disease predictor
    /// expects them.
    pub fn symptom_keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::with_capacity(self.mentions.len());
        for m in &self.mentions {
            if !keywords.contains(&m.symptom) {
                keywords.push(m.symptom.clone());
            }
        }
        keywords
    }

    pub fn into_mentions(self) -> Vec<SymptomMention> {
        self.mentions
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a SymptomMention;
    type IntoIter = std::slice::Iter<'a, SymptomMention>;

    fn into_iter(self) -> Self::IntoIter {
        self.mentions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mention_serializes_missing_time_as_null() {
        let json = serde_json::to_string(&SymptomMention::new("기침", None)).unwrap();
        assert_eq!(json, r#"{"symptom":"기침","time":null}"#);
    }

    #[test]
    fn result_serializes_as_plain_list() {
        let result = ExtractionResult::from_mentions(vec![SymptomMention::new(
            "미열",
            Some(Period::Morning),
        )]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"symptom":"미열","time":"morning"}]"#);
    }

    #[test]
    fn symptom_keywords_collapse_time_variants() {
        let result = ExtractionResult::from_mentions(vec![
            SymptomMention::new("기침", Some(Period::Night)),
            SymptomMention::new("가래", None),
            SymptomMention::new("기침", None),
        ]);
        assert_eq!(result.symptom_keywords(), vec!["기침", "가래"]);
        assert!(result.contains("가래"));
        assert!(!result.contains("두통"));
        assert_eq!(result.len(), 3);
    }
}
