use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Language / Period
// ---------------------------------------------------------------------------

/// Language a text signal is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }
}

/// Canonical time-of-day label attached to a symptom mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SymptomDefinition
// ---------------------------------------------------------------------------

/// Co-occurrence rule: at least one stem from each side must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub part1: Vec<String>,
    pub part2: Vec<String>,
}

impl TokenSet {
    /// Both sides intersect the given stems.
    pub fn is_satisfied_by(&self, stems: &[String]) -> bool {
        let hit = |side: &[String]| stems.iter().any(|s| side.contains(s));
        hit(&self.part1) && hit(&self.part2)
    }
}

/// One catalogue entry. Catalogue order is the output precedence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDefinition {
    pub name: String,
    #[serde(default, rename = "ko")]
    pub ko_keywords: Vec<String>,
    #[serde(default, rename = "en")]
    pub en_keywords: Vec<String>,
    #[serde(default)]
    pub token_sets: Vec<TokenSet>,
}

impl SymptomDefinition {
    /// True when none of the three rule sources can ever fire.
    pub fn is_empty(&self) -> bool {
        self.ko_keywords.is_empty() && self.en_keywords.is_empty() && self.token_sets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Time keywords / composites / suffixes
// ---------------------------------------------------------------------------

/// Surface keyword mapped to its period. Table order decides precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeKeyword {
    pub keyword: String,
    pub period: Period,
}

/// Ordered keyword table for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeKeywordTable {
    pub entries: Vec<TimeKeyword>,
}

impl TimeKeywordTable {
    pub fn new(entries: Vec<TimeKeyword>) -> Self {
        Self { entries }
    }

    /// First entry (in table order) whose keyword occurs in `text`.
    pub fn first_in(&self, text: &str) -> Option<Period> {
        self.entries
            .iter()
            .find(|e| text.contains(e.keyword.as_str()))
            .map(|e| e.period)
    }
}

/// Per-language time keyword tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeKeywords {
    pub ko: TimeKeywordTable,
    pub en: TimeKeywordTable,
}

impl TimeKeywords {
    pub fn table(&self, lang: Language) -> &TimeKeywordTable {
        match lang {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }
}

/// Trigger phrase that implies several catalogued symptoms at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRule {
    #[serde(rename = "trigger")]
    pub trigger_phrase: String,
    #[serde(rename = "symptoms")]
    pub derived_symptoms: Vec<String>,
}

/// Suffix tables used by the tokenizer.
///
/// `particles` and `endings` are kept sorted longest-first (by character
/// count, stable for equal lengths) so the first suffix that matches is the
/// longest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRules {
    particles: Vec<String>,
    endings: Vec<String>,
    single_char_stems: Vec<String>,
}

impl SuffixRules {
    pub fn new(particles: Vec<String>, endings: Vec<String>, single_char_stems: Vec<String>) -> Self {
        Self {
            particles: longest_first(particles),
            endings: longest_first(endings),
            single_char_stems,
        }
    }

    pub fn particles(&self) -> &[String] {
        &self.particles
    }

    pub fn endings(&self) -> &[String] {
        &self.endings
    }

    /// Single-character stems that survive the length filter.
    pub fn is_whitelisted(&self, stem: &str) -> bool {
        self.single_char_stems.iter().any(|s| s == stem)
    }
}

fn longest_first(mut suffixes: Vec<String>) -> Vec<String> {
    suffixes.retain(|s| !s.is_empty());
    // sort_by_key is stable: equal lengths keep declaration order
    suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    suffixes
}
