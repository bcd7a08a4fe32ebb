use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::catalogue::{COMPOSITES, SYMPTOMS};
use super::suffixes::{ENDINGS, PARTICLES, SINGLE_CHAR_STEMS};
use super::time_keywords::{EN_TIME_KEYWORDS, KO_TIME_KEYWORDS};
use super::types::*;
use super::LexiconError;

/// Immutable lexical tables shared by every extraction call.
#[derive(Debug, Clone)]
pub struct Lexicon {
    symptoms: Vec<SymptomDefinition>,
    suffix_rules: SuffixRules,
    time_keywords: TimeKeywords,
    composites: Vec<CompositeRule>,
}

/// On-disk shape of an external lexicon. Omitted optional sections fall back
/// to the built-in tables.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    symptoms: Vec<SymptomDefinition>,
    particles: Option<Vec<String>>,
    endings: Option<Vec<String>>,
    single_char_stems: Option<Vec<String>>,
    time_keywords: Option<TimeKeywords>,
    composites: Option<Vec<CompositeRule>>,
}

impl Lexicon {
    /// Assemble and validate a lexicon from its parts.
    ///
    /// English keywords are stored lower-cased to match the lower-cased
    /// translation they are searched in.
    pub fn new(
        mut symptoms: Vec<SymptomDefinition>,
        suffix_rules: SuffixRules,
        time_keywords: TimeKeywords,
        composites: Vec<CompositeRule>,
    ) -> Result<Self, LexiconError> {
        for keyword in symptoms.iter_mut().flat_map(|def| def.en_keywords.iter_mut()) {
            *keyword = keyword.to_lowercase();
        }
        let lexicon = Self {
            symptoms,
            suffix_rules,
            time_keywords,
            composites,
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Lexicon compiled into the binary.
    pub fn builtin() -> Result<Self, LexiconError> {
        let lexicon = Self::new(
            builtin_symptoms(),
            builtin_suffix_rules(),
            builtin_time_keywords(),
            builtin_composites(),
        )?;
        lexicon.log_loaded("builtin");
        Ok(lexicon)
    }

    /// Parse a lexicon from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Self::parse(json, "<inline>")
    }

    /// Load a lexicon from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| LexiconError::Io(path.display().to_string(), e.to_string()))?;
        let lexicon = Self::parse(&json, &path.display().to_string())?;
        lexicon.log_loaded("file");
        Ok(lexicon)
    }

    fn parse(json: &str, origin: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)
            .map_err(|e| LexiconError::Parse(origin.to_string(), e.to_string()))?;

        let suffix_rules = match (file.particles, file.endings, file.single_char_stems) {
            (None, None, None) => builtin_suffix_rules(),
            (particles, endings, stems) => SuffixRules::new(
                particles.unwrap_or_else(|| owned(PARTICLES)),
                endings.unwrap_or_else(|| owned(ENDINGS)),
                stems.unwrap_or_else(|| owned(SINGLE_CHAR_STEMS)),
            ),
        };

        Self::new(
            file.symptoms,
            suffix_rules,
            file.time_keywords.unwrap_or_else(builtin_time_keywords),
            file.composites.unwrap_or_else(builtin_composites),
        )
    }

    fn validate(&self) -> Result<(), LexiconError> {
        if self.symptoms.is_empty() {
            return Err(LexiconError::EmptyCatalogue);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.symptoms.len());
        for (position, def) in self.symptoms.iter().enumerate() {
            if def.name.trim().is_empty() {
                return Err(LexiconError::BlankName(position));
            }
            if !seen.insert(def.name.as_str()) {
                return Err(LexiconError::DuplicateSymptom(def.name.clone()));
            }
            if def.is_empty() {
                return Err(LexiconError::EmptyDefinition(def.name.clone()));
            }
            if let Some(index) = def
                .token_sets
                .iter()
                .position(|ts| ts.part1.is_empty() || ts.part2.is_empty())
            {
                return Err(LexiconError::EmptyTokenSet {
                    symptom: def.name.clone(),
                    index,
                });
            }
        }

        for (position, rule) in self.composites.iter().enumerate() {
            if rule.trigger_phrase.trim().is_empty() {
                return Err(LexiconError::BlankTrigger(position));
            }
            if let Some(unknown) = rule
                .derived_symptoms
                .iter()
                .find(|s| !seen.contains(s.as_str()))
            {
                return Err(LexiconError::UnknownCompositeSymptom {
                    trigger: rule.trigger_phrase.clone(),
                    symptom: unknown.clone(),
                });
            }
        }

        Ok(())
    }

    fn log_loaded(&self, source: &str) {
        tracing::info!(
            source,
            symptoms = self.symptoms.len(),
            composites = self.composites.len(),
            particles = self.suffix_rules.particles().len(),
            endings = self.suffix_rules.endings().len(),
            "Lexicon loaded"
        );
    }

    /// Catalogue in precedence order.
    pub fn symptoms(&self) -> &[SymptomDefinition] {
        &self.symptoms
    }

    pub fn symptom(&self, name: &str) -> Option<&SymptomDefinition> {
        self.symptoms.iter().find(|s| s.name == name)
    }

    /// Recognised symptom vocabulary, in catalogue order.
    pub fn symptom_names(&self) -> Vec<&str> {
        self.symptoms.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn suffix_rules(&self) -> &SuffixRules {
        &self.suffix_rules
    }

    pub fn time_keywords(&self) -> &TimeKeywords {
        &self.time_keywords
    }

    pub fn composites(&self) -> &[CompositeRule] {
        &self.composites
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_symptoms() -> Vec<SymptomDefinition> {
    SYMPTOMS
        .iter()
        .map(|s| SymptomDefinition {
            name: s.name.to_string(),
            ko_keywords: owned(s.ko),
            en_keywords: owned(s.en),
            token_sets: s
                .token_sets
                .iter()
                .map(|ts| TokenSet {
                    part1: owned(ts.part1),
                    part2: owned(ts.part2),
                })
                .collect(),
        })
        .collect()
}

fn builtin_suffix_rules() -> SuffixRules {
    SuffixRules::new(owned(PARTICLES), owned(ENDINGS), owned(SINGLE_CHAR_STEMS))
}

fn builtin_time_keywords() -> TimeKeywords {
    let table = |entries: &[(&str, Period)]| {
        TimeKeywordTable::new(
            entries
                .iter()
                .map(|(keyword, period)| TimeKeyword {
                    keyword: keyword.to_string(),
                    period: *period,
                })
                .collect(),
        )
    };
    TimeKeywords {
        ko: table(KO_TIME_KEYWORDS),
        en: table(EN_TIME_KEYWORDS),
    }
}

fn builtin_composites() -> Vec<CompositeRule> {
    COMPOSITES
        .iter()
        .map(|c| CompositeRule {
            trigger_phrase: c.trigger.to_string(),
            derived_symptoms: owned(c.symptoms),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(symptoms: &str) -> String {
        format!(r#"{{ "symptoms": {symptoms} }}"#)
    }

    #[test]
    fn builtin_lexicon_is_valid() {
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(lexicon.symptoms().len(), 52);
        assert_eq!(lexicon.composites().len(), 1);
        assert_eq!(lexicon.composites()[0].trigger_phrase, "몸살");
    }

    #[test]
    fn symptom_names_follow_catalogue_order() {
        let lexicon = Lexicon::builtin().unwrap();
        let names = lexicon.symptom_names();
        assert_eq!(names[0], "가래");
        assert_eq!(names[1], "기침");
        assert_eq!(names.last(), Some(&"운동 시 통증"));
    }

    #[test]
    fn symptom_lookup_by_name() {
        let lexicon = Lexicon::builtin().unwrap();
        let def = lexicon.symptom("인후통").unwrap();
        assert!(def.ko_keywords.contains(&"목이 아파요".to_string()));
        assert!(lexicon.symptom("감기").is_none());
    }

    #[test]
    fn builtin_time_tables_are_ordered() {
        let lexicon = Lexicon::builtin().unwrap();
        let ko = &lexicon.time_keywords().ko.entries;
        assert_eq!(ko[0].keyword, "아침");
        assert_eq!(ko.last().unwrap().period, Period::Night);
        assert_eq!(lexicon.time_keywords().en.entries.len(), 4);
    }

    #[test]
    fn parses_minimal_json_with_builtin_fallbacks() {
        let json = minimal_json(
            r#"[
                { "name": "미열", "ko": ["미열"] },
                { "name": "오한", "ko": ["오한"] },
                { "name": "근육통", "ko": ["근육통"] },
                { "name": "피로", "en": ["fatigue"] }
            ]"#,
        );
        let lexicon = Lexicon::from_json(&json).unwrap();
        assert_eq!(lexicon.symptoms().len(), 4);
        assert!(lexicon.symptoms()[0].en_keywords.is_empty());
        assert_eq!(lexicon.composites()[0].trigger_phrase, "몸살");
        assert_eq!(lexicon.time_keywords().ko.first_in("아침"), Some(Period::Morning));
        assert!(lexicon.suffix_rules().is_whitelisted("배"));
    }

    #[test]
    fn builtin_composite_fallback_needs_its_symptoms() {
        let json = minimal_json(r#"[{ "name": "기침", "ko": ["기침"] }]"#);
        let err = Lexicon::from_json(&json).unwrap_err();
        assert!(matches!(err, LexiconError::UnknownCompositeSymptom { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let json = r#"{
            "symptoms": [
                { "name": "기침", "ko": ["기침"] },
                { "name": "기침", "en": ["cough"] }
            ],
            "composites": []
        }"#;
        let err = Lexicon::from_json(json).unwrap_err();
        assert!(matches!(err, LexiconError::DuplicateSymptom(ref n) if n == "기침"));
    }

    #[test]
    fn rejects_definition_without_rules() {
        let json = r#"{ "symptoms": [{ "name": "무증상" }], "composites": [] }"#;
        let err = Lexicon::from_json(json).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyDefinition(ref n) if n == "무증상"));
    }

    #[test]
    fn accepts_token_set_only_definition() {
        let json = r#"{
            "symptoms": [{
                "name": "두통",
                "token_sets": [{ "part1": ["머리"], "part2": ["아프"] }]
            }],
            "composites": []
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.symptoms()[0].token_sets.len(), 1);
    }

    #[test]
    fn rejects_token_set_with_empty_side() {
        let json = r#"{
            "symptoms": [{
                "name": "두통",
                "ko": ["두통"],
                "token_sets": [{ "part1": ["머리"], "part2": [] }]
            }],
            "composites": []
        }"#;
        let err = Lexicon::from_json(json).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyTokenSet { index: 0, .. }));
    }

    #[test]
    fn rejects_blank_name() {
        let json = r#"{ "symptoms": [{ "name": "  ", "ko": ["x"] }], "composites": [] }"#;
        assert!(matches!(
            Lexicon::from_json(json).unwrap_err(),
            LexiconError::BlankName(0)
        ));
    }

    #[test]
    fn rejects_empty_catalogue() {
        let json = r#"{ "symptoms": [], "composites": [] }"#;
        assert!(matches!(
            Lexicon::from_json(json).unwrap_err(),
            LexiconError::EmptyCatalogue
        ));
    }

    #[test]
    fn rejects_composite_with_unknown_symptom() {
        let json = r#"{
            "symptoms": [{ "name": "오한", "ko": ["오한"] }],
            "composites": [{ "trigger": "몸살", "symptoms": ["오한", "근육통"] }]
        }"#;
        let err = Lexicon::from_json(json).unwrap_err();
        match err {
            LexiconError::UnknownCompositeSymptom { trigger, symptom } => {
                assert_eq!(trigger, "몸살");
                assert_eq!(symptom, "근육통");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_blank_composite_trigger() {
        let json = r#"{
            "symptoms": [{ "name": "오한", "ko": ["오한"] }],
            "composites": [{ "trigger": "", "symptoms": ["오한"] }]
        }"#;
        assert!(matches!(
            Lexicon::from_json(json).unwrap_err(),
            LexiconError::BlankTrigger(0)
        ));
    }

    #[test]
    fn english_keywords_are_lowercased_on_load() {
        let json = r#"{
            "symptoms": [{ "name": "기침", "en": ["Cough", "DRY cough"] }],
            "composites": []
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.symptoms()[0].en_keywords, vec!["cough", "dry cough"]);
    }

    #[test]
    fn widened_single_char_stems_replace_builtin_whitelist() {
        let json = r#"{
            "symptoms": [{ "name": "기침", "ko": ["기침"] }],
            "single_char_stems": ["목", "등"],
            "composites": []
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert!(lexicon.suffix_rules().is_whitelisted("등"));
        assert!(!lexicon.suffix_rules().is_whitelisted("배"));
        assert!(!Lexicon::builtin().unwrap().suffix_rules().is_whitelisted("등"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Lexicon::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(ref origin, _) if origin == "<inline>"));
    }

    #[test]
    fn custom_time_keywords_and_suffixes_are_used() {
        let json = r#"{
            "symptoms": [{ "name": "기침", "ko": ["기침"] }],
            "particles": ["이"],
            "endings": ["요"],
            "time_keywords": {
                "ko": [{ "keyword": "새벽", "period": "night" }],
                "en": []
            },
            "composites": []
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.suffix_rules().particles(), ["이".to_string()].as_slice());
        assert_eq!(lexicon.time_keywords().ko.first_in("새벽에"), Some(Period::Night));
        assert!(lexicon.time_keywords().en.entries.is_empty());
        // Whitelist falls back to builtin when only some suffix sections are given
        assert!(lexicon.suffix_rules().is_whitelisted("목"));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"{ "symptoms": [{ "name": "기침", "ko": ["기침"] }], "composites": [] }"#,
        )
        .unwrap();
        let lexicon = Lexicon::load(&path).unwrap();
        assert_eq!(lexicon.symptom_names(), vec!["기침"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LexiconError::Io(..)));
    }
}
