use crate::lexicon::{Language, Lexicon, SymptomDefinition};

use super::time_detect::detect_time;
use super::types::{MatchRule, SymptomMention};

/// Walk the catalogue in order and emit at most one mention per symptom.
///
/// Rules are tried in priority order: Korean keyword, English keyword, then
/// token-set co-occurrence. The first rule that fires decides the mention and
/// its time context. English keywords match the lower-cased translation, but
/// English time keywords are looked up in the translation as given.
pub fn match_symptoms(
    cleaned_ko: &str,
    translated_en: &str,
    stems_ko: &[String],
    lexicon: &Lexicon,
) -> Vec<SymptomMention> {
    let lowered_en = translated_en.to_lowercase();
    let times = lexicon.time_keywords();

    lexicon
        .symptoms()
        .iter()
        .filter_map(|def| {
            let (rule, time) = match first_rule(def, cleaned_ko, &lowered_en, stems_ko)? {
                MatchRule::EnglishKeyword => (
                    MatchRule::EnglishKeyword,
                    detect_time(translated_en, Language::En, times),
                ),
                rule => (rule, detect_time(cleaned_ko, Language::Ko, times)),
            };
            tracing::debug!(symptom = %def.name, rule = rule.as_str(), "Symptom matched");
            Some(SymptomMention::new(def.name.clone(), time))
        })
        .collect()
}

/// Highest-priority rule that fires for `def`, if any.
fn first_rule(
    def: &SymptomDefinition,
    cleaned_ko: &str,
    lowered_en: &str,
    stems_ko: &[String],
) -> Option<MatchRule> {
    if def.ko_keywords.iter().any(|kw| cleaned_ko.contains(kw.as_str())) {
        return Some(MatchRule::KoreanKeyword);
    }
    if def.en_keywords.iter().any(|kw| lowered_en.contains(kw.as_str())) {
        return Some(MatchRule::EnglishKeyword);
    }
    // First satisfied pair wins; later pairs are never consulted
    if def.token_sets.iter().any(|ts| ts.is_satisfied_by(stems_ko)) {
        return Some(MatchRule::TokenSet);
    }
    None
}
