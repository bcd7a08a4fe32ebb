use crate::lexicon::{Language, Lexicon};

use super::time_detect::detect_time;
use super::types::{MatchRule, SymptomMention};

/// Expand composite trigger phrases (e.g. 몸살) into their constituent
/// symptoms, skipping any symptom already present in `existing`.
///
/// Rules run in declaration order; derived symptoms keep their declared order.
pub fn resolve_composites(
    cleaned_ko: &str,
    existing: &[SymptomMention],
    lexicon: &Lexicon,
) -> Vec<SymptomMention> {
    let mut derived: Vec<SymptomMention> = Vec::new();

    for rule in lexicon.composites() {
        if !cleaned_ko.contains(rule.trigger_phrase.as_str()) {
            continue;
        }
        let time = detect_time(cleaned_ko, Language::Ko, lexicon.time_keywords());
        let before = derived.len();
        for symptom in &rule.derived_symptoms {
            if existing.iter().any(|m| &m.symptom == symptom) {
                continue;
            }
            derived.push(SymptomMention::new(symptom.clone(), time));
        }
        tracing::debug!(
            trigger = %rule.trigger_phrase,
            rule = MatchRule::Composite.as_str(),
            added = derived.len() - before,
            "Composite symptom expanded"
        );
    }

    derived
}
