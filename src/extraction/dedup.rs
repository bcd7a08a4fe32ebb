use std::collections::HashSet;

use super::types::SymptomMention;

/// Drop repeated `(symptom, time)` pairs, keeping the first occurrence.
///
/// The same symptom with a different time (including none) is a distinct pair.
pub fn dedupe(mentions: Vec<SymptomMention>) -> Vec<SymptomMention> {
    let mut seen: HashSet<SymptomMention> = HashSet::with_capacity(mentions.len());
    mentions
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Period;

    #[test]
    fn removes_exact_duplicates_keeping_first() {
        let input = vec![
            SymptomMention::new("기침", None),
            SymptomMention::new("가래", None),
            SymptomMention::new("기침", None),
        ];
        assert_eq!(
            dedupe(input),
            vec![SymptomMention::new("기침", None), SymptomMention::new("가래", None)]
        );
    }

    #[test]
    fn different_times_are_distinct() {
        let input = vec![
            SymptomMention::new("기침", Some(Period::Night)),
            SymptomMention::new("기침", None),
            SymptomMention::new("기침", Some(Period::Morning)),
            SymptomMention::new("기침", Some(Period::Night)),
        ];
        let out = dedupe(input);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].time, Some(Period::Night));
        assert_eq!(out[1].time, None);
        assert_eq!(out[2].time, Some(Period::Morning));
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(dedupe(vec![]).is_empty());
    }
}
