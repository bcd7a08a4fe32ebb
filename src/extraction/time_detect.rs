use crate::lexicon::{Language, Period, TimeKeywords};

/// First time-of-day keyword (in table order) found anywhere in `text`.
///
/// Table order, not position in the sentence, decides which period wins when
/// several are mentioned.
pub fn detect_time(text: &str, lang: Language, keywords: &TimeKeywords) -> Option<Period> {
    keywords.table(lang).first_in(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn keywords() -> TimeKeywords {
        Lexicon::builtin().unwrap().time_keywords().clone()
    }

    #[test]
    fn detects_korean_periods() {
        let kw = keywords();
        assert_eq!(detect_time("아침에 열이 나요", Language::Ko, &kw), Some(Period::Morning));
        assert_eq!(detect_time("오후부터 두통", Language::Ko, &kw), Some(Period::Afternoon));
        assert_eq!(detect_time("저녁 먹고 복통", Language::Ko, &kw), Some(Period::Evening));
        assert_eq!(detect_time("밤마다 기침", Language::Ko, &kw), Some(Period::Night));
    }

    #[test]
    fn detects_english_periods() {
        let kw = keywords();
        assert_eq!(
            detect_time("i cough at night", Language::En, &kw),
            Some(Period::Night)
        );
        assert_eq!(detect_time("every evening", Language::En, &kw), Some(Period::Evening));
    }

    #[test]
    fn table_order_beats_sentence_order() {
        // "밤" appears first in the sentence, but "아침" comes first in the table
        let kw = keywords();
        assert_eq!(
            detect_time("밤에도 아침에도 기침", Language::Ko, &kw),
            Some(Period::Morning)
        );
    }

    #[test]
    fn languages_do_not_mix() {
        let kw = keywords();
        assert_eq!(detect_time("morning cough", Language::Ko, &kw), None);
        assert_eq!(detect_time("아침 기침", Language::En, &kw), None);
    }

    #[test]
    fn no_keyword_means_none() {
        let kw = keywords();
        assert_eq!(detect_time("기침이 나요", Language::Ko, &kw), None);
        assert_eq!(detect_time("", Language::En, &kw), None);
    }
}
