//! Korean suffix tables for stem reduction.
//!
//! Particles (조사) are stripped first, then verb/adjective endings (어미).
//! The tokenizer re-sorts both lists longest-first, so declaration order only
//! breaks ties between suffixes of equal length.
//!
//! Single-vowel endings such as "아"/"어" are deliberately absent: they would
//! erode catalogue stems like "아파" or "떨어".

pub(crate) const PARTICLES: &[&str] = &[
    "이", "가", "은", "는", "을", "를", "에", "의", "도", "만", "로", "와", "과",
    "랑", "께", "에서", "에게", "한테", "으로", "이랑", "하고", "까지", "부터",
    "처럼", "보다", "마다", "이나", "라도", "밖에", "께서", "이라도", "에서는",
    "에서도", "에는", "에도", "으로는", "까지는",
];

pub(crate) const ENDINGS: &[&str] = &[
    "요", "고", "서", "면", "다", "죠", "해", "함", "네요", "어요", "아요", "여요",
    "해요", "에요", "예요", "세요", "고요", "어서", "아서", "해서", "는데", "은데",
    "지만", "으면", "었다", "았다", "했다", "었어", "았어", "했어", "거려", "거림",
    "니다", "이에요", "었어요", "았어요", "했어요", "거려요", "거리고", "습니다",
    "합니다", "었습니다", "았습니다", "했습니다",
];

/// Single-character stems that carry meaning on their own (mostly body parts).
///
/// Other single-character stems are dropped by the tokenizer; a lexicon file
/// can widen the list through its `single_char_stems` section.
pub(crate) const SINGLE_CHAR_STEMS: &[&str] = &[
    "배", "피", "열", "목", "속", "눈", "귀", "코", "팔", "위", "몸",
];
