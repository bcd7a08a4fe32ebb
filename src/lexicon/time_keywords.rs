use super::types::Period;

/// Korean time-of-day keywords. First match in this order wins.
pub(crate) const KO_TIME_KEYWORDS: &[(&str, Period)] = &[
    ("아침", Period::Morning),
    ("오전", Period::Morning),
    ("점심", Period::Afternoon),
    ("오후", Period::Afternoon),
    ("저녁", Period::Evening),
    ("밤", Period::Night),
];

/// English time-of-day keywords, matched against lower-cased text.
pub(crate) const EN_TIME_KEYWORDS: &[(&str, Period)] = &[
    ("morning", Period::Morning),
    ("afternoon", Period::Afternoon),
    ("evening", Period::Evening),
    ("night", Period::Night),
];
