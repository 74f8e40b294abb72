//! Rule-based fallback responder.
//!
//! When the answer-generation collaborator is unavailable or fails, the
//! query is matched against a fixed table of condition keywords (English
//! keys plus Hindi synonyms) and answered with canned Hindi guidance. The
//! matcher is a pure function of the query and the table: no I/O, no
//! randomness, total for every string input.

/// One health condition in the fallback table.
///
/// Keys and alternate terms are stored pre-folded; [`respond`] case-folds
/// the query once and matches both against it.
pub struct ConditionEntry {
    /// Primary English keyword.
    pub key: &'static str,
    /// Hindi synonyms identifying the same condition in free text.
    pub terms: &'static [&'static str],
    /// Canned Hindi guidance for the condition.
    pub response: &'static str,
}

/// Fixed advisory appended to every health answer.
pub const ADVISORY_SUFFIX: &str = "गंभीर समस्याओं के लिए डॉक्टर से सलाह लें।";

/// Catch-all when no condition matches. Already ends with the advisory.
pub const DEFAULT_RESPONSE: &str = "मैं एक भारतीय स्वास्थ्य सहायक हूँ। कृपया अपनी स्वास्थ्य समस्या के बारे में विस्तार से बताएं। मैं आपको सामान्य सलाह दे सकता हूँ। गंभीर समस्याओं के लिए डॉक्टर से सलाह लें।";

/// Condition table, in match-priority order. First match wins.
pub static CONDITION_TABLE: &[ConditionEntry] = &[
    ConditionEntry {
        key: "diabetes",
        terms: &["मधुमेह", "डायबिटीज", "शुगर"],
        response: "मधुमेह एक गंभीर बीमारी है जिसमें रक्त में शुगर का स्तर बढ़ जाता है। नियमित व्यायाम, संतुलित आहार, और डॉक्टर की दवाइयों का सेवन करें। मिठाई और चीनी से बचें।",
    },
    ConditionEntry {
        key: "fever",
        terms: &["बुखार", "ज्वर", "तापमान"],
        response: "बुखार आने पर पर्याप्त आराम करें, तरल पदार्थ पिएं। पैरासिटामोल ले सकते हैं। यदि 3 दिन से अधिक बुखार रहे तो तुरंत डॉक्टर से मिलें।",
    },
    ConditionEntry {
        key: "headache",
        terms: &["सिरदर्द", "सिर दर्द", "माइग्रेन"],
        response: "सिरदर्द के लिए पर्याप्त नींद लें, तनाव कम करें, पानी पिएं। सिर पर ठंडी पट्टी रख सकते हैं। बार-बार होने पर डॉक्टर से जांच कराएं।",
    },
    ConditionEntry {
        key: "cold",
        terms: &["सर्दी", "जुकाम", "नजला"],
        response: "सर्दी-जुकाम में गर्म पानी पिएं, भाप लें, अदरक-शहद का सेवन करें। पर्याप्त आराम करें और ठंडी चीजों से बचें।",
    },
    ConditionEntry {
        key: "pressure",
        terms: &["रक्तचाप", "ब्लड प्रेशर", "उच्च रक्तचाप"],
        response: "उच्च रक्तचाप को नियंत्रित करने के लिए नमक कम खाएं, व्यायाम करें, तनाव कम करें। नियमित दवा लें और डॉक्टर की सलाह मानें।",
    },
    ConditionEntry {
        key: "heart",
        terms: &["हृदय", "दिल", "हार्ट"],
        response: "हृदय की समस्याओं के लिए धूम्रपान बंद करें, संतुलित आहार लें, नियमित व्यायाम करें। छाती में दर्द हो तो तुरंत डॉक्टर के पास जाएं।",
    },
];

/// Produce a canned answer for a free-text health query.
///
/// Entries are tested in table order; a condition matches when its key or
/// any of its synonyms appears as a substring of the case-folded query.
/// Matched answers carry the advisory suffix; unmatched queries get the
/// generic catch-all.
pub fn respond(query: &str) -> String {
    let folded = query.to_lowercase();

    for entry in CONDITION_TABLE {
        if folded.contains(entry.key) || entry.terms.iter().any(|term| folded.contains(term)) {
            return format!("{} {}", entry.response, ADVISORY_SUFFIX);
        }
    }

    DEFAULT_RESPONSE.to_string()
}
