//! Prompt construction for the answer generator.

use serde_json::Value;

/// System instruction for the completion collaborator.
///
/// The answer language is requested by the caller per query; everything
/// else is fixed policy.
pub fn system_prompt(language: &str) -> String {
    format!(
        r#"You are an Indian Health Assistant (भारतीय स्वास्थ्य सहायक). You provide health information in {language}.

Guidelines:
1. Always respond in Hindi (Devanagari script)
2. Provide accurate, helpful health information
3. Always recommend consulting a doctor for serious issues
4. Be culturally sensitive to Indian health practices
5. Include both modern medicine and traditional Indian health wisdom when appropriate
6. Keep responses concise but informative
7. Use simple language that common people can understand

IMPORTANT: Always end serious health advice with "गंभीर समस्याओं के लिए डॉक्टर से सलाह लें।""#
    )
}

/// Compose the user message: the query, plus reference context when found.
pub fn user_message(query: &str, reference_data: Option<&Value>) -> String {
    let mut message = format!("स्वास्थ्य प्रश्न: {query}");

    if let Some(data) = reference_data {
        message.push_str(&format!("\n\nसंदर्भ जानकारी: {data}"));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::ADVISORY_SUFFIX;
    use serde_json::json;

    #[test]
    fn system_prompt_embeds_requested_language() {
        let prompt = system_prompt("hindi");
        assert!(prompt.contains("health information in hindi"));
    }

    #[test]
    fn system_prompt_mandates_devanagari_and_doctor_advice() {
        let prompt = system_prompt("hindi");
        assert!(prompt.contains("Devanagari script"));
        assert!(prompt.contains("consulting a doctor"));
        assert!(prompt.contains(ADVISORY_SUFFIX));
    }

    #[test]
    fn user_message_without_context_is_just_the_query() {
        let message = user_message("मुझे बुखार है", None);
        assert_eq!(message, "स्वास्थ्य प्रश्न: मुझे बुखार है");
    }

    #[test]
    fn user_message_appends_reference_context() {
        let data = json!({"nlmSearchResult": {"count": 1}});
        let message = user_message("I have a fever", Some(&data));
        assert!(message.starts_with("स्वास्थ्य प्रश्न: I have a fever"));
        assert!(message.contains("संदर्भ जानकारी:"));
        assert!(message.contains("nlmSearchResult"));
    }

    #[test]
    fn reference_context_keeps_non_ascii_text() {
        let data = json!({"summary": "बुखार के बारे में जानकारी"});
        let message = user_message("fever", Some(&data));
        assert!(message.contains("बुखार के बारे में जानकारी"));
    }
}
