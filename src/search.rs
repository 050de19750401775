//! Search Filtering
//!
//! Client-side substring filters for the two list views. Matching is
//! case-sensitive with no normalization; the empty term matches everything.

use crate::models::{Conversation, Faq};

/// Match a conversation against a search term across user message, response
/// and user id.
pub fn conversation_matches(conversation: &Conversation, term: &str) -> bool {
    conversation.user_message.contains(term)
        || conversation.response.contains(term)
        || conversation.user_id.contains(term)
}

/// Match a FAQ against a search term across question and answer.
pub fn faq_matches(faq: &Faq, term: &str) -> bool {
    faq.question.contains(term) || faq.answer.contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(user_id: &str, message: &str, response: &str) -> Conversation {
        Conversation {
            id: "c1".to_string(),
            user_id: user_id.to_string(),
            user_message: message.to_string(),
            response: response.to_string(),
            ..Conversation::default()
        }
    }

    fn faq(question: &str, answer: &str) -> Faq {
        Faq {
            question: question.to_string(),
            answer: answer.to_string(),
            ..Faq::default()
        }
    }

    #[test]
    fn test_conversation_matches_any_of_three_fields() {
        let c = conversation("u-42", "hello there", "hi");
        assert!(conversation_matches(&c, "u-42"));
        assert!(conversation_matches(&c, "lo th"));
        assert!(conversation_matches(&c, "hi"));
        assert!(!conversation_matches(&c, "goodbye"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(conversation_matches(&Conversation::default(), ""));
        assert!(faq_matches(&faq("", ""), ""));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let c = conversation("u1", "Hello", "");
        assert!(conversation_matches(&c, "Hello"));
        assert!(!conversation_matches(&c, "hello"));

        let f = faq("Opening hours", "9 to 5");
        assert!(!faq_matches(&f, "opening"));
    }

    #[test]
    fn test_missing_fields_behave_as_empty_strings() {
        // Defaulted fields are empty strings, so only the empty term matches
        let c = Conversation::default();
        assert!(!conversation_matches(&c, "x"));
    }

    #[test]
    fn test_faq_matches_question_or_answer() {
        let f = faq("営業時間は？", "9時から18時です");
        assert!(faq_matches(&f, "営業"));
        assert!(faq_matches(&f, "18時"));
        assert!(!faq_matches(&f, "定休日"));
    }
}
