//! Frontend Models
//!
//! Data structures matching the backend API entities, plus the client-side
//! rules that gate what gets sent back to it.

use serde::{Deserialize, Serialize};

/// Sentinel id for a FAQ that has not been created on the backend yet.
pub const NEW_FAQ_ID: i64 = 0;

/// Default language tag for new FAQ drafts.
pub const DEFAULT_LANG: &str = "ja";

/// Chat conversation log entry (read-only on this side).
///
/// Records can arrive with fields missing, so every field defaults and the
/// rest of the UI treats absent values as empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub user_message: String,
    pub response: String,
    pub timestamp: String,
    pub hit_status: String,
}

/// FAQ entry (read/write).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub lang: String,
}

impl Default for Faq {
    fn default() -> Self {
        Self {
            id: NEW_FAQ_ID,
            question: String::new(),
            answer: String::new(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// Reason a FAQ draft was rejected before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    EmptyQuestion,
    EmptyAnswer,
}

/// How a valid draft reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Create,
    Update(i64),
}

impl Faq {
    /// Blank draft pre-filled with a conversation's message as the question.
    pub fn draft_from_message(message: &str) -> Self {
        Self {
            question: message.to_string(),
            ..Self::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == NEW_FAQ_ID
    }

    /// Persistence invariant: question and answer must be non-empty after
    /// trimming.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.question.trim().is_empty() {
            return Err(DraftError::EmptyQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(DraftError::EmptyAnswer);
        }
        Ok(())
    }

    /// Decide create vs update. Validates first, so an invalid draft never
    /// plans a request.
    pub fn plan_save(&self) -> Result<SaveAction, DraftError> {
        self.validate()?;
        if self.is_new() {
            Ok(SaveAction::Create)
        } else {
            Ok(SaveAction::Update(self.id))
        }
    }
}

/// Remove a deleted FAQ from the local collection by id.
pub fn remove_faq(faqs: &mut Vec<Faq>, id: i64) {
    faqs.retain(|faq| faq.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(question: &str, answer: &str) -> Faq {
        Faq {
            question: question.to_string(),
            answer: answer.to_string(),
            ..Faq::default()
        }
    }

    #[test]
    fn test_validate_requires_both_fields() {
        assert_eq!(draft("", "a").validate(), Err(DraftError::EmptyQuestion));
        assert_eq!(draft("q", "").validate(), Err(DraftError::EmptyAnswer));
        assert_eq!(draft("", "").validate(), Err(DraftError::EmptyQuestion));
        assert_eq!(draft("q", "a").validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        assert_eq!(draft("   ", "a").validate(), Err(DraftError::EmptyQuestion));
        assert_eq!(draft("q", " \t\n").validate(), Err(DraftError::EmptyAnswer));
    }

    #[test]
    fn test_plan_save_new_vs_existing() {
        assert_eq!(draft("q", "a").plan_save(), Ok(SaveAction::Create));

        let existing = Faq {
            id: 42,
            ..draft("q", "a")
        };
        assert_eq!(existing.plan_save(), Ok(SaveAction::Update(42)));
    }

    #[test]
    fn test_plan_save_never_plans_invalid_draft() {
        assert_eq!(draft("q", "  ").plan_save(), Err(DraftError::EmptyAnswer));
    }

    #[test]
    fn test_draft_from_message_prefills_question_only() {
        let faq = Faq::draft_from_message("営業時間を教えて");
        assert_eq!(faq.question, "営業時間を教えて");
        assert_eq!(faq.answer, "");
        assert_eq!(faq.lang, DEFAULT_LANG);
        assert!(faq.is_new());
    }

    #[test]
    fn test_remove_faq_removes_exactly_one_id() {
        let mut faqs = vec![
            Faq { id: 1, ..draft("q1", "a1") },
            Faq { id: 2, ..draft("q2", "a2") },
            Faq { id: 3, ..draft("q3", "a3") },
        ];
        remove_faq(&mut faqs, 2);
        let ids: Vec<i64> = faqs.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // Unknown id leaves the collection unchanged
        remove_faq(&mut faqs, 99);
        assert_eq!(faqs.len(), 2);
    }

    #[test]
    fn test_conversation_deserializes_with_missing_fields() {
        let conversation: Conversation = serde_json::from_str(r#"{"id":"c1"}"#).unwrap();
        assert_eq!(conversation.id, "c1");
        assert_eq!(conversation.user_message, "");
        assert_eq!(conversation.hit_status, "");
    }
}
