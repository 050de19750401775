//! Hit Status Classification
//!
//! The backend tags each conversation with a free-text `hit_status`. This
//! module maps those strings onto badge tones and decides which
//! conversations can be promoted into a FAQ entry.

/// Badge tone for a conversation's hit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Red,
    Green,
    Yellow,
    Blue,
    Gray,
}

impl BadgeTone {
    /// CSS class for this tone.
    pub fn class(self) -> &'static str {
        match self {
            Self::Red => "status-badge red",
            Self::Green => "status-badge green",
            Self::Yellow => "status-badge yellow",
            Self::Blue => "status-badge blue",
            Self::Gray => "status-badge gray",
        }
    }
}

/// Substring rules in priority order; the first match wins.
const STATUS_RULES: &[(&str, BadgeTone)] = &[
    ("unmatched", BadgeTone::Red),
    ("exact-match", BadgeTone::Green),
    ("partial-match", BadgeTone::Yellow),
    ("AI", BadgeTone::Blue),
    ("fallback", BadgeTone::Blue),
];

/// Classify a hit status into a badge tone. Unrecognized statuses are gray.
pub fn classify(hit_status: &str) -> BadgeTone {
    STATUS_RULES
        .iter()
        .find(|(needle, _)| hit_status.contains(needle))
        .map(|&(_, tone)| tone)
        .unwrap_or(BadgeTone::Gray)
}

/// A conversation can be promoted into a FAQ when its status marks it as
/// unanswered or flagged for follow-up.
pub fn can_promote(hit_status: &str) -> bool {
    hit_status.contains("unmatched") || hit_status.contains("needs-attention")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_statuses() {
        assert_eq!(classify("unmatched"), BadgeTone::Red);
        assert_eq!(classify("exact-match"), BadgeTone::Green);
        assert_eq!(classify("partial-match"), BadgeTone::Yellow);
        assert_eq!(classify("AI-fallback"), BadgeTone::Blue);
        assert_eq!(classify("fallback"), BadgeTone::Blue);
    }

    #[test]
    fn test_classify_matches_by_substring() {
        assert_eq!(classify("unmatched (needs-attention)"), BadgeTone::Red);
        assert_eq!(classify("served via AI assist"), BadgeTone::Blue);
    }

    #[test]
    fn test_classify_priority_order_first_match_wins() {
        // "unmatched" outranks every later rule
        assert_eq!(classify("unmatched exact-match"), BadgeTone::Red);
        // "exact-match" outranks "partial-match" and the AI rules
        assert_eq!(classify("exact-match AI"), BadgeTone::Green);
        assert_eq!(classify("partial-match fallback"), BadgeTone::Yellow);
    }

    #[test]
    fn test_classify_unknown_is_gray() {
        assert_eq!(classify(""), BadgeTone::Gray);
        assert_eq!(classify("resolved"), BadgeTone::Gray);
        // Case matters: the rules are exact substrings
        assert_eq!(classify("Unmatched"), BadgeTone::Gray);
    }

    #[test]
    fn test_can_promote() {
        assert!(can_promote("unmatched"));
        assert!(can_promote("needs-attention"));
        assert!(can_promote("unmatched, needs-attention"));
        assert!(!can_promote("exact-match"));
        assert!(!can_promote("AI-fallback"));
        assert!(!can_promote(""));
    }
}
