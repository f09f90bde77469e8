//! Field-level checks run before anything is persisted.
//!
//! Each function returns the list of violations (empty = valid).

use crate::models::conversation::NewConversation;

/// Longest accepted conversation title, in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Longest accepted message body, in characters.
pub const MAX_CONTENT_CHARS: usize = 32_000;

pub fn validate_title(title: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(format!("title must be at most {MAX_TITLE_CHARS} characters"));
    }
    errors
}

/// Message bodies may be empty; only their length is bounded.
pub fn validate_content(content: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if content.chars().count() > MAX_CONTENT_CHARS {
        errors.push(format!(
            "content must be at most {MAX_CONTENT_CHARS} characters"
        ));
    }
    errors
}

pub fn validate_new_conversation(input: &NewConversation) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(title) = &input.title {
        errors.extend(validate_title(title));
    }
    if let Some(first) = &input.first_message {
        errors.extend(validate_content(first));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_at_limit_is_accepted() {
        assert!(validate_title(&"t".repeat(MAX_TITLE_CHARS)).is_empty());
    }

    #[test]
    fn title_over_limit_is_rejected() {
        let errors = validate_title(&"t".repeat(MAX_TITLE_CHARS + 1));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        assert!(validate_title(&"é".repeat(MAX_TITLE_CHARS)).is_empty());
    }

    #[test]
    fn empty_content_is_accepted() {
        assert!(validate_content("").is_empty());
    }

    #[test]
    fn oversized_content_is_rejected() {
        assert!(!validate_content(&"x".repeat(MAX_CONTENT_CHARS + 1)).is_empty());
    }

    #[test]
    fn new_conversation_accumulates_errors() {
        let input = NewConversation {
            title: Some("t".repeat(MAX_TITLE_CHARS + 1)),
            agent: None,
            first_message: Some("x".repeat(MAX_CONTENT_CHARS + 1)),
        };
        assert_eq!(validate_new_conversation(&input).len(), 2);
        assert!(validate_new_conversation(&NewConversation::default()).is_empty());
    }
}
