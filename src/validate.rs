//! Client-Side Form Validation
//!
//! Runs before any network call; a rejected form never reaches the API.

use crate::sanitize::plain_text;

pub const TITLE_MIN: usize = 5;
pub const CONTENT_MIN: usize = 10;
pub const INSTRUCTIONS_MIN: usize = 10;

/// Per-field messages for the report form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Validate the create/edit form. Content length is measured on the text
/// content, so markup alone cannot satisfy the minimum.
pub fn validate_draft(title: &str, content: &str) -> DraftErrors {
    let mut errors = DraftErrors::default();

    let title = title.trim();
    if title.is_empty() {
        errors.title = Some("Report title is required.".to_string());
    } else if title.chars().count() < TITLE_MIN {
        errors.title = Some(format!("Title must be at least {} characters.", TITLE_MIN));
    }

    if content.trim().is_empty() {
        errors.content = Some("Report content is required.".to_string());
    } else if plain_text(content).chars().count() < CONTENT_MIN {
        errors.content = Some(format!("Content must be at least {} characters.", CONTENT_MIN));
    }

    errors
}

/// Validate the draft-generation instructions field.
pub fn validate_instructions(instructions: &str) -> Option<String> {
    let instructions = instructions.trim();
    if instructions.is_empty() {
        Some("Instructions are required.".to_string())
    } else if instructions.chars().count() < INSTRUCTIONS_MIN {
        Some(format!("Please provide at least {} characters.", INSTRUCTIONS_MIN))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_char_title_rejected() {
        let errors = validate_draft("abcd", "1234567890");
        assert!(errors.title.is_some());
        assert!(errors.content.is_none());
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate_draft("Hello", "1234567890");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_markup_does_not_count_toward_content_length() {
        // 9 text chars wrapped in plenty of markup
        let errors = validate_draft("Hello", "<p><strong>123456789</strong></p>");
        assert!(errors.content.is_some());
    }

    #[test]
    fn test_empty_fields_required() {
        let errors = validate_draft("", "   ");
        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
    }

    #[test]
    fn test_instructions_minimum() {
        assert!(validate_instructions("").is_some());
        assert!(validate_instructions("too short").is_some());
        assert!(validate_instructions("write about quarterly sales").is_none());
    }
}
