//! Field validation for level and quiz records

use crate::contract::LevelsError;

pub const CIRCUIT_MAX_LENGTH: usize = 10_000;
pub const PARTS_MAX_LENGTH: usize = 5_000;
pub const LABELS_MAX_LENGTH: usize = 1_000;
pub const QUESTION_MAX_LENGTH: usize = 1_000;
pub const ANSWER_MAX_LENGTH: usize = 100;

/// Validate a required text field
///
/// The value may not be blank and may hold at most `max_length` characters.
pub fn validate_text(field: &str, value: &str, max_length: usize) -> Result<(), LevelsError> {
    if value.trim().is_empty() {
        return Err(LevelsError::validation(field, "This field may not be blank."));
    }

    if value.chars().count() > max_length {
        return Err(LevelsError::validation(
            field,
            format!("Ensure this field has no more than {max_length} characters."),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_within_limit() {
        assert!(validate_text("answer", "AND gate", ANSWER_MAX_LENGTH).is_ok());
        assert!(validate_text("answer", &"x".repeat(ANSWER_MAX_LENGTH), ANSWER_MAX_LENGTH).is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        for value in ["", "   ", "\n\t"] {
            let err = validate_text("circuit", value, CIRCUIT_MAX_LENGTH).unwrap_err();
            assert_eq!(
                err,
                LevelsError::validation("circuit", "This field may not be blank.")
            );
        }
    }

    #[test]
    fn rejects_text_over_limit() {
        let value = "x".repeat(LABELS_MAX_LENGTH + 1);
        let err = validate_text("labels", &value, LABELS_MAX_LENGTH).unwrap_err();
        assert!(matches!(err, LevelsError::Validation { ref field, .. } if field == "labels"));
        assert!(err.to_string().contains("no more than 1000 characters"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 100 two-byte characters
        let value = "é".repeat(ANSWER_MAX_LENGTH);
        assert!(validate_text("answer", &value, ANSWER_MAX_LENGTH).is_ok());
    }
}
