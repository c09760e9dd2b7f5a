//! Intake field validation for new submissions.
//!
//! Descriptive fields are write-once, so they are validated up front and the
//! whole intake fails with no side effects when a required field is missing.

use serde::Deserialize;

use crate::error::CoreError;

/// Descriptive fields supplied by the submitter at creation.
///
/// The five required fields mirror the intake form; the optional ones are
/// stored as NULL when absent. Estimates and prices stay free text by
/// accepted business behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFields {
    pub artist_name: String,
    pub title: String,
    pub artwork_date: String,
    pub medium: String,
    pub dimensions: String,
    pub edition_size: Option<String>,
    pub provenance: Option<String>,
    pub exhibition_history: Option<String>,
    pub purchase_price: Option<String>,
}

impl SubmissionFields {
    /// Check that every required field is present and non-blank.
    ///
    /// The error names the first missing field so the submitter can be
    /// re-prompted.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("artist_name", &self.artist_name),
            ("title", &self.title),
            ("artwork_date", &self.artwork_date),
            ("medium", &self.medium),
            ("dimensions", &self.dimensions),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::InvalidSubmission(format!(
                    "Missing required field: {name}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> SubmissionFields {
        SubmissionFields {
            artist_name: "Jane Doe".into(),
            title: "Untitled I".into(),
            artwork_date: "1987".into(),
            medium: "Oil on canvas".into(),
            dimensions: "60 x 80 cm".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_fields_pass() {
        assert!(complete_fields().validate().is_ok());
    }

    #[test]
    fn test_optional_fields_not_required() {
        let fields = SubmissionFields {
            edition_size: None,
            provenance: None,
            exhibition_history: None,
            purchase_price: None,
            ..complete_fields()
        };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_is_named() {
        let fields = SubmissionFields {
            medium: String::new(),
            ..complete_fields()
        };
        match fields.validate() {
            Err(CoreError::InvalidSubmission(msg)) => {
                assert!(msg.contains("medium"), "got '{msg}'");
            }
            other => panic!("expected InvalidSubmission, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let fields = SubmissionFields {
            title: "   ".into(),
            ..complete_fields()
        };
        assert!(fields.validate().is_err());
    }
}
