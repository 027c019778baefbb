use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule id attached to blank-value failures
pub const REQUIRED_RULE_ID: &str = "required";

/// A field that failed validation.
///
/// This is the only validation error kind: malformed input and business-rule
/// violations both end up here.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldInvalid {
    pub field: String,
    pub rule_id: String,
    pub message: String,
}

impl FieldInvalid {
    pub fn new(
        field: impl Into<String>,
        rule_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }

    /// The failure recorded for a blank value
    pub fn required(field: &str) -> Self {
        Self::new(
            field,
            REQUIRED_RULE_ID,
            format!("The field \"{}\" is required.", field),
        )
    }
}

/// Result of one validation pass
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    valid: bool,
    messages: Vec<String>,
    errors: Vec<FieldInvalid>,
}

impl ValidationOutcome {
    /// Build an outcome; validity is derived from `errors` being empty
    pub fn from_errors(errors: Vec<FieldInvalid>) -> Self {
        let messages = errors.iter().map(|e| e.message.clone()).collect();
        Self {
            valid: errors.is_empty(),
            messages,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Messages in field-processing order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn errors(&self) -> &[FieldInvalid] {
        &self.errors
    }

    /// Text a caller can show as-is when the pass failed
    pub fn summary(&self) -> Option<String> {
        if self.valid {
            return None;
        }
        Some(format!("Errors found:\n\n{}", self.messages.join("\n")))
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::from_errors(Vec::new())
    }
}
