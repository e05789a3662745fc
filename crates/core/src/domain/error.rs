use serde::Serialize;
use std::fmt;

pub const REJECTED_TITLE: &str = "入力内容に誤りがあります";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// A submitted form failed validation. Carries every offending field so the
/// form can be re-displayed with all problems at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValidationError {
    pub errors: Vec<FieldError>,
}

impl InputValidationError {
    pub fn single(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                reason: reason.into(),
            }],
        }
    }

    #[cfg(test)]
    pub(crate) fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REJECTED_TITLE}")?;
        for (i, e) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{} ({})", e.field, e.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for InputValidationError {}
