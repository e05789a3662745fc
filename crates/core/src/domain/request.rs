use crate::domain::error::{FieldError, InputValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw weekly-fortune form as submitted. Every field is optional here so that
/// a missing field becomes a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneForm {
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub prefecture: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    pub birth_date: NaiveDate,
    pub birth_time: Option<String>,
    pub prefecture: String,
    pub gender: String,
}

/// Raw name-fortune form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameFortuneForm {
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameFortuneRequest {
    pub family_name: String,
    pub given_name: String,
    pub gender: String,
}

impl FortuneForm {
    pub fn validate_and_into_request(self) -> Result<FortuneRequest, InputValidationError> {
        let birth_date = match self.birth_date.as_deref() {
            None | Some("") => {
                return Err(InputValidationError::single("birthDate", "required"));
            }
            Some(s) => parse_iso_date(s)?,
        };

        let birth_time = self
            .birth_time
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(FortuneRequest {
            birth_date,
            birth_time,
            prefecture: self.prefecture.map(|s| s.trim().to_string()).unwrap_or_default(),
            gender: self.gender.map(|s| s.trim().to_string()).unwrap_or_default(),
        })
    }
}

/// Strict `YYYY-MM-DD`: zero-padded month and day, four-digit unsigned
/// year, no surrounding whitespace.
fn parse_iso_date(s: &str) -> Result<NaiveDate, InputValidationError> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(InputValidationError::single("birthDate", "expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        InputValidationError::single("birthDate", format!("expected YYYY-MM-DD: {e}"))
    })
}

impl NameFortuneForm {
    /// Both name fields must be present; an empty value is accepted and
    /// simply counts as zero strokes. Names are kept verbatim, so whitespace
    /// counts like any other character.
    pub fn validate_and_into_request(self) -> Result<NameFortuneRequest, InputValidationError> {
        let mut errors = Vec::new();
        if self.family_name.is_none() {
            errors.push(FieldError {
                field: "familyName",
                reason: "required".to_string(),
            });
        }
        if self.given_name.is_none() {
            errors.push(FieldError {
                field: "givenName",
                reason: "required".to_string(),
            });
        }
        if !errors.is_empty() {
            return Err(InputValidationError { errors });
        }

        Ok(NameFortuneRequest {
            family_name: self.family_name.unwrap_or_default(),
            given_name: self.given_name.unwrap_or_default(),
            gender: self.gender.map(|s| s.trim().to_string()).unwrap_or_default(),
        })
    }
}
