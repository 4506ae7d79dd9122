use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::error::ValidationError;

/// Body of `POST /api/contact`. Fields are optional at the wire level so a
/// missing field yields a "<field> is required" error instead of a parse
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<JsonValue>,
    #[validate(length(max = 100, code = "subject_too_long"))]
    pub subject: Option<String>,
    #[validate(length(max = 500, code = "message_too_long"))]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Phone is free-form: numbers are kept as their digits, `null` as empty.
    pub fn phone_text(&self) -> String {
        match &self.phone {
            None | Some(JsonValue::Null) => String::new(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Required fields are checked first, in declaration order, then lengths.
    pub fn check(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.as_deref().map_or(true, str::is_empty) {
                return Err(ValidationError::MissingField(field));
            }
        }

        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) if errors.field_errors().contains_key("subject") => {
                Err(ValidationError::SubjectTooLong)
            }
            Err(_) => Err(ValidationError::MessageTooLong),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}
