use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::user::User;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Request body for both create and update; the resource is replaced whole,
/// so the two operations share one shape. Missing fields deserialize as
/// empty strings and fail validation as "required".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(field_error("name", "Name is required"));
    }
    if name.chars().count() > 100 {
        return Err(field_error("name", "Name cannot exceed 100 characters"));
    }
    Ok(())
}

fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(field_error("email", "Email is required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(field_error("email", "Email format is invalid"));
    }
    if email.chars().count() > 100 {
        return Err(field_error("email", "Email cannot exceed 100 characters"));
    }
    Ok(())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::flatten_errors;

    fn messages(payload: &UserPayload) -> Vec<String> {
        match payload.validate() {
            Ok(()) => vec![],
            Err(errors) => flatten_errors(&errors),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let payload = UserPayload {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
        };
        assert!(messages(&payload).is_empty());
    }

    #[test]
    fn empty_name_is_required() {
        let payload = UserPayload {
            name: "".into(),
            email: "a@x.com".into(),
        };
        assert_eq!(messages(&payload), vec!["Name is required".to_string()]);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let payload = UserPayload {
            name: "x".repeat(101),
            email: "a@x.com".into(),
        };
        assert_eq!(
            messages(&payload),
            vec!["Name cannot exceed 100 characters".to_string()]
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let payload = UserPayload {
            name: "A".into(),
            email: "not-an-email".into(),
        };
        assert_eq!(
            messages(&payload),
            vec!["Email format is invalid".to_string()]
        );
    }

    #[test]
    fn overlong_email_is_rejected() {
        let local = "a".repeat(95);
        let payload = UserPayload {
            name: "A".into(),
            email: format!("{local}@example.com"),
        };
        assert_eq!(
            messages(&payload),
            vec!["Email cannot exceed 100 characters".to_string()]
        );
    }

    #[test]
    fn all_violations_are_collected_in_field_order() {
        let payload = UserPayload {
            name: "".into(),
            email: "".into(),
        };
        assert_eq!(
            messages(&payload),
            vec!["Name is required".to_string(), "Email is required".to_string()]
        );
    }

    #[test]
    fn email_with_whitespace_fails_format_check() {
        let payload = UserPayload {
            name: "A".into(),
            email: "a b@x.com".into(),
        };
        assert_eq!(
            messages(&payload),
            vec!["Email format is invalid".to_string()]
        );
    }
}
