use validator::ValidationErrors;

use crate::error::{Error, Result};

/// Fields in the order their messages should appear in the `errors` array.
const FIELD_ORDER: [&str; 2] = ["name", "email"];

/// Parses an `:id` path segment. Rejects anything that is not a positive
/// integer before any storage access happens.
pub fn parse_id_param(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::BadRequest(
            "Invalid ID parameter. ID must be a positive number.".to_string(),
        )),
    }
}

/// Flattens `ValidationErrors` into the ordered message list carried by the
/// 400 envelope.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in FIELD_ORDER {
        if let Some(errs) = field_errors.get(field) {
            for err in errs.iter() {
                messages.push(
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                );
            }
        }
    }

    // Fields outside the known order still surface, after the ordered ones.
    for (field, errs) in &field_errors {
        if FIELD_ORDER.contains(field) {
            continue;
        }
        for err in errs.iter() {
            messages.push(
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            );
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn positive_integers_parse() {
        assert_eq!(parse_id_param("1").unwrap(), 1);
        assert_eq!(parse_id_param("42").unwrap(), 42);
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        assert!(parse_id_param("abc").is_err());
        assert!(parse_id_param("").is_err());
        assert!(parse_id_param("1.5").is_err());
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        assert!(parse_id_param("0").is_err());
        assert!(parse_id_param("-1").is_err());
    }

    #[test]
    fn flattening_orders_name_before_email() {
        let mut errors = ValidationErrors::new();
        let mut email_err = ValidationError::new("email");
        email_err.message = Some("Email is required".into());
        errors.add("email", email_err);
        let mut name_err = ValidationError::new("name");
        name_err.message = Some("Name is required".into());
        errors.add("name", name_err);

        assert_eq!(
            flatten_errors(&errors),
            vec!["Name is required".to_string(), "Email is required".to_string()]
        );
    }
}
