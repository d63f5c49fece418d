//! Single-pass form validation.
//!
//! Fields are checked in order; the first failing rule for a field records
//! one message and moves on, so each field contributes at most one error.
//! Rule order per field: required, then email shape, then URL shape.

use serde_json::{Map, Value};
use url::Url;

use super::descriptor::{FieldKind, FormState};

/// Outcome of validating a form: pass/fail, human-readable messages in
/// field order, and the typed data for every field that passed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    /// The same messages keyed by field name, for inline display.
    pub field_errors: Vec<(String, String)>,
    pub data: Map<String, Value>,
}

pub fn validate(form: &FormState) -> ValidationResult {
    let mut errors = Vec::new();
    let mut field_errors = Vec::new();
    let mut data = Map::new();

    for field in &form.fields {
        match &field.kind {
            FieldKind::Checkbox => {
                // Unchecked boxes contribute nothing here, not even a
                // required error; serialization is where the explicit
                // false appears.
                if field.checked {
                    data.insert(field.name.clone(), Value::Bool(true));
                }
                continue;
            }
            FieldKind::Radio => {
                if field.checked {
                    data.insert(
                        field.name.clone(),
                        Value::String(field.submit_value.clone().unwrap_or_default()),
                    );
                }
                continue;
            }
            _ => {}
        }

        let trimmed = field.value.trim();

        if field.required && trimmed.is_empty() {
            let msg = format!("{} is required", field.display_label());
            field_errors.push((field.name.clone(), msg.clone()));
            errors.push(msg);
            continue;
        }

        if field.kind == FieldKind::Email && !trimmed.is_empty() && !is_valid_email(trimmed) {
            let msg = "please enter a valid email address".to_string();
            field_errors.push((field.name.clone(), msg.clone()));
            errors.push(msg);
            continue;
        }

        if field.kind == FieldKind::Url && !trimmed.is_empty() && Url::parse(trimmed).is_err() {
            let msg = "please enter a valid URL".to_string();
            field_errors.push((field.name.clone(), msg.clone()));
            errors.push(msg);
            continue;
        }

        let value = match field.kind {
            FieldKind::Number => {
                if trimmed.is_empty() {
                    Value::Null
                } else {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .and_then(serde_json::Number::from_f64)
                        .map_or(Value::Null, Value::Number)
                }
            }
            _ => Value::String(trimmed.to_string()),
        };
        data.insert(field.name.clone(), value);
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        field_errors,
        data,
    }
}

/// Minimal email shape check: one `@`, a non-empty local part, and a
/// domain with a dot, none of it containing whitespace.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::descriptor::Field;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_blank_required_field_fails() {
        let form = FormState::new(vec![Field::text("name", "").required()]);

        let result = validate(&form);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["name is required".to_string()]);
        assert!(result.data.is_empty());
    }

    #[test]
    fn test_required_uses_label_when_present() {
        let form = FormState::new(vec![Field::text("name", "Category name").required()]);
        let result = validate(&form);
        assert_eq!(result.errors, vec!["Category name is required".to_string()]);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = FormState::new(vec![Field::text("name", "Name").required().with_value("   ")]);
        assert!(!validate(&form).valid);
    }

    #[test]
    fn test_one_error_per_field_first_rule_wins() {
        let form = FormState::new(vec![Field::email("contact", "Contact").required()]);
        let result = validate(&form);
        assert_eq!(result.errors, vec!["Contact is required".to_string()]);
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plainaddress", "a@b", "a b@c.com", "@c.com", "a@.com", "a@c."] {
            let form = FormState::new(vec![Field::email("contact", "Contact").with_value(bad)]);
            let result = validate(&form);
            assert_eq!(
                result.errors,
                vec!["please enter a valid email address".to_string()],
                "expected rejection for {bad:?}"
            );
        }

        let form =
            FormState::new(vec![Field::email("contact", "Contact").with_value("a@example.com")]);
        assert!(validate(&form).valid);
    }

    #[test]
    fn test_empty_optional_email_passes() {
        let form = FormState::new(vec![Field::email("contact", "Contact")]);
        let result = validate(&form);
        assert!(result.valid);
        assert_eq!(result.data.get("contact"), Some(&json!("")));
    }

    #[test]
    fn test_url_must_be_absolute() {
        let form = FormState::new(vec![Field::url("url", "Feed URL").with_value("not a url")]);
        let result = validate(&form);
        assert_eq!(result.errors, vec!["please enter a valid URL".to_string()]);

        let form = FormState::new(vec![
            Field::url("url", "Feed URL").with_value("https://example.com/feed.xml"),
        ]);
        assert!(validate(&form).valid);
    }

    #[test]
    fn test_values_are_trimmed_into_data() {
        let form = FormState::new(vec![Field::text("name", "Name").with_value("  Tech  ")]);
        let result = validate(&form);
        assert_eq!(result.data.get("name"), Some(&json!("Tech")));
    }

    #[test]
    fn test_number_field_types() {
        let form = FormState::new(vec![Field::number("limit", "Limit").with_value("42")]);
        assert_eq!(validate(&form).data.get("limit"), Some(&json!(42.0)));

        let form = FormState::new(vec![Field::number("limit", "Limit")]);
        assert_eq!(validate(&form).data.get("limit"), Some(&Value::Null));
    }

    #[test]
    fn test_checkbox_contributes_only_when_checked() {
        let form = FormState::new(vec![
            Field::checkbox("enabled", "Enabled").with_checked(true),
            Field::checkbox("notify", "Notify"),
        ]);
        let result = validate(&form);
        assert_eq!(result.data.get("enabled"), Some(&json!(true)));
        assert!(!result.data.contains_key("notify"));
        assert!(result.valid);
    }

    #[test]
    fn test_required_unchecked_checkbox_passes() {
        let form = FormState::new(vec![Field::checkbox("enabled", "Enabled").required()]);
        let result = validate(&form);
        assert!(result.valid, "unchecked checkbox produced errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(!result.data.contains_key("enabled"));
    }

    #[test]
    fn test_field_errors_carry_field_names() {
        let form = FormState::new(vec![
            Field::text("name", "Name").required(),
            Field::url("url", "URL").with_value("nope"),
        ]);
        let result = validate(&form);
        assert_eq!(
            result.field_errors,
            vec![
                ("name".to_string(), "Name is required".to_string()),
                ("url".to_string(), "please enter a valid URL".to_string()),
            ]
        );
    }

    #[test]
    fn test_errors_accumulate_across_fields_in_order() {
        let form = FormState::new(vec![
            Field::text("name", "Name").required(),
            Field::url("url", "URL").with_value("nope"),
        ]);
        let result = validate(&form);
        assert_eq!(
            result.errors,
            vec![
                "Name is required".to_string(),
                "please enter a valid URL".to_string(),
            ]
        );
    }
}
