//! Validation Utilities

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::error::DelegateError;

/// Flatten (possibly nested) validation errors into `path: message` pairs.
fn flatten(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for e in errs {
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

/// Convert validation errors to DelegateError
pub fn validation_error(errors: ValidationErrors) -> DelegateError {
    let mut fields = Vec::new();
    flatten("", &errors, &mut fields);

    // The error map is unordered; sort for a stable message
    fields.sort();

    let message = fields
        .first()
        .map(|(field, message)| format!("{}: {}", field, message))
        .unwrap_or_else(|| "Validation failed".into());

    DelegateError::Validation(message)
}

/// Validate a value and hand it back on success.
pub fn validated<T: Validate>(value: T) -> Result<T, DelegateError> {
    value.validate().map_err(validation_error)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, max = 4, message = "must be 1-4 characters"))]
        name: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(nested)]
        items: Vec<Named>,
    }

    #[test]
    fn test_validated_passes_valid_value() {
        let named = validated(Named { name: "abc".into() }).unwrap();
        assert_eq!(named.name, "abc");
    }

    #[test]
    fn test_validation_error_reports_field_and_message() {
        let err = validated(Named { name: "abcdef".into() }).err().unwrap();
        assert_eq!(err.to_string(), "Validation error: name: must be 1-4 characters");
    }

    #[test]
    fn test_validation_error_reports_nested_path() {
        let outer = Outer {
            items: vec![Named { name: "ok".into() }, Named { name: String::new() }],
        };
        let err = validated(outer).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Validation error: items[1].name: must be 1-4 characters"
        );
    }
}
