//! Validation utilities.

use crate::{BankError, FieldError};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `BankError` on failure.
    fn validate_request(&self) -> Result<(), BankError> {
        self.validate().map_err(validation_errors_to_bank_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `BankError`.
#[must_use]
pub fn validation_errors_to_bank_error(errors: ValidationErrors) -> BankError {
    let fields = collect_field_errors(&errors, "");

    let message = fields
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    BankError::Validation { message, fields }
}

/// Flattens nested validation errors into dotted camelCase field paths,
/// matching the JSON names of the payload.
fn collect_field_errors(errors: &ValidationErrors, prefix: &str) -> Vec<FieldError> {
    let mut field_errors = Vec::new();

    for (field, kind) in errors.errors() {
        let field = to_camel_case(field);
        let path = if prefix.is_empty() {
            field
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                field_errors.extend(errs.iter().map(|error| FieldError {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                field_errors.extend(collect_field_errors(nested, &path));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    field_errors.extend(collect_field_errors(nested, &format!("{}[{}]", path, index)));
                }
            }
        }
    }

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

fn to_camel_case(field: &str) -> String {
    let mut camel = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = !camel.is_empty();
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }
    camel
}
