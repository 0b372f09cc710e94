//! Schema validation shared by all documents.
//!
//! Constraint violations are rendered in a single line that names the
//! document, each failing field, and the reason:
//! `Event validation failed: title: Event title can not be longer than 30 characters.`

use validator::{Validate, ValidationError, ValidationErrors};

use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_core::types::Resource;

/// A request body that creates or patches a document of one kind.
pub trait DocumentPayload {
    const RESOURCE: Resource;
}

/// Rejects empty or whitespace-only strings.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Validate a document, mapping violations into a validation error.
pub fn validate_document<T: Validate>(document: &T, resource: Resource) -> AppResult<()> {
    document
        .validate()
        .map_err(|errors| AppError::validation(describe(resource, &errors)))
}

/// Render validation errors as `"<Resource> validation failed: <field>: <reason>, ..."`.
///
/// Fields are listed in name order; each field reports its first violation.
pub fn describe(resource: Resource, errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let reasons: Vec<String> = fields
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first()
                .map(|err| format!("{field}: {}", reason(field, err)))
        })
        .collect();

    format!("{resource} validation failed: {}", reasons.join(", "))
}

fn reason(field: &str, err: &ValidationError) -> String {
    match (&err.message, err.code.as_ref()) {
        (Some(message), _) => message.to_string(),
        (None, "required") => format!("Path `{field}` is required."),
        (None, code) => format!("Validator \"{code}\" failed for path `{field}`."),
    }
}
