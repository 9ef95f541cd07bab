use crate::error::FieldError;
use crate::IdentificationField;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::debug;

/// Validates identification values submitted through dashboard forms
pub struct FieldValidator;

impl FieldValidator {
    /// Validate a field value against its field definition
    pub fn validate_field_value(
        field: &IdentificationField,
        value: &JsonValue,
    ) -> Result<(), FieldError> {
        // Null and blank strings both mean "not yet entered"
        let text = match value {
            JsonValue::Null => None,
            JsonValue::String(s) if s.trim().is_empty() => None,
            JsonValue::String(s) => Some(s.as_str()),
            _ => {
                debug!(field = %field.id, "identification value is not a string");
                return Err(FieldError::TypeConversion {
                    field: field.id.clone(),
                });
            }
        };

        let Some(text) = text else {
            if field.required {
                debug!(field = %field.id, "required identification field is blank");
                return Err(FieldError::Required(field.id.clone()));
            }
            return Ok(());
        };

        field.kind.validate(text).map_err(|source| {
            debug!(field = %field.id, reason = %source, "identification rejected");
            FieldError::Invalid {
                field: field.id.clone(),
                source,
            }
        })
    }

    /// Validate every field of a form, collecting all failures.
    ///
    /// A field missing from `values` is treated like a null value.
    pub fn validate_form(
        fields: &[IdentificationField],
        values: &HashMap<String, JsonValue>,
    ) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = fields
            .iter()
            .filter_map(|field| {
                match values.get(&field.id) {
                    Some(value) => Self::validate_field_value(field, value).err(),
                    None => Self::validate_field_value(field, &JsonValue::Null).err(),
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
