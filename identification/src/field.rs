use crate::IdentificationKind;
use serde::{Deserialize, Serialize};

/// A form input bound to an identification number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentificationField {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: IdentificationKind,
    #[serde(default)]
    pub required: bool,
}

impl IdentificationField {
    /// Create an optional field accepting either document type
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: IdentificationKind::Any,
            required: false,
        }
    }

    /// Restrict the field to one document type
    pub fn with_kind(mut self, kind: IdentificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the field as required
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = IdentificationField::new("ruc", "RUC")
            .with_kind(IdentificationKind::Ruc)
            .required(true);

        assert_eq!(field.id, "ruc");
        assert_eq!(field.label, "RUC");
        assert_eq!(field.kind, IdentificationKind::Ruc);
        assert!(field.required);
    }

    #[test]
    fn test_field_deserialize_defaults() {
        let field: IdentificationField =
            serde_json::from_str(r#"{"id": "identificacion", "label": "Identificación"}"#)
                .unwrap();
        assert_eq!(field.kind, IdentificationKind::Any);
        assert!(!field.required);

        let field: IdentificationField = serde_json::from_str(
            r#"{"id": "cedula", "label": "Cédula", "kind": "cedula", "required": true}"#,
        )
        .unwrap();
        assert_eq!(field.kind, IdentificationKind::Cedula);
        assert!(field.required);
    }
}
