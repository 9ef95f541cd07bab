use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of validating a single identification number.
///
/// `Ok(())` means the value is valid (or blank where blank is skipped).
pub type ValidationResult = std::result::Result<(), IdentificationError>;

pub type Result<T> = std::result::Result<T, IdentificationError>;

/// Broad family of an identification failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong length or non-numeric input.
    Structural,
    /// Well-formed input whose verification digit does not match.
    Checksum,
    /// Province code, establishment suffix or taxpayer-type digit out of range.
    Range,
}

/// Reasons an identification number is rejected.
///
/// The `Display` output is the human-readable reason shown next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentificationError {
    #[error("must be 10 numeric digits")]
    CedulaFormat,

    #[error("must be 13 numeric digits")]
    RucFormat,

    #[error("must be 10 or 13 digits")]
    IdentificationLength,

    #[error("invalid province code")]
    ProvinceCode,

    #[error("establishment suffix must be 001 or higher")]
    EstablishmentSuffix,

    #[error("invalid third digit")]
    ThirdDigit,

    #[error("checksum mismatch")]
    CedulaChecksum,

    #[error("invalid base cédula")]
    BaseCedula,

    #[error("public-entity check digit mismatch")]
    PublicEntityCheckDigit,

    #[error("juridical check digit mismatch")]
    JuridicalCheckDigit,
}

impl IdentificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CedulaFormat | Self::RucFormat | Self::IdentificationLength => {
                ErrorKind::Structural
            }
            Self::ProvinceCode | Self::EstablishmentSuffix | Self::ThirdDigit => ErrorKind::Range,
            Self::CedulaChecksum
            | Self::BaseCedula
            | Self::PublicEntityCheckDigit
            | Self::JuridicalCheckDigit => ErrorKind::Checksum,
        }
    }

    /// Stable machine-readable code for UI error maps.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CedulaFormat => "cedula_format",
            Self::RucFormat => "ruc_format",
            Self::IdentificationLength => "identification_length",
            Self::ProvinceCode => "province_code",
            Self::EstablishmentSuffix => "establishment_suffix",
            Self::ThirdDigit => "third_digit",
            Self::CedulaChecksum => "cedula_checksum",
            Self::BaseCedula => "base_cedula",
            Self::PublicEntityCheckDigit => "public_entity_check_digit",
            Self::JuridicalCheckDigit => "juridical_check_digit",
        }
    }
}

/// Errors raised when validating identification values coming from a form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Required field '{0}' is missing")]
    Required(String),

    #[error("Field '{field}' expects a string value")]
    TypeConversion { field: String },

    #[error("Field '{field}' is invalid: {source}")]
    Invalid {
        field: String,
        source: IdentificationError,
    },
}

/// Error entry in the shape the dashboard forms render inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            Self::Required(field) => field,
            Self::TypeConversion { field } | Self::Invalid { field, .. } => field,
        }
    }

    pub fn to_ui_error(&self) -> UiFieldError {
        let (code, message) = match self {
            Self::Required(_) => ("required".to_string(), "this field is required".to_string()),
            Self::TypeConversion { .. } => {
                ("type".to_string(), "expected a text value".to_string())
            }
            Self::Invalid { source, .. } => (source.code().to_string(), source.to_string()),
        };

        UiFieldError {
            field: self.field().to_string(),
            code,
            message,
        }
    }
}
