//! Ecuadorian identification number validation.
//!
//! Covers the two documents captured by the dashboard's company, client and
//! seller forms:
//!
//! - **Cédula**: 10-digit national identity number, modulus-10 check digit.
//! - **RUC**: 13-digit taxpayer registry number. Its third digit selects the
//!   taxpayer type, which decides whether the first ten digits are a cédula
//!   (natural person) or a weighted modulus-11 check applies (public entity,
//!   juridical person).
//!
//! Every validator is total: malformed input is reported as an
//! [`IdentificationError`], never a panic.
//!
//! ```rust
//! use identification::{validate_identification, IdentificationError};
//!
//! assert!(validate_identification("1710034065").is_ok());
//! assert!(validate_identification("").is_ok());
//! assert_eq!(
//!     validate_identification("12345"),
//!     Err(IdentificationError::IdentificationLength)
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod cedula;
pub mod checksum;
pub mod error;
pub mod field;
pub mod ruc;
pub mod validation;

pub use cedula::{validate_cedula, CEDULA_LENGTH};
pub use error::{
    ErrorKind, FieldError, IdentificationError, Result, UiFieldError, ValidationResult,
};
pub use field::IdentificationField;
pub use ruc::{classify_ruc, validate_ruc, TaxpayerType, RUC_LENGTH};
pub use validation::FieldValidator;

/// Validate either a cédula or a RUC, chosen by length.
///
/// Blank input is accepted as "not yet entered".
pub fn validate_identification(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    match trimmed.chars().count() {
        0 => Ok(()),
        CEDULA_LENGTH => validate_cedula(trimmed),
        RUC_LENGTH => validate_ruc(trimmed),
        _ => Err(IdentificationError::IdentificationLength),
    }
}

/// Which document a field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentificationKind {
    Cedula,
    Ruc,
    #[default]
    Any,
}

impl IdentificationKind {
    pub fn validate(&self, value: &str) -> ValidationResult {
        match self {
            Self::Cedula => validate_cedula(value),
            Self::Ruc => validate_ruc(value),
            Self::Any => validate_identification(value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cedula => "cedula",
            Self::Ruc => "ruc",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for IdentificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentificationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cedula" | "cédula" => Ok(Self::Cedula),
            "ruc" => Ok(Self::Ruc),
            "any" => Ok(Self::Any),
            other => Err(format!("unknown identification kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1710034065")]
    #[case("1710034065001")]
    #[case("1790011674001")]
    #[case("")]
    #[case("   ")]
    fn test_identification_accepts(#[case] value: &str) {
        assert_eq!(validate_identification(value), Ok(()));
    }

    #[rstest]
    #[case("1710034066", IdentificationError::CedulaChecksum)]
    #[case("1770000000001", IdentificationError::ThirdDigit)]
    #[case("1710034065000", IdentificationError::EstablishmentSuffix)]
    #[case("12345", IdentificationError::IdentificationLength)]
    #[case("171003406500", IdentificationError::IdentificationLength)]
    #[case("abcdefghij", IdentificationError::CedulaFormat)]
    #[case("abcdefghijklm", IdentificationError::RucFormat)]
    fn test_identification_rejects(#[case] value: &str, #[case] expected: IdentificationError) {
        assert_eq!(validate_identification(value), Err(expected));
    }

    #[test]
    fn test_kind_dispatch() {
        assert!(IdentificationKind::Cedula.validate("1710034065").is_ok());
        assert_eq!(
            IdentificationKind::Cedula.validate(""),
            Err(IdentificationError::CedulaFormat)
        );
        assert!(IdentificationKind::Ruc.validate("").is_ok());
        assert_eq!(
            IdentificationKind::Ruc.validate("1710034065"),
            Err(IdentificationError::RucFormat)
        );
        assert!(IdentificationKind::Any.validate("1760001550001").is_ok());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("cedula".parse(), Ok(IdentificationKind::Cedula));
        assert_eq!("RUC".parse(), Ok(IdentificationKind::Ruc));
        assert_eq!("any".parse(), Ok(IdentificationKind::Any));
        assert!("passport".parse::<IdentificationKind>().is_err());
    }
}
