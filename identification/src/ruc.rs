use crate::cedula::validate_cedula_digits;
use crate::checksum::{
    digits_of, is_valid_province, mod11_check_digit, JURIDICAL_WEIGHTS, PUBLIC_ENTITY_WEIGHTS,
};
use crate::error::{IdentificationError, Result, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RUC_LENGTH: usize = 13;

/// Taxpayer category selected by the third digit of a RUC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxpayerType {
    /// Third digit 0-5; the first ten digits are a cédula.
    NaturalPerson,
    /// Third digit 6.
    PublicEntity,
    /// Third digit 9; companies and foreign entities.
    Juridical,
}

impl TaxpayerType {
    /// Map the third digit of a RUC to its taxpayer type.
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            0..=5 => Some(Self::NaturalPerson),
            6 => Some(Self::PublicEntity),
            9 => Some(Self::Juridical),
            _ => None,
        }
    }
}

impl fmt::Display for TaxpayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NaturalPerson => "natural person",
            Self::PublicEntity => "public entity",
            Self::Juridical => "juridical person",
        };
        f.write_str(label)
    }
}

/// Validate a 13-digit RUC.
///
/// Blank input is accepted so optional RUC fields pass until something is
/// entered; mandatory fields need a separate required rule.
pub fn validate_ruc(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Ok(());
    }
    classify_ruc(value).map(|_| ())
}

/// Validate a RUC and report which taxpayer path accepted it.
///
/// Blank input is rejected here since there is nothing to classify.
pub fn classify_ruc(value: &str) -> Result<TaxpayerType> {
    let digits = digits_of(value.trim(), RUC_LENGTH).ok_or(IdentificationError::RucFormat)?;

    if digits[10..].iter().all(|&d| d == 0) {
        return Err(IdentificationError::EstablishmentSuffix);
    }

    if !is_valid_province(&digits) {
        return Err(IdentificationError::ProvinceCode);
    }

    let taxpayer =
        TaxpayerType::from_digit(digits[2]).ok_or(IdentificationError::ThirdDigit)?;

    match taxpayer {
        TaxpayerType::NaturalPerson => {
            validate_cedula_digits(&digits[..10]).map_err(|_| IdentificationError::BaseCedula)?;
        }
        TaxpayerType::PublicEntity => {
            if mod11_check_digit(&digits, &PUBLIC_ENTITY_WEIGHTS) != digits[8] {
                return Err(IdentificationError::PublicEntityCheckDigit);
            }
        }
        TaxpayerType::Juridical => {
            if mod11_check_digit(&digits, &JURIDICAL_WEIGHTS) != digits[9] {
                return Err(IdentificationError::JuridicalCheckDigit);
            }
        }
    }

    Ok(taxpayer)
}
