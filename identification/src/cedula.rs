use crate::checksum::{digits_of, is_valid_province, mod10_check_digit};
use crate::error::{IdentificationError, ValidationResult};

pub const CEDULA_LENGTH: usize = 10;

/// Validate a 10-digit Ecuadorian cédula.
///
/// Surrounding whitespace is ignored. Unlike the RUC validator, blank input is
/// not skipped and fails the format rule.
pub fn validate_cedula(value: &str) -> ValidationResult {
    let digits = digits_of(value.trim(), CEDULA_LENGTH).ok_or(IdentificationError::CedulaFormat)?;
    validate_cedula_digits(&digits)
}

pub(crate) fn validate_cedula_digits(digits: &[u32]) -> ValidationResult {
    if !is_valid_province(digits) {
        return Err(IdentificationError::ProvinceCode);
    }

    let expected = mod10_check_digit(digits);
    match digits.get(9) {
        Some(&check) if check == expected => Ok(()),
        _ => Err(IdentificationError::CedulaChecksum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1710034065")]
    #[case(" 1710034065 ")]
    #[case("0926687856")]
    fn test_valid_cedulas(#[case] value: &str) {
        assert_eq!(validate_cedula(value), Ok(()));
    }

    #[rstest]
    #[case("1710034066", IdentificationError::CedulaChecksum)]
    #[case("0099999999", IdentificationError::ProvinceCode)]
    #[case("2599999999", IdentificationError::ProvinceCode)]
    #[case("171003406", IdentificationError::CedulaFormat)]
    #[case("17100340655", IdentificationError::CedulaFormat)]
    #[case("17100340a5", IdentificationError::CedulaFormat)]
    #[case("", IdentificationError::CedulaFormat)]
    fn test_invalid_cedulas(#[case] value: &str, #[case] expected: IdentificationError) {
        assert_eq!(validate_cedula(value), Err(expected));
    }

    #[test]
    fn test_exactly_one_check_digit_per_prefix() {
        let mut valid = 0;
        for n in 0..100u32 {
            let value = format!("17100340{:02}", n);
            match validate_cedula(&value) {
                Ok(()) => valid += 1,
                Err(err) => assert_eq!(err, IdentificationError::CedulaChecksum),
            }
        }
        assert_eq!(valid, 10);
    }
}
