//! Digit helpers and the two check-digit algorithms used by Ecuadorian IDs.

/// Lowest and highest valid province codes.
pub const PROVINCE_RANGE: std::ops::RangeInclusive<u32> = 1..=24;

/// Weights applied to the first 8 digits of a public-entity RUC.
pub const PUBLIC_ENTITY_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Weights applied to the first 9 digits of a juridical-person RUC.
pub const JURIDICAL_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Parse `value` into its digits when it is exactly `len` ASCII digits.
pub fn digits_of(value: &str, len: usize) -> Option<Vec<u32>> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.bytes().map(|b| u32::from(b - b'0')).collect())
}

/// Province code formed by the first two digits.
pub fn province_code(digits: &[u32]) -> Option<u32> {
    match digits {
        [tens, units, ..] => Some(tens * 10 + units),
        _ => None,
    }
}

pub fn is_valid_province(digits: &[u32]) -> bool {
    province_code(digits).is_some_and(|code| PROVINCE_RANGE.contains(&code))
}

/// Modulus-10 check digit over the first nine digits of a cédula.
///
/// Even positions are doubled, folding results above 9 back by subtracting 9.
pub fn mod10_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

/// Modulus-11 check digit for the given weight vector.
///
/// A result of 11 maps to 0. A result of 10 is returned as-is and therefore
/// never matches a single digit.
pub fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let check = 11 - sum % 11;
    if check == 11 {
        0
    } else {
        check
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_of() {
        assert_eq!(digits_of("0123", 4), Some(vec![0, 1, 2, 3]));
        assert_eq!(digits_of("0123", 5), None);
        assert_eq!(digits_of("01a3", 4), None);
        assert_eq!(digits_of("", 0), Some(vec![]));
        // multi-byte characters never count as digits
        assert_eq!(digits_of("١٢", 4), None);
    }

    #[test]
    fn test_province_bounds() {
        assert!(!is_valid_province(&[0, 0]));
        assert!(is_valid_province(&[0, 1]));
        assert!(is_valid_province(&[2, 4]));
        assert!(!is_valid_province(&[2, 5]));
        assert!(!is_valid_province(&[1]));
    }

    #[test]
    fn test_mod10() {
        let digits = digits_of("1710034065", 10).unwrap();
        assert_eq!(mod10_check_digit(&digits), 5);
    }

    #[test]
    fn test_mod11_eleven_maps_to_zero() {
        // 3*1 + 2*7 + 7*6 + 5*8 = 99, a multiple of 11
        let digits = [1, 7, 6, 0, 8, 0, 0, 0];
        assert_eq!(mod11_check_digit(&digits, &PUBLIC_ENTITY_WEIGHTS), 0);
    }

    #[test]
    fn test_mod11_juridical() {
        let digits = digits_of("179001167", 9).unwrap();
        assert_eq!(mod11_check_digit(&digits, &JURIDICAL_WEIGHTS), 4);
    }
}
