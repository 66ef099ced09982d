//! Validated EAN-8 identifiers and the check-digit computation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A validated EAN-8 code: 8 decimal digits whose last digit is the
/// weighted checksum of the first seven.
///
/// Construct via [`FromStr`]; once built the digits are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ean8 {
    digits: [u8; 8],
}

impl Ean8 {
    /// The digits, leftmost first.
    #[inline]
    pub fn digits(&self) -> &[u8; 8] {
        &self.digits
    }
}

impl FromStr for Ean8 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 8 {
            return Err(ValidationError::WrongLength(s.chars().count()));
        }

        let mut digits = [0u8; 8];
        for (i, c) in s.chars().enumerate() {
            let d = c
                .to_digit(10)
                .ok_or(ValidationError::NonDigit(c))? as u8;
            digits[i] = d;
        }

        let expected = compute_check_digit(digits[..7].try_into().unwrap());
        if expected != digits[7] {
            return Err(ValidationError::BadChecksum {
                expected,
                found: digits[7],
            });
        }

        Ok(Self { digits })
    }
}

impl fmt::Display for Ean8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Compute the EAN-8 check digit for a 7-digit prefix.
///
/// Digits at even positions (leftmost = 0) weigh 3, odd positions weigh 1;
/// the check digit brings the weighted sum up to a multiple of 10.
pub fn compute_check_digit(prefix: &[u8; 7]) -> u8 {
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { 3 * d as u32 } else { d as u32 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether `s` is a well-formed EAN-8 code with a correct check digit.
pub fn is_valid(s: &str) -> bool {
    s.parse::<Ean8>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_validates() {
        // 9*3 + 6 + 3*3 + 8 + 5*3 + 0 + 7*3 = 86; (10 - 86 % 10) % 10 = 4.
        assert_eq!(compute_check_digit(&[9, 6, 3, 8, 5, 0, 7]), 4);
        assert!(is_valid("96385074"));
    }

    #[test]
    fn check_digit_completes_any_prefix() {
        // Sampled prefixes: the computed digit is in range and the
        // completed code validates.
        for seed in 0u32..200 {
            let mut prefix = [0u8; 7];
            let mut n = seed.wrapping_mul(9_301).wrapping_add(49_297);
            for d in &mut prefix {
                *d = (n % 10) as u8;
                n /= 10;
            }
            let check = compute_check_digit(&prefix);
            assert!(check <= 9);
            let s: String = prefix
                .iter()
                .chain(std::iter::once(&check))
                .map(|d| char::from(b'0' + d))
                .collect();
            assert!(is_valid(&s), "{s}");
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "1234567".parse::<Ean8>(),
            Err(ValidationError::WrongLength(7))
        );
        assert_eq!(
            "123456789".parse::<Ean8>(),
            Err(ValidationError::WrongLength(9))
        );
        assert!(!is_valid(""));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            "9638507a".parse::<Ean8>(),
            Err(ValidationError::NonDigit('a'))
        );
        assert!(!is_valid("96-85074"));
    }

    #[test]
    fn rejects_bad_checksum() {
        assert_eq!(
            "96385075".parse::<Ean8>(),
            Err(ValidationError::BadChecksum {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn display_round_trips() {
        let code: Ean8 = "55123457".parse().unwrap();
        assert_eq!(code.to_string(), "55123457");
        assert_eq!(code.digits(), &[5, 5, 1, 2, 3, 4, 5, 7]);
    }
}
