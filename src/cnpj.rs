use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::digits;
use crate::error::ParseError;

/// Digits in a full identifier, check digits included.
const DIGIT_COUNT: usize = 14;
/// Digits in the registration base, before the check digits.
const BASE_DIGIT_COUNT: usize = 12;
// AA.AAA.AAA/BBBB-CC
const SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// A validated CNPJ, the 14-digit Brazilian legal-entity tax
/// identifier.
///
/// Values come out of [`Cnpj::parse`] or [`Cnpj::random`] and always
/// hold a checksum-valid identifier in canonical punctuated form.
/// Equality and hashing compare that canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

// https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
//
// Weights run 2..=9 from the last digit towards the first, cycling
// back to 2 after 9. This differs from the CPF rule, which never
// cycles.
fn check_digit(digits: &[u8]) -> u8 {
    digits::check_digit(digits, (2u32..=9).cycle())
}

/// Both check digits for a 12-digit base: the first over the base, the
/// second over the base extended with the first.
fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    [first, check_digit(&extended)]
}

impl Cnpj {
    /// Returns `true` if `input` is a full, checksum-valid CNPJ, with
    /// or without punctuation.
    ///
    /// ```
    /// use br_tax_id::Cnpj;
    ///
    /// assert!(Cnpj::is_valid("31.214.261/0001-38"));
    /// assert!(Cnpj::is_valid("31214261000138"));
    /// assert!(!Cnpj::is_valid("31214261000139"));
    /// ```
    pub fn is_valid(input: &str) -> bool {
        match digits::strip(input) {
            Ok(digits) if digits.len() == DIGIT_COUNT => {
                let (base, found) = digits.split_at(BASE_DIGIT_COUNT);
                found == check_digits(base)
            }
            _ => false,
        }
    }

    /// Parses a CNPJ from punctuated, unpunctuated or check-digit-less
    /// input.
    ///
    /// A 12-digit base gets its check digits derived and appended; a
    /// 14-digit input must already carry matching check digits.
    ///
    /// ```
    /// use br_tax_id::Cnpj;
    ///
    /// let cnpj = Cnpj::parse("31.214.261/0001-38")?;
    /// assert_eq!(Cnpj::parse("31214261000138")?, cnpj);
    /// assert_eq!(Cnpj::parse("31.214.261/0001")?, cnpj);
    /// # Ok::<(), br_tax_id::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut digits = digits::strip(input)?;
        if digits.len() == BASE_DIGIT_COUNT {
            let [first, second] = check_digits(&digits);
            digits.push(first);
            digits.push(second);
        } else if digits.len() == DIGIT_COUNT {
            let (base, found) = digits.split_at(BASE_DIGIT_COUNT);
            if found != check_digits(base) {
                return Err(ParseError::InvalidChecksum);
            }
        } else {
            return Err(ParseError::InvalidLength(digits.len()));
        }
        Ok(Cnpj(digits::format(&digits, SEPARATORS)))
    }

    /// Generates a random valid CNPJ from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generates a random valid CNPJ from the supplied RNG, so callers
    /// can seed one for reproducible output.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits: Vec<u8> = (0..BASE_DIGIT_COUNT).map(|_| rng.gen_range(0..=9)).collect();
        let [first, second] = check_digits(&digits);
        digits.push(first);
        digits.push(second);
        Cnpj(digits::format(&digits, SEPARATORS))
    }

    /// Canonical punctuated form, `AA.AAA.AAA/BBBB-CC`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit-only form, no punctuation.
    ///
    /// ```
    /// use br_tax_id::Cnpj;
    ///
    /// assert_eq!(Cnpj::parse("31.214.261/0001-38")?.stripped(), "31214261000138");
    /// # Ok::<(), br_tax_id::ParseError>(())
    /// ```
    pub fn stripped(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserializes as a plain string routed through the parser, so invalid
// identifiers are rejected at deserialization time and any
// parser-accepted shape lands on the canonical form.
impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn valid_cnpjs() {
        let valid_ids = vec![
            "31.214.261/0001-38",
            "31214261000138",
            "00.623.904/0001-73",
            "00623904000173",
        ];
        for id in valid_ids {
            assert!(Cnpj::is_valid(id));
        }
    }

    #[test]
    fn invalid_cnpjs() {
        let invalid_ids = vec![
            // wrong checksum
            "31.214.261/0001-39",
            "00.623.904/0001-71",
            // valid cpf
            "012.345.678-90",
            // non-digit characters
            "31.214.261/0001-3x",
            "567.456.234-90ñô",
            // wrong length
            "31.214.261/001-38",
            "312142610001380",
            "",
        ];
        for id in invalid_ids {
            assert!(!Cnpj::is_valid(id));
        }
    }

    #[test]
    fn predicate_does_not_complete_check_digits() {
        // parseable as a base, but not a full identifier
        assert!(!Cnpj::is_valid("31.214.261/0001"));
        assert!(Cnpj::parse("31.214.261/0001").is_ok());
    }

    #[test]
    fn parse_accepts_all_input_shapes() {
        let formatted = Cnpj::parse("31.214.261/0001-38").unwrap();
        let stripped = Cnpj::parse("31214261000138").unwrap();
        let without_check_digits = Cnpj::parse("31.214.261/0001").unwrap();

        assert_eq!(formatted, stripped);
        assert_eq!(formatted, without_check_digits);
        assert_eq!(formatted.as_str(), "31.214.261/0001-38");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Cnpj::parse("abc"), Err(ParseError::InvalidCharacter('a')));
        assert_eq!(
            Cnpj::parse("31.214.261/0001-3"),
            Err(ParseError::InvalidLength(13))
        );
        assert_eq!(
            Cnpj::parse("31.214.261/0001-39"),
            Err(ParseError::InvalidChecksum)
        );
    }

    #[test]
    fn strip_and_format_round_trip() {
        let cnpj = Cnpj::parse("31.214.261/0001-38").unwrap();
        assert_eq!(cnpj.stripped(), "31214261000138");
        assert_eq!(cnpj.to_string(), "31.214.261/0001-38");
        assert_eq!(Cnpj::parse(&cnpj.stripped()).unwrap(), cnpj);
    }

    #[test]
    fn mutated_check_digit_is_invalid() {
        let cnpj = Cnpj::random();
        let mut corrupted = cnpj.stripped();
        let last = corrupted.pop().unwrap().to_digit(10).unwrap();
        corrupted.push(char::from_digit((last + 1) % 10, 10).unwrap());
        assert!(!Cnpj::is_valid(&corrupted));
    }

    #[test]
    fn random_is_valid() {
        for _ in 0..64 {
            let cnpj = Cnpj::random();
            assert!(Cnpj::is_valid(cnpj.as_str()));
            assert!(Cnpj::is_valid(&cnpj.stripped()));
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = Cnpj::random_with(&mut StdRng::seed_from_u64(7));
        let b = Cnpj::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
