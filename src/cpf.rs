use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::digits;
use crate::error::ParseError;

const DIGIT_COUNT: usize = 11;
const BASE_DIGIT_COUNT: usize = 9;
// AAA.AAA.AAA-BB
const SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];

/// A validated CPF, the 11-digit Brazilian natural-person tax
/// identifier.
///
/// Same surface as [`Cnpj`](crate::Cnpj): values come out of
/// [`Cpf::parse`] or [`Cpf::random`] and always hold a checksum-valid
/// identifier in canonical punctuated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

// https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
//
// Weights grow 2, 3, 4, ... from the last digit towards the first
// without ever cycling, unlike the CNPJ rule.
fn check_digit(digits: &[u8]) -> u8 {
    digits::check_digit(digits, 2u32..)
}

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    [first, check_digit(&extended)]
}

impl Cpf {
    /// Returns `true` if `input` is a full, checksum-valid CPF, with
    /// or without punctuation.
    pub fn is_valid(input: &str) -> bool {
        match digits::strip(input) {
            Ok(digits) if digits.len() == DIGIT_COUNT => {
                let (base, found) = digits.split_at(BASE_DIGIT_COUNT);
                found == check_digits(base)
            }
            _ => false,
        }
    }

    /// Parses a CPF from punctuated, unpunctuated or check-digit-less
    /// input. A 9-digit base gets its check digits derived and
    /// appended.
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
        Ok(Cpf(digits::format(&digits, SEPARATORS)))
    }

    /// Generates a random valid CPF from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generates a random valid CPF from the supplied RNG.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits: Vec<u8> = (0..BASE_DIGIT_COUNT).map(|_| rng.gen_range(0..=9)).collect();
        let [first, second] = check_digits(&digits);
        digits.push(first);
        digits.push(second);
        Cpf(digits::format(&digits, SEPARATORS))
    }

    /// Canonical punctuated form, `AAA.AAA.AAA-BB`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit-only form, no punctuation.
    pub fn stripped(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
