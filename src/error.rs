use thiserror::Error;

/// Why an input string could not be turned into an identifier.
///
/// Returned by [`Cnpj::parse`](crate::Cnpj::parse) and
/// [`Cpf::parse`](crate::Cpf::parse). The predicate form
/// (`is_valid`) never surfaces these; it collapses every failure to
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// After stripping separators the input still contains something
    /// other than decimal digits.
    #[error("input contains a non-digit character {0:?}")]
    InvalidCharacter(char),

    /// The stripped digit count matches neither the base form nor the
    /// full form of the identifier.
    #[error("identifier has a wrong number of digits ({0})")]
    InvalidLength(usize),

    /// A full-length input whose trailing check digits do not match
    /// the digits recomputed from its base.
    #[error("check digits do not match the rest of the identifier")]
    InvalidChecksum,
}
