//! Validation, formatting and random generation of Brazilian tax
//! identifiers.
//!
//! Two identifier kinds are supported, each as an immutable value type
//! that can only hold a checksum-valid identifier:
//!
//! - [`Cnpj`], the 14-digit legal-entity identifier
//!   (`AA.AAA.AAA/BBBB-CC`);
//! - [`Cpf`], the 11-digit natural-person identifier
//!   (`AAA.AAA.AAA-BB`).
//!
//! ```
//! use br_tax_id::Cnpj;
//!
//! let cnpj = Cnpj::parse("31214261000138")?;
//! assert_eq!(cnpj.as_str(), "31.214.261/0001-38");
//!
//! // Check digits are derived when the input omits them.
//! assert_eq!(Cnpj::parse("31.214.261/0001")?, cnpj);
//! # Ok::<(), br_tax_id::ParseError>(())
//! ```

// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod cnpj;
mod cpf;
mod digits;
mod error;

pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use error::ParseError;
