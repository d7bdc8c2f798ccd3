//! Postal code validation for countries around the world.
//!
//! Every covered country (by ISO 3166-1 alpha-2 code) has an ordered list
//! of postal code formats written with three placeholders:
//!
//! - `#` any digit
//! - `@` any ASCII letter
//! - `*` any ASCII letter or digit
//!
//! Every other character is matched literally, so Canada's `@#@ #@#`
//! accepts `K1A 0B1`.
//!
//! # Architecture
//!
//! - [`format`]: placeholder syntax, pattern compilation, built-in data
//! - [`validation`]: compiled tables and the validator service
//! - [`error`]: error types
//!
//! # Quick Start
//!
//! ```
//! use postcode::PostalCodeValidator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = PostalCodeValidator::new();
//!
//! assert!(validator.is_valid("US", "90210")?);
//! assert!(!validator.is_valid("US", "9021")?);
//! assert!(validator.contains("GB", "10 Downing Street, London SW1A 2AA")?);
//! assert_eq!(validator.capture("PL", "ul. Polna 1, 00-950 Warszawa")?, "00-950");
//! # Ok(())
//! # }
//! ```
//!
//! Unknown country codes are an error rather than a failed match:
//!
//! ```
//! use postcode::{PostalCodeError, PostalCodeValidator};
//!
//! let validator = PostalCodeValidator::new();
//! assert!(matches!(
//!     validator.is_valid("ZZ", "12345"),
//!     Err(PostalCodeError::UnknownCountry { .. })
//! ));
//! ```

pub mod error;
pub mod format;
pub mod validation;

pub use error::{PostalCodeError, PostalCodeResult};
pub use format::{MatchMode, Placeholder, PostalFormat};
pub use validation::{CountryEntry, FormatTable, PostalCodeValidator, TableEntry};
