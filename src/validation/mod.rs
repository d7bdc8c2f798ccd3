//! Postal code validation service.
//!
//! [`PostalCodeValidator`] answers the three questions callers ask about a
//! country's postal codes: is this string one, does this text contain one,
//! and which one does it contain.

pub mod table;

pub use table::{CountryEntry, FormatTable, TableEntry};

use crate::error::{PostalCodeError, PostalCodeResult};
use crate::format::{MatchMode, PostalFormat};
use std::sync::Arc;

/// Validates, finds, and extracts postal codes against a [`FormatTable`].
///
/// Country codes are looked up exactly as given: `"us"` is not covered
/// even though `"US"` is.
///
/// # Example
///
/// ```
/// use postcode::PostalCodeValidator;
///
/// # fn main() -> Result<(), postcode::PostalCodeError> {
/// let validator = PostalCodeValidator::new();
///
/// assert!(validator.is_valid("US", "90210-1234")?);
/// assert!(validator.contains("CA", "Address: K1A 0B1 Canada")?);
/// assert_eq!(validator.capture("NL", "Postbus 1234 AB Amsterdam")?, "1234 AB");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PostalCodeValidator {
    table: Arc<FormatTable>,
}

impl PostalCodeValidator {
    /// Creates a validator over the built-in country table.
    pub fn new() -> Self {
        Self::with_table(FormatTable::builtin())
    }

    /// Creates a validator over a custom table.
    pub fn with_table(table: impl Into<Arc<FormatTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The table this validator reads from.
    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    /// Returns true if `country_code` is a key of the table.
    ///
    /// Coverage only depends on the key: a country with no formats is
    /// still covered.
    pub fn covering_country(&self, country_code: &str) -> bool {
        self.table.contains_country(country_code)
    }

    /// Checks that `postal_code` is, in its entirety, a postal code of the
    /// country. Countries without formats accept anything.
    pub fn is_valid(&self, country_code: &str, postal_code: &str) -> PostalCodeResult<bool> {
        self.validate(MatchMode::Strict, country_code, postal_code)
    }

    /// Checks whether `text` contains a postal code of the country anywhere.
    /// Countries without formats accept anything.
    pub fn contains(&self, country_code: &str, text: &str) -> PostalCodeResult<bool> {
        self.validate(MatchMode::Relaxed, country_code, text)
    }

    /// Extracts the first postal code of the country found in `text`.
    ///
    /// Formats are tried in table order and the leftmost occurrence of the
    /// first format that occurs at all is returned. Returns an empty string
    /// when nothing matches or the country has no formats.
    pub fn capture(&self, country_code: &str, text: &str) -> PostalCodeResult<String> {
        let captured = self
            .formats(country_code)?
            .iter()
            .find_map(|format| format.capture(text))
            .unwrap_or_default();

        Ok(captured.to_string())
    }

    /// Returns the country's formats in table order. May be empty.
    pub fn get_formats(&self, country_code: &str) -> PostalCodeResult<&[PostalFormat]> {
        self.formats(country_code)
    }

    /// Returns the country's English name.
    pub fn country_name(&self, country_code: &str) -> PostalCodeResult<&str> {
        Ok(self.entry(country_code)?.name())
    }

    /// Covered countries, sorted by code.
    pub fn countries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.table.countries()
    }

    fn validate(&self, mode: MatchMode, country_code: &str, subject: &str) -> PostalCodeResult<bool> {
        let formats = self.formats(country_code)?;
        if formats.is_empty() {
            return Ok(true);
        }

        Ok(formats.iter().any(|format| format.is_match(mode, subject)))
    }

    fn formats(&self, country_code: &str) -> PostalCodeResult<&[PostalFormat]> {
        Ok(self.entry(country_code)?.formats())
    }

    fn entry(&self, country_code: &str) -> PostalCodeResult<&CountryEntry> {
        self.table.get(country_code).ok_or_else(|| {
            tracing::debug!(country_code, "country not covered by format table");
            PostalCodeError::unknown_country(country_code)
        })
    }
}

impl Default for PostalCodeValidator {
    fn default() -> Self {
        Self::new()
    }
}
