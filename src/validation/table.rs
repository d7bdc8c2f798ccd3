//! Compiled country format tables.
//!
//! A [`FormatTable`] is the read-only source of truth for which countries
//! are covered and which postal code formats they accept. It is built once,
//! either from the built-in data or from caller-supplied entries, and every
//! pattern is compiled while building so lookups never fail on bad data.

use crate::error::{PostalCodeError, PostalCodeResult};
use crate::format::{PostalFormat, COUNTRY_FORMATS};
use once_cell::sync::Lazy;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Uncompiled description of one country, used to build a [`FormatTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub code: String,
    pub name: Option<String>,
    pub formats: Vec<String>,
}

impl TableEntry {
    /// Creates an unnamed entry with formats in preference order.
    pub fn new<I, S>(code: impl Into<String>, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            name: None,
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the English country name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A covered country and its compiled formats.
#[derive(Debug, Clone)]
pub struct CountryEntry {
    code: String,
    name: Option<String>,
    formats: Vec<PostalFormat>,
}

impl CountryEntry {
    /// Country code exactly as stored in the table.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// English name of the country, falling back to its code when the
    /// table did not provide one.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }

    /// Formats in preference order. Empty when the country has no
    /// constraint on postal codes.
    pub fn formats(&self) -> &[PostalFormat] {
        &self.formats
    }
}

/// Mapping from country code to its ordered, compiled postal code formats.
#[derive(Debug, Clone)]
pub struct FormatTable {
    countries: BTreeMap<String, CountryEntry>,
}

static BUILTIN: Lazy<Arc<FormatTable>> = Lazy::new(|| {
    let entries = COUNTRY_FORMATS.iter().map(|row| {
        TableEntry::new(row.code, row.formats.iter().copied()).with_name(row.name)
    });
    Arc::new(FormatTable::from_entries(entries).expect("Valid built-in postal code formats"))
});

impl FormatTable {
    /// Returns the shared table compiled from the built-in country data.
    pub fn builtin() -> Arc<FormatTable> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a table, compiling every format.
    ///
    /// # Errors
    /// - [`PostalCodeError::InvalidCountryCode`] if a code is not two
    ///   uppercase ASCII letters
    /// - [`PostalCodeError::DuplicateCountry`] if a code appears twice
    /// - [`PostalCodeError::InvalidFormat`] if a format fails to compile
    pub fn from_entries<I>(entries: I) -> PostalCodeResult<Self>
    where
        I: IntoIterator<Item = TableEntry>,
    {
        let mut countries = BTreeMap::new();

        for entry in entries {
            if !is_country_code(&entry.code) {
                return Err(PostalCodeError::InvalidCountryCode { code: entry.code });
            }
            if countries.contains_key(&entry.code) {
                return Err(PostalCodeError::DuplicateCountry { code: entry.code });
            }

            let formats = entry
                .formats
                .into_iter()
                .map(|pattern| {
                    PostalFormat::new(pattern.as_str()).map_err(|source| {
                        PostalCodeError::InvalidFormat {
                            country: entry.code.clone(),
                            pattern,
                            source,
                        }
                    })
                })
                .collect::<PostalCodeResult<Vec<_>>>()?;

            countries.insert(
                entry.code.clone(),
                CountryEntry {
                    code: entry.code,
                    name: entry.name,
                    formats,
                },
            );
        }

        let table = Self { countries };
        tracing::debug!(
            countries = table.len(),
            formats = table.format_count(),
            "compiled postal code format table"
        );
        Ok(table)
    }

    /// Parses a table from JSON.
    ///
    /// The document is an object keyed by country code. Each value is
    /// either a list of formats or an object with `formats` and an
    /// optional `name`:
    ///
    /// ```
    /// use postcode::FormatTable;
    ///
    /// let table = FormatTable::from_json_str(
    ///     r######"{ "US": ["#####", "#####-####"], "AO": { "name": "Angola", "formats": [] } }"######,
    /// )?;
    /// assert_eq!(table.len(), 2);
    /// # Ok::<(), postcode::PostalCodeError>(())
    /// ```
    pub fn from_json_str(json: &str) -> PostalCodeResult<Self> {
        let raw: RawTable = serde_json::from_str(json)?;
        Self::from_entries(raw.0)
    }

    /// Reads and parses a JSON table file. See [`FormatTable::from_json_str`].
    pub fn from_json_file(path: &Path) -> PostalCodeResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PostalCodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading postal code format table");
        Self::from_json_str(&json)
    }

    /// Looks up a country by its exact code.
    pub fn get(&self, code: &str) -> Option<&CountryEntry> {
        self.countries.get(code)
    }

    /// Exact, case-sensitive key lookup.
    pub fn contains_country(&self, code: &str) -> bool {
        self.countries.contains_key(code)
    }

    /// Covered countries, sorted by code.
    pub fn countries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.countries.values()
    }

    /// Number of covered countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns true if no country is covered.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Total number of formats across all countries.
    pub fn format_count(&self) -> usize {
        self.countries.values().map(|c| c.formats.len()).sum()
    }
}

fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCountry {
    Formats(Vec<String>),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        formats: Vec<String>,
    },
}

/// Table entries in document order, keeping duplicate keys so they can be
/// reported instead of silently overwritten.
struct RawTable(Vec<TableEntry>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawTableVisitor;

        impl<'de> Visitor<'de> for RawTableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping country codes to postal code formats")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawTable, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((code, country)) = map.next_entry::<String, RawCountry>()? {
                    entries.push(match country {
                        RawCountry::Formats(formats) => TableEntry {
                            code,
                            name: None,
                            formats,
                        },
                        RawCountry::Detailed { name, formats } => TableEntry {
                            code,
                            name,
                            formats,
                        },
                    });
                }
                Ok(RawTable(entries))
            }
        }

        deserializer.deserialize_map(RawTableVisitor)
    }
}
