//! Format patterns and the built-in country table.
//!
//! This module contains the placeholder syntax, the translation of
//! patterns into matchers, and the static data describing which postal
//! code shapes each country accepts.

pub mod countries;
pub mod pattern;
pub mod placeholder;

pub use countries::{CountryFormats, COUNTRY_FORMATS};
pub use pattern::{compile_pattern, translate, MatchMode, PostalFormat, CAPTURE_GROUP};
pub use placeholder::Placeholder;
