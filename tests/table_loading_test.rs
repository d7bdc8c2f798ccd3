//! Tests for loading custom format tables from JSON files.

use anyhow::Result;
use postcode::{FormatTable, PostalCodeError, PostalCodeValidator};
use std::fs;
use tempfile::TempDir;

mod common;
use common::*;

#[test]
fn test_load_table_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formats.json");
    fs::write(
        &path,
        r######"{
            "US": ["#####", "#####-####"],
            "XK": { "name": "Kosovo", "formats": ["#####"] },
            "AO": []
        }"######,
    )?;

    let table = FormatTable::from_json_file(&path)?;
    let validator = PostalCodeValidator::with_table(table);

    assert!(validator.is_valid("XK", "10000")?);
    assert_eq!(validator.country_name("XK")?, "Kosovo");
    assert_eq!(validator.country_name("US")?, "US");
    assert!(validator.is_valid("AO", "anything")?);
    assert_eq!(
        format_strings(validator.get_formats("US")?),
        ["#####", "#####-####"]
    );
    assert_unknown_country(validator.is_valid("CA", "K1A 0B1"), "CA");

    Ok(())
}

#[test]
fn test_table_order_drives_capture() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formats.json");
    fs::write(&path, r######"{ "US": ["#####-####", "#####"] }"######)?;

    let validator = PostalCodeValidator::with_table(FormatTable::from_json_file(&path)?);
    assert_eq!(validator.capture("US", "zip 90210-1234")?, "90210-1234");

    let builtin = PostalCodeValidator::new();
    assert_eq!(builtin.capture("US", "zip 90210-1234")?, "90210");

    Ok(())
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = FormatTable::from_json_file(&path).unwrap_err();
    assert!(matches!(err, PostalCodeError::Io { path: ref p, .. } if p == &path));
}

#[test]
fn test_malformed_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formats.json");
    fs::write(&path, r######"{ "US": "#####" }"######)?;

    let err = FormatTable::from_json_file(&path).unwrap_err();
    assert!(matches!(err, PostalCodeError::Json { .. }));

    fs::write(&path, r######"{ "us": ["#####"] }"######)?;
    let err = FormatTable::from_json_file(&path).unwrap_err();
    assert!(matches!(err, PostalCodeError::InvalidCountryCode { .. }));

    Ok(())
}
