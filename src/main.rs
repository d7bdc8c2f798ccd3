//! Postal code CLI application.
//!
//! This binary exposes the postcode library on the command line: validate
//! a single code, search free text for one, or inspect the format table.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use postcode::{FormatTable, PostalCodeError, PostalCodeValidator};

/// Postal code validation tool
///
/// Validate, search for, and extract postal codes by ISO 3166-1 alpha-2
/// country code.
#[derive(Parser)]
#[command(name = "postcode")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON format table to use instead of the built-in one
    #[arg(long, value_name = "FILE", global = true)]
    table: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a string is exactly a postal code of the country
    Validate {
        /// Country code, e.g. US
        country: String,

        /// Postal code to check
        postal_code: String,
    },

    /// Check whether text contains a postal code of the country
    Contains {
        /// Country code, e.g. US
        country: String,

        #[command(flatten)]
        text: TextSource,
    },

    /// Print the first postal code of the country found in text
    Capture {
        /// Country code, e.g. US
        country: String,

        #[command(flatten)]
        text: TextSource,
    },

    /// List the postal code formats of a country
    Formats {
        /// Country code, e.g. US
        country: String,
    },

    /// List all covered countries
    Countries,
}

/// Text to search: inline, from a file, or from stdin.
#[derive(Args)]
struct TextSource {
    /// Text to search (reads stdin when neither TEXT nor --input is given)
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Read the text to search from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

impl TextSource {
    fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.input {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }

        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    }
}

/// Exit status for a lookup that ran but found nothing.
const NO_MATCH: u8 = 1;
/// Exit status for a country code missing from the table.
const UNKNOWN_COUNTRY: u8 = 2;

/// Command handler holding the configured validator.
struct PostcodeHandler {
    validator: PostalCodeValidator,
    verbose: bool,
}

impl PostcodeHandler {
    fn new(table: Option<&Path>, verbose: bool) -> Result<Self> {
        let validator = match table {
            Some(path) => {
                let table = FormatTable::from_json_file(path)
                    .with_context(|| format!("Failed to load format table {}", path.display()))?;
                PostalCodeValidator::with_table(table)
            }
            None => PostalCodeValidator::new(),
        };

        Ok(Self { validator, verbose })
    }

    fn validate(&self, country: &str, postal_code: &str) -> Result<bool> {
        let valid = self.validator.is_valid(country, postal_code)?;

        if valid {
            println!("✓ \"{}\" is a valid {} postal code", postal_code, country);
        } else {
            println!("✗ \"{}\" is not a valid {} postal code", postal_code, country);
            if self.verbose {
                self.print_formats(country)?;
            }
        }

        Ok(valid)
    }

    fn contains(&self, country: &str, text: &str) -> Result<bool> {
        let found = self.validator.contains(country, text)?;

        if found {
            println!("✓ Text contains a {} postal code", country);
        } else {
            println!("⚠ No {} postal code found", country);
        }

        Ok(found)
    }

    fn capture(&self, country: &str, text: &str) -> Result<bool> {
        let code = self.validator.capture(country, text)?;

        if code.is_empty() {
            if self.verbose {
                eprintln!("⚠ No {} postal code found", country);
            }
            return Ok(false);
        }

        println!("{}", code);
        Ok(true)
    }

    fn print_formats(&self, country: &str) -> Result<()> {
        let name = self.validator.country_name(country)?;
        let formats = self.validator.get_formats(country)?;

        println!("{} ({})", name, country);
        if formats.is_empty() {
            println!("  (no postal code format, any value accepted)");
        }
        for format in formats {
            println!("  {:<12} e.g. {}", format.as_str(), format.sample());
        }

        Ok(())
    }

    fn print_countries(&self) {
        for country in self.validator.countries() {
            println!("{}  {}", country.code(), country.name());
        }
        if self.verbose {
            let table = self.validator.table();
            println!(
                "\n{} countries, {} formats",
                table.len(),
                table.format_count()
            );
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("postcode={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let handler = PostcodeHandler::new(cli.table.as_deref(), cli.verbose)?;

    let matched = match &cli.command {
        Commands::Validate {
            country,
            postal_code,
        } => handler.validate(country, postal_code)?,
        Commands::Contains { country, text } => handler.contains(country, &text.read()?)?,
        Commands::Capture { country, text } => handler.capture(country, &text.read()?)?,
        Commands::Formats { country } => {
            handler.print_formats(country)?;
            true
        }
        Commands::Countries => {
            handler.print_countries();
            true
        }
    };

    Ok(if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(NO_MATCH)
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            match err.downcast_ref::<PostalCodeError>() {
                Some(PostalCodeError::UnknownCountry { .. }) => ExitCode::from(UNKNOWN_COUNTRY),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
