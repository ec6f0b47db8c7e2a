//! Output formatting for human and JSON modes
//!
//! Validation outcomes are rendered either as one status line per input or
//! as machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::document::{DocumentType, ValidationResult};
use crate::email::EmailResult;
use crate::form::{FormReport, api_response};
use crate::phone::PhoneResult;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A single validation outcome that can be listed in a [`Batch`]
pub trait Outcome: Serialize {
    /// Whether the input passed
    fn is_valid(&self) -> bool;

    /// Outcome message
    fn message(&self) -> &str;

    /// Canonical value shown next to a valid input
    fn display_value(&self) -> Option<String>;

    /// Extra lines shown under a rejected input
    fn notes(&self) -> Vec<String> {
        Vec::new()
    }
}

impl Outcome for ValidationResult {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn display_value(&self) -> Option<String> {
        self.formatted
            .as_ref()
            .map(|formatted| format!("{formatted} ({})", self.document_type))
    }

    fn notes(&self) -> Vec<String> {
        if self.is_valid {
            return Vec::new();
        }
        self.details
            .iter()
            .map(|d| {
                format!(
                    "check digits: expected {}, got {}",
                    d.calculated_digits, d.provided_digits
                )
            })
            .collect()
    }
}

impl Outcome for PhoneResult {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn display_value(&self) -> Option<String> {
        self.whatsapp
            .as_ref()
            .map(|whatsapp| format!("{} ({}, {whatsapp})", self.formatted, self.phone_type))
    }
}

impl Outcome for EmailResult {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn display_value(&self) -> Option<String> {
        self.normalized.clone()
    }
}

/// One validated input
#[derive(Debug, Serialize)]
pub struct Entry<T> {
    /// Input as supplied
    pub input: String,
    /// Validation outcome
    #[serde(flatten)]
    pub result: T,
}

/// Outcomes for every input of one command
#[derive(Debug, Serialize)]
pub struct Batch<T> {
    /// Every input passed
    pub all_valid: bool,
    /// Outcomes in input order
    pub results: Vec<Entry<T>>,
}

impl<T: Outcome> Batch<T> {
    /// Collect `(input, outcome)` pairs
    #[must_use]
    pub fn new(results: Vec<(String, T)>) -> Self {
        let all_valid = results.iter().all(|(_, result)| result.is_valid());
        Self {
            all_valid,
            results: results
                .into_iter()
                .map(|(input, result)| Entry { input, result })
                .collect(),
        }
    }

    /// Render the batch based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("Nothing to validate.");
            return;
        }

        for entry in &self.results {
            let result = &entry.result;
            if result.is_valid() {
                let value = result.display_value().unwrap_or_default();
                println!("{} {}  {value}", "✓".green(), entry.input);
            } else {
                println!("{} {}  {}", "✗".red(), entry.input, result.message());
                for note in result.notes() {
                    println!("    {note}");
                }
            }
        }
    }
}

/// Result of the `format` command
#[derive(Debug, Serialize)]
pub struct FormatResult {
    /// Input as supplied
    pub input: String,
    /// Formatted document, or the input when it has the wrong digit count
    pub formatted: String,
    /// Type detected from the digit count
    pub document_type: DocumentType,
}

impl FormatResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                println!("{}", self.formatted);
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl FormReport {
    /// Render the report based on output mode
    ///
    /// JSON mode prints the same envelope the web API returns.
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(&api_response(self)),
        }
    }

    fn render_human(&self) {
        if self.is_valid {
            println!("{} Form is valid.", "✓".green());
        } else {
            println!("{} Form contains {} error(s):", "✗".red(), self.errors.len());
            for error in &self.errors {
                println!("  - {error}");
            }
        }

        if !self.warnings.is_empty() {
            println!("Warnings:");
            for warning in &self.warnings {
                println!("  - {}", warning.yellow());
            }
        }

        if self.is_valid {
            for (key, value) in &self.validated_data {
                match value.as_str() {
                    Some(text) => println!("  {key}: {text}"),
                    None => println!("  {key}: {value}"),
                }
            }
        }
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
