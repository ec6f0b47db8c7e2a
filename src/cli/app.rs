//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use super::commands;
use easycut::config::Config;
use easycut::output::OutputMode;

/// easycut - Brazilian registration field validators
#[derive(Parser, Debug)]
#[command(
    name = "easycut",
    version,
    about = "Validate CPF/CNPJ, phone numbers, e-mail and sign-up forms",
    long_about = "Validate the fields of Brazilian sign-up forms.\n\n\
                  CPF and CNPJ numbers are checked against their check digits,\n\
                  phone numbers against the national layout and area codes.\n\
                  Pass '-' as the only input to read one entry per line from stdin."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/easycut/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate CPF numbers
    Cpf {
        /// CPFs to validate, with or without punctuation
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Validate CNPJ numbers
    Cnpj {
        /// CNPJs to validate, with or without punctuation
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Validate CPF or CNPJ numbers, detected by digit count
    Document {
        /// Documents to validate
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print the canonical punctuation of a CPF or CNPJ
    Format {
        /// Document to format
        input: String,
    },

    /// Validate Brazilian phone numbers
    Phone {
        /// Phone numbers to validate
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Validate e-mail addresses
    Email {
        /// Addresses to validate
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Validate a sign-up form stored as JSON
    Form {
        #[command(subcommand)]
        kind: FormKind,
    },

    /// Show version
    Version,
}

/// Forms that can be validated
#[derive(Subcommand, Debug)]
pub enum FormKind {
    /// Client sign-up form
    Client {
        /// JSON file with the form fields ('-' for stdin)
        file: PathBuf,
    },

    /// Barbershop sign-up form
    Barbershop {
        /// JSON file with the form fields ('-' for stdin)
        file: PathBuf,
    },
}

/// Run the CLI
///
/// Returns whether every validated entry was valid.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if output_mode == OutputMode::Json || !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Cpf { inputs }) => commands::cpf(inputs, output_mode),
        Some(Command::Cnpj { inputs }) => commands::cnpj(inputs, output_mode),
        Some(Command::Document { inputs }) => commands::document(inputs, output_mode),
        Some(Command::Format { input }) => commands::format(&input, output_mode),
        Some(Command::Phone { inputs }) => commands::phone(inputs, &config, output_mode),
        Some(Command::Email { inputs }) => commands::email(inputs, output_mode),
        Some(Command::Form { kind }) => commands::form(kind, &config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": easycut::VERSION
                    })
                );
            } else {
                println!("easycut v{}", easycut::VERSION);
            }
            Ok(true)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": easycut::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("easycut v{}", easycut::VERSION);
                println!("\nRun 'easycut --help' for usage");
                println!("Run 'easycut document <CPF or CNPJ>' to validate a document");
            }
            Ok(true)
        },
    }
}
