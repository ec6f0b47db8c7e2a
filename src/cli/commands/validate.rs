//! Field validation commands

use anyhow::Context;
use log::info;

use super::input;
use easycut::config::Config;
use easycut::document;
use easycut::email;
use easycut::output::{Batch, Outcome, OutputMode};

/// Validate CPFs
pub fn cpf(inputs: Vec<String>, mode: OutputMode) -> anyhow::Result<bool> {
    run(inputs, mode, document::validate_cpf)
}

/// Validate CNPJs
pub fn cnpj(inputs: Vec<String>, mode: OutputMode) -> anyhow::Result<bool> {
    run(inputs, mode, document::validate_cnpj)
}

/// Validate CPFs or CNPJs, detected by digit count
pub fn document(inputs: Vec<String>, mode: OutputMode) -> anyhow::Result<bool> {
    run(inputs, mode, document::validate_document)
}

/// Validate phone numbers with the configured area codes
pub fn phone(inputs: Vec<String>, config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let validator = config.phone_validator();
    run(inputs, mode, |raw| validator.validate(raw))
}

/// Validate e-mail addresses
pub fn email(inputs: Vec<String>, mode: OutputMode) -> anyhow::Result<bool> {
    run(inputs, mode, email::validate_email)
}

fn run<T, F>(inputs: Vec<String>, mode: OutputMode, validate: F) -> anyhow::Result<bool>
where
    T: Outcome,
    F: Fn(&str) -> T,
{
    let inputs = input::collect(inputs)?;
    let results = inputs
        .into_iter()
        .map(|raw| {
            let result = validate(&raw);
            (raw, result)
        })
        .collect();
    finish(&Batch::new(results), mode)
}

fn finish<T: Outcome>(batch: &Batch<T>, mode: OutputMode) -> anyhow::Result<bool> {
    let invalid = batch.results.iter().filter(|e| !e.result.is_valid()).count();
    info!("validated {} input(s), {invalid} invalid", batch.results.len());
    batch.render(mode).context("rendering results")?;
    Ok(batch.all_valid)
}
