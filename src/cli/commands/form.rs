//! Form command - validate sign-up forms stored as JSON

use anyhow::Context;
use log::debug;

use super::input;
use crate::cli::app::FormKind;
use easycut::config::Config;
use easycut::form::{BarbershopForm, ClientForm};
use easycut::output::OutputMode;

/// Validate a client or barbershop form
pub fn form(kind: FormKind, config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let validator = config.form_validator();

    let report = match kind {
        FormKind::Client { file } => {
            let content = input::read_source(&file)?;
            let form: ClientForm = serde_json::from_str(&content)
                .with_context(|| format!("parsing client form {}", file.display()))?;
            validator.validate_client(&form)
        },
        FormKind::Barbershop { file } => {
            let content = input::read_source(&file)?;
            let form: BarbershopForm = serde_json::from_str(&content)
                .with_context(|| format!("parsing barbershop form {}", file.display()))?;
            validator.validate_barbershop(&form)
        },
    };

    debug!("form report: {} error(s), {} warning(s)", report.errors.len(), report.warnings.len());
    report.render(mode).context("rendering form report")?;
    Ok(report.is_valid)
}
