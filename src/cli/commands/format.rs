//! Format command - canonical CPF/CNPJ punctuation

use anyhow::Context;

use easycut::document::{self, DocumentType};
use easycut::output::{FormatResult, OutputMode};

/// Print the canonical punctuation of a document
///
/// Succeeds only when the input has a CPF or CNPJ digit count; check digits
/// are not verified.
pub fn format(input: &str, mode: OutputMode) -> anyhow::Result<bool> {
    let result = FormatResult {
        input: input.to_string(),
        formatted: document::format_document(input),
        document_type: document::document_type(input),
    };
    result.render(mode).context("rendering formatted document")?;
    Ok(result.document_type != DocumentType::Unknown)
}
