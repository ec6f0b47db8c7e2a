//! Command input collection

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

use anyhow::Context;

/// Expand a lone `-` into the non-empty lines of stdin
pub fn collect(inputs: Vec<String>) -> anyhow::Result<Vec<String>> {
    if inputs.len() == 1 && inputs[0] == "-" {
        return read_lines(io::stdin().lock());
    }
    Ok(inputs)
}

fn read_lines(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Read a whole file, or stdin when the path is `-`
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).context("reading stdin")?;
        return Ok(content);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
