//! Inspect command handler

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

use vidrows::answer::{answer_services, ServiceSummary};
use vidrows::decode_response;
use vidrows::extract::InputHeader;

/// Read the response cell of the first data line in a TSV file.
fn first_response(path: &Path) -> Result<String> {
    let file =
        fs::File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    let mut lines = BufReader::new(file).lines();

    let header_line = lines
        .next()
        .context("Input file is empty")?
        .context("Failed to read header line")?;
    let header = InputHeader::parse(&header_line)?;

    for line in lines {
        let line = line.context("Failed to read data line")?;
        if line.trim().is_empty() {
            continue;
        }
        return match line.split('\t').nth(header.layout.response) {
            Some(cell) => Ok(cell.to_string()),
            None => bail!("First data line has no response column"),
        };
    }
    bail!("Input file has no data lines")
}

/// Format one answer block for display.
pub fn describe(service: &ServiceSummary) -> String {
    let name = service.name.as_deref().unwrap_or("<unnamed>");
    match (service.kind, service.result_count) {
        (Some(kind), Some(count)) => format!("{} [{} video answer, {} results]", name, kind, count),
        (Some(kind), None) => format!("{} [{} video answer, results unreadable]", name, kind),
        (None, _) => name.to_string(),
    }
}

/// Handle the inspect command.
#[cfg(not(tarpaulin_include))]
pub fn handle(response: Option<&str>, line_file: Option<&Path>) -> Result<()> {
    let encoded = match (response, line_file) {
        (Some(response), _) => response.to_string(),
        (None, Some(path)) => first_response(path)?,
        (None, None) => bail!("Provide a base64 response or --line-file"),
    };

    let decoded = decode_response(&encoded).context("Failed to decode response")?;
    let services = answer_services(&decoded).context("Response has no answer list")?;

    if services.is_empty() {
        println!("No answer blocks found.");
        return Ok(());
    }

    println!("Answer blocks:");
    for (index, service) in services.iter().enumerate() {
        println!("  {:>2}. {}", index, describe(service));
    }
    Ok(())
}
