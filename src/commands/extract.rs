//! Extract command handler

use std::path::Path;

use anyhow::Result;
use tracing::info;

use vidrows::config::ExtractOverrides;
use vidrows::{Config, ExtractSummary, Extraction};

/// Human-readable size of the written output, or "?" if it cannot be read.
fn output_size(path: &Path) -> String {
    std::fs::metadata(path)
        .map(|meta| humansize::format_size(meta.len(), humansize::BINARY))
        .unwrap_or_else(|_| "?".to_string())
}

/// Handle the extract command.
///
/// Resolves options from the config file and CLI overrides, runs the
/// extraction, and reports the summary on stderr.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: ExtractOverrides,
) -> Result<ExtractSummary> {
    let config = Config::load_or_default(config_path)?;
    let options = config.extract_options(overrides)?;
    info!(
        video_type = options.video_type,
        top_n = options.top_n,
        short_durations = ?options.short_durations,
        "extracting video answers"
    );

    let summary = Extraction::new(options).run(input, output)?;

    info!(
        lines_read = summary.lines_read,
        lines_with_results = summary.lines_with_results,
        lines_without_answer = summary.lines_without_answer,
        lines_failed = summary.lines_failed,
        rows_written = summary.rows_written,
        "extraction finished"
    );
    eprintln!(
        "{} -> {} ({})",
        summary.summary(),
        output.display(),
        output_size(output)
    );
    Ok(summary)
}
