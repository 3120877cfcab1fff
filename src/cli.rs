//! CLI definitions for vidrows
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be exercised by tests without spawning the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::answer::DurationMode;

/// Build clap styles for consistent CLI appearance.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "vidrows")]
#[command(about = "Flatten video answers from captured search responses into TSV rows")]
#[command(
    long_about = "vidrows reads a tab-separated file of captured search responses
(base64-encoded JSON) and writes one row per YouTube or TikTok result found in
the requested video answer, keyed by the original query.

QUICK START:
    vidrows extract -i scraped.tsv -o videos.tsv             Full video answer, top 10
    vidrows extract -i scraped.tsv -o shorts.tsv -t 1 -n 5   Short video answer, top 5
    vidrows inspect <BASE64>                                 List answer blocks in one response

Logging goes to stderr and is controlled by RUST_LOG (default: vidrows=info)."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging (per-line and per-entry diagnostics)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract video result rows from an input file
    #[command(long_about = "Extract video result rows from a tab-separated input file.

The input header must contain a 'query' column (any case). The response is
read from the 'base64response' column when present, otherwise from the first
column. Lines that fail to decode or lack the requested answer produce a
bare 'query<TAB>' row; the run never stops on a single bad line.

OUTPUT COLUMNS:
    query position Url ChannelPageLink PubUser Title MediaSourceTitle PubDate Length ViewCount

EXAMPLES:
    vidrows extract --input in.tsv --output out.tsv
    vidrows extract --input in.tsv --output out.tsv --video-type 1 --top-n 3
    vidrows extract -i in.tsv -o out.tsv -t 1 --short-durations seconds")]
    Extract {
        /// Input TSV file
        #[arg(long, short)]
        input: PathBuf,
        /// Output TSV file (created or truncated)
        #[arg(long, short)]
        output: PathBuf,
        /// Answer kind: 0 = full video answer, 1 = short video answer
        #[arg(long = "video-type", short = 't', allow_negative_numbers = true)]
        video_type: Option<i64>,
        /// Number of result positions to read per query
        #[arg(long = "top-n", short = 'n')]
        top_n: Option<usize>,
        /// How short-answer durations are written
        #[arg(long = "short-durations", value_enum)]
        short_durations: Option<DurationMode>,
        /// Config file (default: ~/.config/vidrows/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the answer blocks in one captured response
    Inspect {
        /// Base64-encoded response
        #[arg(conflicts_with = "line_file", required_unless_present = "line_file")]
        response: Option<String>,
        /// Read the response from the first data line of an input TSV file
        #[arg(long = "line-file")]
        line_file: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show {
        /// Config file (default: ~/.config/vidrows/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the default config file path
    Path,
}
