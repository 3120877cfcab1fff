//! vidrows - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidrows::cli::{Cli, Commands, ConfigCommands};
use vidrows::config::ExtractOverrides;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "vidrows=debug" } else { "vidrows=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            input,
            output,
            video_type,
            top_n,
            short_durations,
            config,
        } => {
            let overrides = ExtractOverrides {
                video_type,
                top_n,
                short_durations,
            };
            commands::extract::handle(&input, &output, config.as_deref(), overrides)?;
            Ok(())
        }
        Commands::Inspect {
            response,
            line_file,
        } => commands::inspect::handle(response.as_deref(), line_file.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { config } => commands::config::handle_show(config.as_deref()),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
