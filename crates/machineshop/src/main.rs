//! Command-line tool for inspecting and editing the quote configuration.

mod commands;

use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line options for the config tool.
#[derive(Parser)]
#[command(name = "machineshop", version, about = "Machine Shop quote configuration")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, default_value = machineshop_config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the built-in defaults to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the value at a dotted path, e.g. `materials.pla.price_per_kg`
    Get { path: String },
    /// Set the value at a dotted path and save; VALUE is parsed as JSON
    Set { path: String, value: String },
    /// List materials
    Materials,
    /// List printers
    Printers {
        /// Only printers that are enabled for quoting
        #[arg(long)]
        enabled: bool,
    },
    /// List post-processing options
    PostProcessing {
        /// Only options that are enabled for quoting
        #[arg(long)]
        enabled: bool,
    },
    /// List print-quality presets
    Qualities,
    /// Show the pricing block
    Pricing,
    /// Fill keys missing from the config file with the defaults and save
    MergeDefaults,
}

fn main() -> anyhow::Result<ExitCode> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    info!("using config file {}", cli.config.display());

    let mut out = io::stdout().lock();
    let path = cli.config.as_path();
    match cli.command {
        Command::Init { force } => commands::init(path, force, &mut out)?,
        Command::Get { path: key } => {
            if !commands::get(path, &key, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Set { path: key, value } => commands::set(path, &key, &value, &mut out)?,
        Command::Materials => commands::materials(path, &mut out)?,
        Command::Printers { enabled } => commands::printers(path, enabled, &mut out)?,
        Command::PostProcessing { enabled } => commands::post_processing(path, enabled, &mut out)?,
        Command::Qualities => commands::qualities(path, &mut out)?,
        Command::Pricing => commands::pricing(path, &mut out)?,
        Command::MergeDefaults => commands::merge_defaults(path, &mut out)?,
    }
    Ok(ExitCode::SUCCESS)
}
