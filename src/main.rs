//! acsym CLI - asset catalog symbol generator
//!
//! Usage: acsym <COMMAND>
//!
//! Commands:
//!   generate  Generate symbol files from the asset catalog
//!   check     Verify generated files are current
//!   list      List catalog assets and their symbols

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::Session;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "ACSYM_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command, cli.config.as_deref(), cli.json, cli.verbose) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let supports_color = ui::terminal::detect_capabilities().supports_color;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(supports_color)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run(
    command: Commands,
    config: Option<&std::path::Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    match command {
        Commands::Generate { input, dry_run } => {
            let session = Session::load(config, &input, json)?;
            commands::generate::cmd_generate(&session, dry_run, json)
        }
        Commands::Check { input } => {
            let session = Session::load(config, &input, json)?;
            commands::check::cmd_check(&session, json, verbose)
        }
        Commands::List { input } => {
            let session = Session::load(config, &input, json)?;
            commands::list::cmd_list(&session, json)
        }
    }
}
