mod app;
mod build;
mod config;
mod languages;
mod logging;
mod syntax;

use std::{path::PathBuf, process::ExitCode};

use app::{App, Command};
use clap::Parser;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "highlight-build", version, about = "Bundles and inspects syntax highlighting language definitions")]
struct Cli {
    /// Path to the config file [default: ./highlight-build.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::initialize(cli.verbose);

    let result = App::new(cli.config.as_deref()).and_then(|app| app.run(cli.command));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
