//! Command line runner for the zoo demos.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "zoo",
    about = "Run the panda and pokemon demos",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file overriding the default sound and primary attack
    #[arg(long, global = true)]
    defaults: Option<PathBuf>,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename a giant panda and let it sneeze
    Panda,

    /// Let a pokemon speak and build two baddies
    Pokemon,

    /// Print what a pokemon says
    Speak {
        /// Sound to make (default: the configured sound)
        sound: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::Settings::load(cli.defaults.as_deref(), &cli.format).and_then(
        |settings| match cli.command {
            None => commands::panda::run(&settings).and_then(|()| commands::pokemon::run(&settings)),
            Some(Commands::Panda) => commands::panda::run(&settings),
            Some(Commands::Pokemon) => commands::pokemon::run(&settings),
            Some(Commands::Speak { sound }) => commands::speak::run(&settings, sound.as_deref()),
        },
    );

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
