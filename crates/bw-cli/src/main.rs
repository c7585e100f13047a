//! CLI frontend for the Blockwright block tools.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::convert::Schema;

#[derive(Parser)]
#[command(
    name = "bw",
    about = "Blockwright — rotate and convert map blocks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log what each operation does (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate exterior blocks by a quarter-turn step
    Rotate {
        /// Schema A block documents to rotate
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Rotation step: 0 = 90°, 1 = 180°, 2 = 270°
        #[arg(short, long)]
        step: i64,

        /// Directory to write `<new name>.json` files into (default: stdout)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Also rotate models and flats inside building lots
        #[arg(long)]
        detail_bodies: bool,
    },

    /// Convert a block document between the nested and flat schemas
    Convert {
        /// Block document to convert
        input: PathBuf,

        /// Target schema
        #[arg(short, long, value_enum)]
        to: Schema,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with merchant override settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize a block document in either schema
    Inspect {
        /// Block document to inspect
        input: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Rotate {
            inputs,
            step,
            out_dir,
            detail_bodies,
        } => commands::rotate::run(&inputs, step, out_dir.as_deref(), detail_bodies),
        Commands::Convert {
            input,
            to,
            output,
            config,
        } => commands::convert::run(&input, to, output.as_deref(), config.as_deref()),
        Commands::Inspect { input } => commands::inspect::run(&input),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
