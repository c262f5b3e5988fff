//! QStep Command-Line Interface
//!
//! Parse, run and step through small quantum circuits from the terminal.
//!
//! ```text
//! $ qstep run --sample bell
//! → Running Bell State (2 qubits, 2 gates)
//!
//! ✓ Final state:
//!   |00⟩: 0.707 (50.0%)
//!   |11⟩: 0.707 (50.0%)
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::run::OutputFormat;
use commands::{parse, run, samples, version};

/// QStep - step-through statevector simulator
#[derive(Parser)]
#[command(name = "qstep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.qstep/config.yaml when present)
    #[arg(long, global = true, env = "QSTEP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a circuit and print its structure
    Parse {
        /// Circuit source file
        #[arg(required_unless_present = "sample", conflicts_with = "sample")]
        input: Option<String>,

        /// Use a bundled sample instead of a file (bell, teleportation, grover)
        #[arg(short, long)]
        sample: Option<String>,

        /// Print the circuit back as canonical source
        #[arg(long)]
        emit: bool,
    },

    /// Run a circuit gate by gate
    Run {
        /// Circuit source file
        #[arg(required_unless_present = "sample", conflicts_with = "sample")]
        input: Option<String>,

        /// Use a bundled sample instead of a file (bell, teleportation, grover)
        #[arg(short, long)]
        sample: Option<String>,

        /// Pause between gates in milliseconds (overrides configuration)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the state after every gate
        #[arg(long)]
        steps: bool,
    },

    /// List the bundled sample circuits
    Samples,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Parse {
            input,
            sample,
            emit,
        } => parse::execute(input.as_deref(), sample.as_deref(), emit),

        Commands::Run {
            input,
            sample,
            delay_ms,
            format,
            steps,
        } => {
            run::execute(
                input.as_deref(),
                sample.as_deref(),
                cli.config.as_deref(),
                delay_ms,
                format,
                steps,
            )
            .await
        }

        Commands::Samples => samples::execute(),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
