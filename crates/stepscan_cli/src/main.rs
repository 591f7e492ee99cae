//! stepscan CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stepscan_cli::commands;
use stepscan_cli::config::{CliConfig, OutputFormat, ScanOverrides};
use stepscan_cli::{CliError, Result};

/// Fixed-step sign-change root scanner
#[derive(Parser)]
#[command(name = "stepscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "stepscan.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported functions
    List,

    /// Draw the curve of a function
    Plot {
        /// Function name, label or short id (e.g. "x^2 - 4", "f1")
        function: String,

        /// Output format (table, json, tui)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Scan a function for its first sign change
    Solve {
        /// Function name, label or short id (e.g. "x^2 - 4", "f1")
        function: String,

        /// Output format (table, json, tui)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// First abscissa of the scan
        #[arg(long, allow_hyphen_values = true)]
        start: Option<f64>,

        /// Distance between samples
        #[arg(long)]
        step: Option<f64>,

        /// Length of the scanned interval
        #[arg(long)]
        range: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Solve {
            start, step, range, ..
        } => ScanOverrides {
            start: *start,
            step: *step,
            range: *range,
        },
        _ => ScanOverrides::default(),
    };
    let config =
        CliConfig::load_with_env_and_validate(&cli.config, &overrides).map_err(CliError::from)?;

    init_tracing(&config, cli.verbose);
    debug!("Configuration: {:?}", config);
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    run(cli.command, &config)?;
    Ok(())
}

fn run(command: Commands, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout().lock();
    match command {
        Commands::List => commands::list::run(stdout),
        Commands::Plot { function, format } => {
            commands::plot::run(&function, config, format.unwrap_or(config.format), stdout)
        }
        Commands::Solve {
            function, format, ..
        } => commands::solve::run(&function, config, format.unwrap_or(config.format), stdout)
            .map(|_| ()),
    }
}

/// Log to stderr so table and JSON output stay clean on stdout.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
