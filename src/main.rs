use anyhow::Result;
use clap::{Parser, Subcommand};
use spatial_edge::adapters::config::{JsonConfigProvider, StaticConfigProvider};
use spatial_edge::adapters::engine::HandleEngine;
use spatial_edge::app::service::EdgeService;
use spatial_edge::cli;
use spatial_edge::domain::config::SelectorConfig;
use spatial_edge::domain::ports::ConfigProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

/// spatial-edge - build spatial organization edges with the configured strategy
#[derive(Parser)]
#[command(name = "edgetool")]
#[command(version)]
#[command(about = "Select an edge strategy from configuration and connect space nodes")]
struct Cli {
    /// Selector config JSON file; overrides --native and --debug
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the native edge engine
    #[arg(long, global = true)]
    native: bool,

    /// Request debug edges
    #[arg(long, global = true)]
    debug: bool,

    /// Skip startup validation of the selector config
    #[arg(long, global = true)]
    unchecked: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved selector configuration and strategy
    Check,
    /// Connect every endpoint pair listed in a batch JSON file
    Connect {
        /// Batch file: {"nodes": [{"id", "label"}], "pairs": [{"a", "b"}]}
        batch: PathBuf,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let provider: Box<dyn ConfigProvider> = match &args.config {
        Some(path) => Box::new(JsonConfigProvider::new(path)),
        None => Box::new(StaticConfigProvider::new(SelectorConfig::new(
            args.native,
            args.debug,
        ))),
    };

    let engine = Arc::new(HandleEngine::new());
    let service = if args.unchecked {
        EdgeService::unchecked(provider.as_ref(), engine)?
    } else {
        EdgeService::from_provider(provider.as_ref(), engine)?
    };

    match args.command {
        Commands::Check => cli::display_check(&service),
        Commands::Connect { batch, pretty } => cli::connect_batch(&service, &batch, pretty),
    }
}
