use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use library_catalog::{Catalog, Config, Shell};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Start-up and session events
    Info,
    /// Every menu action
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level
    fn to_filter_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Command-line arguments for the library catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; built-in defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with an empty catalog instead of the seed books
    #[arg(long)]
    no_seed: bool,

    /// Do not wait for Enter after each menu action
    #[arg(long)]
    no_pause: bool,

    /// Disable coloured success and failure messages
    #[arg(long)]
    no_color: bool,

    /// Log verbosity; falls back to RUST_LOG, then to warn
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

/// Install the stderr log subscriber
fn init_logging(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_filter_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Resolve the effective configuration: file (or defaults), then CLI flags
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if args.no_seed {
        config.seed_books.clear();
    }
    if args.no_pause {
        config.pause_after_action = false;
    }
    if args.no_color {
        config.color = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    let config = resolve_config(&args)?;
    if !config.color {
        colored::control::set_override(false);
    }

    let mut catalog = Catalog::new();
    let seeded = config.seed(&mut catalog);
    info!(seeded, "Catalog seeded");

    let mut shell = Shell::with_config(io::stdin().lock(), io::stdout().lock(), &config);
    if config.show_banner {
        shell.banner().context("Failed to write the banner")?;
    }
    shell.run(&mut catalog).context("Interactive session failed")?;

    info!(total = catalog.total_count(), "Session ended");
    Ok(())
}
