//! Shared entry point of the three variant executables.

use crate::binding::{self, SafeArithmetic, Variant};
use crate::config::{Config, LibraryConfig, OutputFormat};
use crate::report::Report;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Print the magic number and its overflow-checked sum and difference")]
pub struct Cli {
    /// Path to config file [default: safe-arith.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format override
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Shared library to load (dynamic variant only)
    #[arg(long)]
    pub library: Option<PathBuf>,
}

/// Log to stderr so stdout carries only the report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("safe_arith=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Binds `variant` from the library crate.
pub fn run(variant: Variant) -> Result<()> {
    run_with(variant, binding::bind)
}

/// Like [`run`], with the caller supplying the binding.
pub fn run_with<F>(variant: Variant, bind: F) -> Result<()>
where
    F: FnOnce(Variant, &LibraryConfig) -> crate::error::Result<Box<dyn SafeArithmetic>>,
{
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = execute_with(variant, &cli, bind)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Bind, collect and render without touching the process's stdout.
pub fn execute(variant: Variant, cli: &Cli) -> Result<String> {
    execute_with(variant, cli, binding::bind)
}

pub fn execute_with<F>(variant: Variant, cli: &Cli, bind: F) -> Result<String>
where
    F: FnOnce(Variant, &LibraryConfig) -> crate::error::Result<Box<dyn SafeArithmetic>>,
{
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(path) = &cli.library {
        config.library.path = Some(path.clone());
    }
    if variant != Variant::Dynamic && cli.library.is_some() {
        tracing::warn!(%variant, "--library is ignored by this variant");
    }
    let format = cli.format.unwrap_or(config.output.format);

    let lib = bind(variant, &config.library)
        .with_context(|| format!("failed to bind the {variant} library"))?;
    let report = Report::collect(variant, lib.as_ref());
    Ok(report.render(format)?)
}
