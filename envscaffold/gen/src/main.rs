//! Envscaffold Generator
//!
//! Generates `.env.example` and `config.rs` from an OpenAPI document's
//! security schemes.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use envscaffold_define::GenerationOptions;
use envscaffold_gen::document::read_security_schemes;
use envscaffold_gen::errors::GeneratorError;
use envscaffold_gen::output::{ENV_EXAMPLE_FILE, LOADER_FILE, generate_and_write};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Envscaffold generator - turns API security schemes into server environment config
#[derive(Parser, Debug)]
#[command(name = "envscaffold-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// OpenAPI document (.json, .yaml or .yml) to read security schemes from
    #[arg(short, long)]
    spec: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Include the MCPcat analytics block
    #[arg(long, env = "ENVSCAFFOLD_ANALYTICS")]
    analytics: bool,

    /// Include the OpenTelemetry tracing block
    #[arg(long, env = "ENVSCAFFOLD_TRACING")]
    tracing: bool,

    /// Print generated files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,envscaffold_gen=info".to_string(),
            2 => "info,envscaffold_gen=debug".to_string(),
            _ => "debug,envscaffold_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> Result<(), GeneratorError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    tracing::info!(spec = %cli.spec.display(), output = %cli.output.display(), "starting generation");

    let schemes = read_security_schemes(&cli.spec)?;
    if schemes.is_none() {
        tracing::warn!(spec = %cli.spec.display(), "document declares no security schemes");
    }

    let options = GenerationOptions::new()
        .analytics(cli.analytics)
        .tracing(cli.tracing);

    generate_and_write(schemes.as_ref(), options, &cli.output, cli.dry_run)?;

    if !cli.dry_run {
        for file in [ENV_EXAMPLE_FILE, LOADER_FILE] {
            eprintln!(
                "{} {}",
                "generated".green().bold(),
                cli.output.join(file).display()
            );
        }
    }

    Ok(())
}
