//! ScTex CLI - Command-line interface for SC texture tools

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "sctex")]
#[command(about = "ScTex: SuperCell texture (_tex.sc) decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the ScTex CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
