//! Limebyte CLI
//!
//! Command-line interface for the blog store backup/restore engine

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "limebyte")]
#[command(about = "Limebyte - blog store backup and restore", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize a database (create schema and bootstrap rows)
    Init(commands::init::InitArgs),
    /// Export the database to a snapshot JSON file
    Export(commands::export::ExportArgs),
    /// Import a snapshot JSON file into the database
    Import(commands::import::ImportArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Import(args) => commands::import::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
