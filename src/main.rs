//! AppForge - natural-language mobile app generator.
//!
//! Command-line entry point: generate apps from descriptions, modify
//! previously generated apps, inspect classification, and serve the HTTP
//! API for the web frontend.

use appforge::cli;
use appforge::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};

/// AppForge - generate React Native apps from natural language
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new app from a natural-language description
    Generate(cli::GenerateArgs),
    /// Modify a previously generated app
    Modify(cli::ModifyArgs),
    /// Classify a request without generating an app
    Classify(cli::ClassifyArgs),
    /// Start the web API server
    #[cfg(feature = "web")]
    Serve(cli::ServeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Modify(args) => args.execute(),
        Command::Classify(args) => args.execute(),
        #[cfg(feature = "web")]
        Command::Serve(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
