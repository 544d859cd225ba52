// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lurebox - a honeypot conversational agent for scam intelligence.
//!
//! This is the binary entry point.

mod serve;

use clap::{Parser, Subcommand};

/// Lurebox - a honeypot conversational agent for scam intelligence.
#[derive(Parser, Debug)]
#[command(name = "lurebox", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the honeypot agent server.
    Serve,
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match lurebox_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            lurebox_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        Some(Commands::Serve) | None => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
