//
//  adacord-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adacord_cli::api::ApiError;
use adacord_cli::cli::{Cli, Commands};
use adacord_cli::exit_codes;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("ADACORD_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::User(cmd) => cmd.run(&cli.global).await,
        Commands::Bucket(cmd) => cmd.run(&cli.global).await,
        Commands::Data(cmd) => cmd.run(&cli.global).await,
        Commands::Token(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", adacord_cli::APP_NAME, adacord_cli::VERSION);
            Ok(())
        }
    }
}

/// A missing local credential gets its own exit code so scripts can tell
/// "log in first" apart from a failed operation.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::Credential(_)) => exit_codes::AUTH_ERROR,
        _ => exit_codes::ERROR,
    }
}
