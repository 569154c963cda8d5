//
//  adacord-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod bucket;
mod completion;
mod data;
mod token;
mod user;

pub use bucket::BucketCommand;
pub use completion::CompletionCommand;
pub use data::DataCommand;
pub use token::TokenCommand;
pub use user::UserCommand;

use clap::{Parser, Subcommand};

/// Adacord CLI - Work with Adacord data buckets from the command line
#[derive(Parser, Debug)]
#[command(
    name = "adacord",
    version,
    about = "Work with Adacord data buckets from the command line",
    long_about = "adacord is a CLI for the Adacord data bucket service.\n\n\
                  It brings bucket management, data ingestion, SQL queries, and \
                  API token management to your terminal.",
    propagate_version = true,
    after_help = "Use 'adacord <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Authenticate with a literal API token instead of the stored login
    #[arg(long, global = true, env = "ADACORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Builds the API facade for one command invocation.
    ///
    /// A `--token` (or `ADACORD_TOKEN`) bypasses the credential store;
    /// otherwise the stored login credential is resolved on first use.
    pub fn api(&self) -> anyhow::Result<crate::api::AdacordApi> {
        let api = match &self.token {
            Some(token) => crate::api::AdacordApi::with_token(token)?,
            None => crate::api::AdacordApi::new()?,
        };
        Ok(api)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage your account
    User(UserCommand),

    /// Manage buckets
    #[command(visible_alias = "b")]
    Bucket(BucketCommand),

    /// Push and fetch bucket data
    Data(DataCommand),

    /// Manage API tokens
    Token(TokenCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Show version information
    Version,
}
