//
//  adacord-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Adacord CLI Library
//!
//! Core library behind the `adacord` CLI: a typed client for the Adacord
//! data bucket service plus the command, output, and credential plumbing
//! around it.
//!
//! ## Overview
//!
//! Adacord buckets accept rows of structured data and answer SQL-like
//! queries. This crate lets you manage the full resource hierarchy from
//! the terminal or from Rust code: accounts, buckets, API tokens, data
//! ingestion, and queries.
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP transport, resource clients, and the [`api::AdacordApi`]
//!   facade
//! - [`auth`]: bearer-token authenticator and the local credential store
//! - [`cli`]: command definitions using clap
//! - [`output`]: output formatting (tables and JSON)
//! - [`util`]: small display helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use adacord_cli::api::AdacordApi;
//!
//! # async fn example() -> Result<(), adacord_cli::api::ApiError> {
//! let api = AdacordApi::new()?;
//! for bucket in api.buckets().list().await? {
//!     println!("{}\t{}", bucket.uuid, bucket.name);
//! }
//! # Ok(())
//! # }
//! ```

/// API client for the Adacord service.
///
/// Transport, error taxonomy, resource clients (users, buckets, API
/// tokens), and the facade composing them.
pub mod api;

/// Authentication and credential management.
///
/// The resolve-once bearer authenticator and the `auth.json` credential
/// store written by `adacord user login`.
pub mod auth;

/// Command-line interface definitions.
///
/// All CLI commands and arguments defined with the clap derive API; each
/// command module handles execution of its own subcommands.
pub mod cli;

/// Output formatting for different modes.
///
/// Human-readable tables for interactive use and JSON for scripting.
pub mod output;

/// Small shared display helpers.
pub mod util;

pub use api::AdacordApi;
pub use cli::Cli;

/// Application name constant, used for display and configuration paths.
pub const APP_NAME: &str = "adacord";

/// Application version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Scripts can rely on these to detect the outcome of an invocation:
/// `0` success, `1` general error, `4` a local credential problem that
/// `adacord user login` would fix.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error; details on stderr.
    pub const ERROR: i32 = 1;

    /// No usable credential; the user needs to log in.
    pub const AUTH_ERROR: i32 = 4;
}
