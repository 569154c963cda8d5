//
//  adacord-cli
//  auth/store.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Credential Store Module
//!
//! This module persists the login credential obtained from `adacord user
//! login` and supplies it to the API client on demand.
//!
//! ## Storage Format
//!
//! Credentials are stored as a small JSON document, `auth.json`, under the
//! per-user configuration directory:
//!
//! - Linux: `~/.config/adacord/auth.json`
//! - macOS: `~/Library/Application Support/adacord/auth.json`
//! - Windows: `%APPDATA%\adacord\auth.json`
//!
//! The document carries the e-mail the user logged in with and the bearer
//! token returned by the login endpoint:
//!
//! ```json
//! {"email": "dev@example.com", "token": "eyJhbGciOi..."}
//! ```
//!
//! ## Error Handling
//!
//! A store that is missing or unreadable produces a [`CredentialError`],
//! which the API layer keeps distinct from any server-reported failure: a
//! user who never logged in gets a local configuration error, not a 401.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the stored credential document.
const AUTH_FILE: &str = "auth.json";

/// Errors produced when a credential cannot be resolved locally.
///
/// These are local configuration problems. They are never raised for
/// remote failures — an expired or revoked token surfaces later as an
/// authentication error from the server.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// No credential file exists; the user has not logged in.
    #[error("no stored credentials found, run 'adacord user login' first")]
    Missing,

    /// The credential file exists but does not parse as the expected JSON.
    #[error("stored credentials are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The credential file could not be read or written.
    #[error("could not access credential store: {0}")]
    Io(#[from] std::io::Error),

    /// No per-user configuration directory could be determined.
    #[error("could not determine a configuration directory for this user")]
    NoConfigDir,
}

/// The persisted credential: the login e-mail and its bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// E-mail address the user logged in with.
    pub email: String,
    /// Bearer token returned by the login endpoint.
    pub token: String,
}

/// Reads and writes the local credential file.
///
/// The store is a thin path wrapper; every operation touches the file
/// directly so that concurrent CLI invocations always observe the latest
/// login.
///
/// # Example
///
/// ```rust,no_run
/// use adacord_cli::auth::{CredentialStore, Credentials};
///
/// let store = CredentialStore::from_config_dir()?;
/// store.save(&Credentials {
///     email: "dev@example.com".to_string(),
///     token: "secret".to_string(),
/// })?;
/// assert_eq!(store.token()?, "secret");
/// # Ok::<(), adacord_cli::auth::CredentialError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default per-user configuration location.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NoConfigDir`] when no home directory can
    /// be resolved for the current user.
    pub fn from_config_dir() -> Result<Self, CredentialError> {
        let dirs = ProjectDirs::from("com", "adacord", crate::APP_NAME)
            .ok_or(CredentialError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(AUTH_FILE)))
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a credential file exists at the store's path.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the stored credentials.
    ///
    /// # Errors
    ///
    /// - [`CredentialError::Missing`] when no file exists
    /// - [`CredentialError::Corrupt`] when the file is not valid JSON of
    ///   the expected shape
    /// - [`CredentialError::Io`] for any other read failure
    pub fn load(&self) -> Result<Credentials, CredentialError> {
        if !self.exists() {
            return Err(CredentialError::Missing);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persists credentials, creating parent directories as needed.
    pub fn save(&self, credentials: &Credentials) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Removes the stored credentials, if any.
    pub fn clear(&self) -> Result<(), CredentialError> {
        if self.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Convenience accessor for the stored bearer token.
    pub fn token(&self) -> Result<String, CredentialError> {
        Ok(self.load()?.token)
    }
}
