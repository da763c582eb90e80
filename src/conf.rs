// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Environment and configuration utilities.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the GitHub API token.
pub const TOKEN_VAR: &str = "GHTOKEN";

/// File of `KEY=value` pairs loaded into the environment at startup.
pub const ENV_FILE: &str = ".env";

/// Program settings gathered from the environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    token: String,
}

impl Settings {
    /// Loads `.env` from the current directory into the environment, then
    /// reads settings from the environment.
    ///
    /// Returns an [`enum@Error`] if `.env` does not exist or cannot be read.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(ENV_FILE)
    }

    /// Loads the env file at `path` into the environment, then reads
    /// settings from the environment.
    ///
    /// Variables that are already set in the environment take precedence
    /// over values in the file.
    ///
    /// Returns an [`enum@Error`] if the file does not exist or cannot be read.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|source| Error::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded environment from {}", path.display());
        Ok(Self::from_env())
    }

    /// Reads settings from the environment only.
    ///
    /// A missing `$GHTOKEN` results in an empty token. GitHub will reject
    /// the request, and that is reported as an HTTP error.
    pub fn from_env() -> Self {
        let token = env::var(TOKEN_VAR).unwrap_or_default();
        if token.is_empty() {
            log::warn!("${TOKEN_VAR} is not set");
        }
        Self { token }
    }

    /// Creates settings with an explicit token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Bearer token used to authenticate with GitHub.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// The env file is missing or malformed.
    #[error("Error loading {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
