// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::conf::{self, Settings};
use crate::count::EventTable;
use crate::github::client::{self, EventSource};
use crate::github::service::{GitHubService, Service};
use crate::report::Report;
use crate::view::Viewable;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::process;
use thiserror::Error;

/// Prints `message` to standard error and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Answers the question, \"What has a GitHub user been up to lately?\"", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// GitHub username
    username: String,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// An error that ends the program.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] conf::Error),

    /// Events could not be retrieved.
    #[error(transparent)]
    Client(#[from] client::Error),
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner<S> {
    config: Config,
    source: EventSource<S>,
}

impl Runner<GitHubService> {
    /// Create a new program runner using the given `config` and `settings`.
    ///
    /// Returns an error if an HTTP client cannot be created.
    pub fn new(config: Config, settings: Settings) -> Result<Self, Error> {
        let source = EventSource::new(settings.token())?;
        Ok(Self::with_source(config, source))
    }
}

impl<S: Service> Runner<S> {
    /// Create a new program runner that reads events from `source`.
    pub fn with_source(config: Config, source: EventSource<S>) -> Self {
        Self { config, source }
    }

    /// Fetches, counts, and summarizes the user's events.
    pub async fn report(&self) -> Result<Report, Error> {
        let events = self.source.events(self.config.username()).await?;
        let table = EventTable::from_events(&events);
        Ok(Report::for_table(&table))
    }

    /// Run the command-line program using its stored configuration options.
    pub async fn run(&self) -> Result<(), Error> {
        let report = self.report().await?;
        println!("{}", report.view());
        Ok(())
    }
}

/// Loads settings and runs the program for the user named in `config`.
pub async fn run(config: Config) -> Result<(), Error> {
    let settings = Settings::load()?;
    Runner::new(config, settings)?.run().await
}
