// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading activity from the GitHub API.

use crate::github::event::Event;
use crate::github::service::{GitHubService, Service};
use crate::http::HTTPError;
use thiserror::Error;

/// Reads a user's recent public activity.
#[derive(Debug)]
pub struct EventSource<S = GitHubService> {
    service: S,
}

impl EventSource {
    /// Creates a new event source that contacts GitHub directly,
    /// authenticating with `token`.
    ///
    /// Returns an [`enum@Error`] if an HTTP client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let service = GitHubService::new(token)?;
        Ok(Self::with_service(service))
    }
}

impl<S: Service> EventSource<S> {
    /// Creates a new event source backed by `service`, the actual service
    /// implementation that will be used to retrieve events.
    pub fn with_service(service: S) -> Self {
        Self { service }
    }

    /// Fetches the first page of `username`'s public events, in the order
    /// GitHub returned them.
    ///
    /// Returns an [`enum@Error`] if the request fails or the response
    /// cannot be parsed.
    pub async fn events(&self, username: &str) -> Result<Vec<Event>, Error> {
        let body = self.service.get_events(username).await?;
        let events = Event::parse_list(&body)?;
        log::debug!("Fetched {} events for {username}", events.len());
        Ok(events)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// The response was not a list of events.
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
}
