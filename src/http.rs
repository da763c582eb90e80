// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// A general service for making HTTP calls.
///
/// It might be a bit odd to refer to this trait as a "service", since
/// it appears to be more of a _client_ implementation, but think of
/// this as a proxy for a remote _service_ (even though a _client_ is used
/// to communicate with that remote service). A service might not always
/// be remote, such as when the implementation is a deterministic service
/// used for testing.
pub trait HTTPService {
    /// How long a request may take before it is abandoned.
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Default HTTP client that can be used to make HTTP requests.
    ///
    /// Returns an error if the client cannot be constructed, which only
    /// happens if a TLS backend or the DNS resolver cannot be initialized.
    fn client() -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(Self::user_agent())
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(HTTPError::RequestConstruction)
    }

    /// An appropriate user agent to use when making HTTP requests.
    fn user_agent() -> String {
        format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// The request could not be built, e.g., because of a malformed URL.
    #[error("Could not construct HTTP request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    /// The remote host could not be reached or did not answer in time.
    #[error("Error while making HTTP request: {0}")]
    Transport(#[source] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Unexpected HTTP status {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    /// An error retrieving the body of a response.
    #[error("Error retrieving body of HTTP response: {0}")]
    Body(#[source] reqwest::Error),
}

impl HTTPError {
    /// Classifies an error returned by [`reqwest::RequestBuilder::send()`].
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            HTTPError::RequestConstruction(err)
        } else {
            HTTPError::Transport(err)
        }
    }

    /// The HTTP status code, if the server responded with one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HTTPError::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}
