// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Activity records returned by the GitHub events API.
//!
//! Only a handful of the fields GitHub sends are kept; anything else in
//! the response is ignored during decoding.

use serde::{Deserialize, Deserializer};

/// One entry in a user's activity feed.
///
/// Decoding is lenient: a field that is missing or `null` takes its
/// zero value instead of failing the whole feed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    actor: Actor,

    #[serde(default, deserialize_with = "null_as_default")]
    repo: Repo,
}

/// The account that performed an event.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Actor {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    display_login: String,
}

/// The repository an event happened in.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    /// Creates an event of the given `kind` in the repository named
    /// `repo_name`, with an empty actor.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            actor: Actor::default(),
            repo: Repo {
                name: repo_name.into(),
                ..Repo::default()
            },
        }
    }

    /// Parses a response body from `/users/<user>/events` into a list of
    /// events, in the order the server sent them.
    ///
    /// A `null` body is an empty list, and a `null` entry is an event
    /// with every field empty.
    pub fn parse_list(json: &str) -> serde_json::Result<Vec<Self>> {
        let events: Option<Vec<Option<Self>>> = serde_json::from_str(json)?;
        Ok(events
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }

    /// GitHub's identifier for the event.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The event type, such as `PushEvent`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The user who triggered the event.
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// The repository the event happened in.
    pub fn repo(&self) -> &Repo {
        &self.repo
    }
}

impl Actor {
    /// GitHub's numeric identifier for the account.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The account's login as displayed on GitHub.
    pub fn display_login(&self) -> &str {
        &self.display_login
    }
}

impl Repo {
    /// GitHub's numeric identifier for the repository.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The repository's full name, in `owner/repo` form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// API URL for the repository.
    pub fn url(&self) -> &str {
        &self.url
    }
}
