// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Human-readable summaries of a user's activity.

use crate::count::EventTable;

/// Event types that can be summarized.
///
/// GitHub has many more event types than these, but any other type is
/// left out of a [`Report`] without complaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Commits pushed to a branch.
    Push,

    /// A private repository was made public.
    Public,

    /// A pull request was opened or otherwise acted upon.
    PullRequest,

    /// A repository, branch, or tag was created.
    Create,
}

impl EventKind {
    /// Recognizes an event type as sent by GitHub, such as `PushEvent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghwhat::report::EventKind;
    /// assert_eq!(EventKind::from_type("PushEvent"), Some(EventKind::Push));
    /// assert_eq!(EventKind::from_type("WatchEvent"), None);
    /// ```
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind {
            "PushEvent" => Some(EventKind::Push),
            "PublicEvent" => Some(EventKind::Public),
            "PullRequestEvent" => Some(EventKind::PullRequest),
            "CreateEvent" => Some(EventKind::Create),
            _ => None,
        }
    }

    /// Describes `count` events of this kind in the repository `repo`.
    pub fn describe(&self, repo: &str, count: usize) -> String {
        match self {
            EventKind::Push => format!(" - Pushed {count} commits to {repo}"),
            EventKind::Public => format!(" - Made {repo} public, woohoo!"),
            EventKind::PullRequest => format!(" - Opened a pull request in {repo}"),
            EventKind::Create => format!(" - Created {repo}"),
        }
    }
}

/// A summary of a user's activity, one line per event type and
/// repository.
#[derive(Debug, Default, PartialEq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Summarizes the counted events in `table`.
    pub fn for_table(table: &EventTable) -> Self {
        let lines = table
            .cells()
            .filter_map(|(kind, repo, count)| {
                EventKind::from_type(kind).map(|kind| kind.describe(repo, count))
            })
            .collect();
        Report { lines }
    }

    /// The summary lines.
    ///
    /// Callers should not depend on the order of the lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if nothing in the table could be summarized.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
