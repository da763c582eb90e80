// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! General-purpose counting capabilities.

use crate::github::event::Event;
use counter::Counter;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A single cell of an [`EventTable`]: event type, repository name, and
/// the number of events of that type in that repository.
pub type EventCount<'a> = (&'a str, &'a str, usize);

/// Groups events by event type, then by repository, and counts the
/// number of events in each group.
///
/// A (type, repository) pair that never occurs has no entry at all;
/// every count in the table is at least 1.
#[derive(Debug, Default, PartialEq)]
pub struct EventTable {
    counts: HashMap<String, Counter<String>>,
}

impl EventTable {
    /// Groups and counts events.
    pub fn from_events(events: &[Event]) -> Self {
        let counts = events
            .iter()
            .into_group_map_by(|event| event.kind().to_string())
            .into_iter()
            .map(|(kind, events)| {
                let repos = events
                    .into_iter()
                    .map(|event| event.repo().name().to_string())
                    .collect::<Counter<_>>();
                (kind, repos)
            })
            .collect();
        EventTable { counts }
    }

    /// Number of events of type `kind` in the repository named `repo`,
    /// or `None` if there were no such events.
    pub fn get(&self, kind: &str, repo: &str) -> Option<usize> {
        self.counts.get(kind)?.get(repo).copied()
    }

    /// Total number of events counted.
    pub fn total(&self) -> usize {
        self.counts.values().flat_map(|repos| repos.values()).sum()
    }

    /// True if no events were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates through every cell in the table.
    ///
    /// Cells are sorted by event type and then by repository name,
    /// ignoring case.
    pub fn cells(&self) -> impl Iterator<Item = EventCount<'_>> {
        self.counts
            .iter()
            .flat_map(|(kind, repos)| {
                repos
                    .iter()
                    .map(move |(repo, count)| (kind.as_str(), repo.as_str(), *count))
            })
            .sorted_by(|(lkind, lrepo, _), (rkind, rrepo, _)| {
                Ord::cmp(lkind, rkind).then_with(|| Self::cmp_repos(lrepo, rrepo))
            })
    }

    fn cmp_repos(lhs: &str, rhs: &str) -> Ordering {
        Ord::cmp(&lhs.to_lowercase(), &rhs.to_lowercase()).then_with(|| Ord::cmp(lhs, rhs))
    }
}
