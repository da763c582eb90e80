// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! ghwhat is a command-line tool for quickly summarizing what a GitHub
//! user has been up to lately. It fetches the most recent page of a user's
//! public activity, counts the events by type and repository, and prints
//! a line for each push, pull request, repository creation, and repository
//! that was made public.
//!
//! # Examples
//!
//! (In all examples, replace `github_user` with the actual username of a
//! GitHub user.)
//!
//! Summarize a user's recent activity:
//!
//! ```bash
//! ghwhat github_user
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! ghwhat --help
//! ```
//!
//! # GitHub API Setup
//!
//! ghwhat authenticates with a GitHub [personal access token]. To enable
//! access:
//!
//! 1. Generate a token. No scopes are needed to read public activity.
//! 2. Create a file named `.env` in the directory you run ghwhat from.
//! 3. Add the token to it:
//!
//!    ```bash
//!    GHTOKEN=copied_token
//!    ```
//!
//! ghwhat refuses to run if `.env` is missing. `$GHTOKEN` may also be set
//! in your shell, in which case it takes precedence over `.env`.
//!
//! # License
//!
//! ghwhat is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [personal access token]: https://github.com/settings/tokens

pub mod cli;
pub mod conf;
pub mod count;
pub mod github;
pub mod http;
pub mod report;
pub mod view;

#[cfg(test)]
mod test_utils;
