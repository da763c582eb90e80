// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::report::Report;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

impl Viewable for Report {
    fn view(&self) -> String {
        let mut lines = vec!["Outputs:"];
        lines.extend(self.lines().iter().map(String::as_str));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::EventTable;
    use crate::github::event::Event;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_prints_a_header_for_an_empty_report() {
        let report = Report::for_table(&EventTable::from_events(&[]));
        assert_eq!(report.view(), "Outputs:");
    }

    #[test]
    fn it_prints_one_line_per_summary() {
        let events = vec![
            Event::new("1", "PushEvent", "alice/site"),
            Event::new("2", "CreateEvent", "alice/tool"),
            Event::new("3", "WatchEvent", "x/y"),
        ];
        let report = Report::for_table(&EventTable::from_events(&events));
        let expected = "Outputs:\n - Created alice/tool\n - Pushed 1 commits to alice/site";
        assert_eq!(report.view(), expected);
    }
}
