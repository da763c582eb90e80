use crate::github::service::Service;
use crate::http::{HTTPError, HTTPResult};
use reqwest::StatusCode;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Serves canned responses from `tests/data/events_<suffix>.json`, or
/// fails every request with a fixed status.
pub struct TestService<'a> {
    suffix: &'a str,
    status: Option<StatusCode>,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self {
            suffix,
            status: None,
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            suffix: "",
            status: Some(status),
        }
    }
}

impl<'a> Service for TestService<'a> {
    async fn get_events(&self, _username: &str) -> HTTPResult<String> {
        do_logging();
        match self.status {
            Some(status) => Err(HTTPError::UnexpectedStatus(status)),
            None => Ok(load_data(&format!("events_{}", self.suffix))),
        }
    }
}
