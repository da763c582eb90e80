//! GitHub API clients and services for communicating with GitHub over HTTP.

pub mod client;
pub mod event;
pub mod service;

pub use client::EventSource;
pub use event::Event;
