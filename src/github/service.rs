// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the GitHub API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the GitHub API over HTTPS, essentially a specialized HTTPS client
//! specifically for GitHub.

use crate::http::{HTTPError, HTTPResult, HTTPService};
use reqwest::{Client, StatusCode, header};

/// A service for retrieving information for GitHub users.
///
/// Using this trait, clients can implement different ways of connecting
/// to the GitHub API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request for the first page of `username`'s public
    /// events and returns the raw response body.
    fn get_events(&self, username: &str) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the GitHub API directly to retrieve information.
#[derive(Debug)]
pub struct GitHubService {
    client: Client,
    base_url: String,
    token: String,
}

impl HTTPService for GitHubService {}

impl GitHubService {
    /// Root of the public GitHub REST API.
    pub const BASE_URL: &'static str = "https://api.github.com";

    /// Media type GitHub recommends requesting from its REST API.
    pub const MEDIA_TYPE: &'static str = "application/vnd.github+json";

    /// Creates a new GitHub service that authenticates with `token`.
    ///
    /// An empty token is sent as-is; GitHub will answer with an error
    /// status, which is reported when the request is made.
    pub fn new(token: impl Into<String>) -> HTTPResult<Self> {
        Ok(Self {
            client: Self::client()?,
            base_url: Self::BASE_URL.to_string(),
            token: token.into(),
        })
    }

    /// Points the service at a different API root, such as a GitHub
    /// Enterprise instance or a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn uri(&self, username: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/users/{username}/events")
    }
}

impl Service for GitHubService {
    async fn get_events(&self, username: &str) -> HTTPResult<String> {
        let uri = self.uri(username);
        log::debug!("GET {uri}");

        let resp = self
            .client
            .get(&uri)
            .header(header::ACCEPT, Self::MEDIA_TYPE)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(HTTPError::from_send)?;

        let status = resp.status();
        log::debug!("{uri} returned HTTP {status}");

        // Any status but 200 is fatal, including other 2xx codes.
        if status != StatusCode::OK {
            // Dropping the response here releases the connection.
            Err(HTTPError::UnexpectedStatus(status))
        } else {
            resp.text().await.map_err(|err| {
                if err.is_timeout() {
                    HTTPError::Transport(err)
                } else {
                    HTTPError::Body(err)
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::load_data;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> GitHubService {
        GitHubService::new("test-token")
            .unwrap()
            .with_base_url(server.uri())
    }

    #[test]
    fn it_returns_a_uri_for_events() {
        let service = GitHubService::new("").unwrap();
        let actual_uri = service.uri("octocat");
        let expected_uri = "https://api.github.com/users/octocat/events";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_ignores_a_trailing_slash_in_the_base_url() {
        let service = GitHubService::new("")
            .unwrap()
            .with_base_url("http://localhost:8080/");
        let actual_uri = service.uri("octocat");
        let expected_uri = "http://localhost:8080/users/octocat/events";
        assert_eq!(actual_uri, expected_uri);
    }

    #[tokio::test]
    async fn it_sends_the_expected_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .and(header("accept", "application/vnd.github+json"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let body = service(&server).get_events("octocat").await.unwrap();
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn it_returns_the_raw_body() {
        let server = MockServer::start().await;
        let data = load_data("events_octocat");

        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string(data.clone()))
            .mount(&server)
            .await;

        let body = service(&server).get_events("octocat").await.unwrap();
        assert_eq!(body, data);
    }

    #[tokio::test]
    async fn it_fails_on_an_unsuccessful_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({
                    "message": "Bad credentials",
                    "status": "401"
                })),
            )
            .mount(&server)
            .await;

        let err = service(&server).get_events("octocat").await.unwrap_err();
        assert!(matches!(err, HTTPError::UnexpectedStatus(_)));
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn it_fails_on_a_successful_status_other_than_ok() {
        let body = r#"[{"id": "1", "type": "PushEvent", "repo": {"name": "a/b"}}]"#;

        for code in [201, 203, 206] {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/users/octocat/events"))
                .respond_with(ResponseTemplate::new(code).set_body_string(body))
                .mount(&server)
                .await;

            let err = service(&server).get_events("octocat").await.unwrap_err();
            assert!(matches!(err, HTTPError::UnexpectedStatus(_)), "{code}: {err:?}");
            assert_eq!(err.status().map(|status| status.as_u16()), Some(code));
        }
    }

    #[tokio::test]
    async fn it_fails_on_a_missing_user() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = service(&server).get_events("doesnotexist").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn it_fails_when_the_host_is_unreachable() {
        let service = GitHubService::new("test-token")
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let err = service.get_events("octocat").await.unwrap_err();
        assert!(matches!(err, HTTPError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn it_fails_to_construct_a_request_for_a_malformed_url() {
        let service = GitHubService::new("test-token")
            .unwrap()
            .with_base_url("not a url");
        let err = service.get_events("octocat").await.unwrap_err();
        assert!(matches!(err, HTTPError::RequestConstruction(_)), "{err:?}");
    }
}
