//! HTTP client to talk to the tracker endpoints.

use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use url::Url;

/// Accept header sent on every request.
const ACCEPT: &str = "application/json; charset=utf-8";
/// Content-Type header sent on every request.
///
/// Yes, `text/plain` on a GET that expects JSON back. That is what the page
/// has always sent and what the server is known to accept, so it stays.
const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A simple HTTP client, one attempt per call, no retry.
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    agent: ureq::Agent,
    /// Base URL of the tracker.
    base: Url,
}

impl Client {
    /// Initialize a new client for the tracker at `base`.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            agent: ureq::agent(),
            base,
        }
    }

    /// Calls `path` on the tracker and parses the JSON response.
    pub fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .with_context(|| format!("join {path}"))?;
        let response = self
            .agent
            .request_url("GET", &url)
            .set("Accept", ACCEPT)
            .set("Content-Type", CONTENT_TYPE)
            .call()
            .context("HTTP request failed")?;

        serde_json::from_reader(response.into_reader()).context("read JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Cursor, thread};

    /// Serves exactly one request and hands back its lowercased headers.
    fn serve_one(
        response: tiny_http::Response<Cursor<Vec<u8>>>,
    ) -> (Url, thread::JoinHandle<Vec<(String, String)>>) {
        let server =
            tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
        let base = Url::parse(&format!("http://{}/", server.server_addr()))
            .expect("test server URL");

        let handle = thread::spawn(move || {
            let request = server.recv().expect("receive test request");
            let headers = request
                .headers()
                .iter()
                .map(|header| {
                    (
                        header.field.as_str().as_str().to_ascii_lowercase(),
                        header.value.as_str().to_owned(),
                    )
                })
                .collect::<Vec<_>>();
            request.respond(response).expect("send test response");
            headers
        });

        (base, handle)
    }

    #[test]
    fn test_get_json_decodes_payload() {
        let body = br#"[{"id":1,"name":"Pilot"}]"#;
        let (base, handle) =
            serve_one(tiny_http::Response::from_data(body.to_vec()));

        let client = Client::new(base);
        let decoded: Vec<serde_json::Value> =
            client.get_json("/torrents/tv/episodes").expect("fetch JSON");

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0]["name"], "Pilot");

        let headers = handle.join().expect("server thread");
        let value_of = |field: &str| {
            headers
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, value)| value.clone())
        };
        assert_eq!(
            value_of("accept").as_deref(),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(
            value_of("content-type").as_deref(),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn test_get_json_surfaces_http_error() {
        let response =
            tiny_http::Response::from_data(Vec::new()).with_status_code(500);
        let (base, handle) = serve_one(response);

        let client = Client::new(base);
        let result =
            client.get_json::<Vec<serde_json::Value>>("/torrents/tv/episodes");

        assert!(result.is_err());
        drop(handle.join());
    }

    #[test]
    fn test_get_json_surfaces_malformed_body() {
        let (base, handle) = serve_one(tiny_http::Response::from_data(
            b"this is not json".to_vec(),
        ));

        let client = Client::new(base);
        let result =
            client.get_json::<Vec<serde_json::Value>>("/torrents/tv/episodes");

        assert!(result.is_err());
        drop(handle.join());
    }
}
