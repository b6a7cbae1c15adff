//! reqwest-backed lookup client

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;
use verse_core::{Error, Result, VerseQuery, VerseRecord};

use crate::{LookupError, VerseLookup};

/// Base address of a locally running verse service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// HTTP client for `GET {base}/chapter/{chapter}/verse/{verse}`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct VerseClient {
    http: reqwest::Client,
    base_url: Url,
}

impl VerseClient {
    /// Create a client that waits indefinitely for the service
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client with an optional whole-request timeout
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| Error::invalid_base_url(base_url.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("verse-explorer/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the lookup URL for a query. Values are used verbatim as path
    /// segments (percent-encoded if needed, never parsed).
    pub fn verse_url(&self, query: &VerseQuery) -> std::result::Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["chapter", query.chapter.as_str(), "verse", query.verse.as_str()]);
        Ok(url)
    }
}

impl VerseLookup for VerseClient {
    async fn fetch_verse(&self, query: &VerseQuery) -> std::result::Result<VerseRecord, LookupError> {
        let url = self.verse_url(query)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Lookup {} returned {}", url, status);
            return Err(LookupError::NotFound);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        parse_verse_body(&body).inspect_err(|e| {
            if !e.is_not_found() {
                warn!("Malformed verse body from {}: {}", url, e);
            }
        })
    }
}

/// Decode a successful response body.
///
/// The service answers unknown verses with `200` and a JSON `null`, which is
/// reported as [`LookupError::NotFound`] like any non-success status.
pub fn parse_verse_body(body: &[u8]) -> std::result::Result<VerseRecord, LookupError> {
    match serde_json::from_slice::<Option<VerseRecord>>(body) {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(LookupError::NotFound),
        Err(e) => Err(LookupError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubServer;

    const RECORD: &str = r#"{
        "id": 1,
        "chapter": 2,
        "verse": 47,
        "slok": "...",
        "transliteration": "...",
        "commentaries": [{"commentator": "Shankara", "english_translation": "T1"}]
    }"#;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            VerseClient::new("not a url"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            VerseClient::new("mailto:someone@example.com"),
            Err(Error::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_verse_url_appends_segments() {
        let client = VerseClient::new(DEFAULT_BASE_URL).unwrap();
        let url = client.verse_url(&VerseQuery::new("2", "47")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/chapter/2/verse/47");
    }

    #[test]
    fn test_verse_url_tolerates_trailing_slash() {
        let client = VerseClient::new("http://localhost:8080/api/").unwrap();
        let url = client.verse_url(&VerseQuery::new("18", "66")).unwrap();
        assert_eq!(url.path(), "/api/chapter/18/verse/66");
    }

    #[test]
    fn test_parse_body_record() {
        let record = parse_verse_body(RECORD.as_bytes()).unwrap();
        assert_eq!(record.chapter, 2);
        assert_eq!(record.commentaries[0].commentator, "Shankara");
    }

    #[test]
    fn test_parse_body_null_is_not_found() {
        assert_eq!(parse_verse_body(b"null"), Err(LookupError::NotFound));
    }

    #[test]
    fn test_parse_body_garbage_is_decode_error() {
        let err = parse_verse_body(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_verse_success() {
        let server = StubServer::new()
            .with_route("/api/chapter/2/verse/47", 200, RECORD)
            .start()
            .await
            .unwrap();
        let client = VerseClient::new(&server.base_url()).unwrap();

        let record = client
            .fetch_verse(&VerseQuery::new("2", "47"))
            .await
            .unwrap();

        assert_eq!(record.heading(), "Chapter 2, Verse 47");
        assert_eq!(server.requests(), vec!["/api/chapter/2/verse/47".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_verse_404_is_not_found() {
        let server = StubServer::new().start().await.unwrap();
        let client = VerseClient::new(&server.base_url()).unwrap();

        let err = client
            .fetch_verse(&VerseQuery::new("99", "1"))
            .await
            .unwrap_err();

        assert_eq!(err, LookupError::NotFound);
        assert_eq!(err.to_string(), "Verse not found");
    }

    #[tokio::test]
    async fn test_fetch_verse_server_error_is_not_found() {
        let server = StubServer::new()
            .with_route("/api/chapter/1/verse/1", 500, "boom")
            .start()
            .await
            .unwrap();
        let client = VerseClient::new(&server.base_url()).unwrap();

        let err = client
            .fetch_verse(&VerseQuery::new("1", "1"))
            .await
            .unwrap_err();

        assert_eq!(err, LookupError::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_verse_unreachable_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = VerseClient::new(&format!("http://{}/api", addr)).unwrap();
        let err = client
            .fetch_verse(&VerseQuery::new("2", "47"))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Transport(_)));
        assert_ne!(err.to_string(), "Verse not found");
    }
}
