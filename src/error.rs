//! Error types for the ElevenLabs API client.
//!
//! Every failure surfaces as a variant of [`Error`]. Non-success HTTP
//! responses are classified by status code:
//!
//! - `400`/`401` decode into an [`ApiError`]
//! - `422` decodes into a [`ValidationError`]
//! - anything else becomes [`Error::UnexpectedStatus`]
//!
//! Use [`Error::kind`] to tell client, server, transport and decoding
//! problems apart without matching on every variant.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized `Result` type for ElevenLabs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all ElevenLabs API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API rejected the request or its credential (HTTP 400 or 401).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API rejected one or more request fields (HTTP 422).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other non-200 status. The body is not decoded.
    #[error("unexpected HTTP status \"{status} {reason}\"")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status code
        reason: String,
    },

    /// Connection-level failure reported by the HTTP stack.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The call did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The client's cancellation token was cancelled.
    #[error("request cancelled")]
    Cancelled,

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file for a multipart upload could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    FileAccess {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing a streamed response body into the caller's sink failed.
    #[error("failed to write response body: {0}")]
    Sink(#[source] std::io::Error),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was rejected (400, 401, 422).
    Client,
    /// The server answered with some other non-success status.
    Server,
    /// Network failure, timeout or cancellation.
    Transport,
    /// A request or response payload was not valid JSON for its type.
    Decoding,
    /// The request could not be prepared locally (file access, bad input).
    Local,
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Api(_) | Error::Validation(_) => ErrorKind::Client,
            Error::UnexpectedStatus { .. } => ErrorKind::Server,
            Error::Http(_) | Error::Timeout(_) | Error::Cancelled | Error::Sink(_) => {
                ErrorKind::Transport
            }
            Error::Json(_) => ErrorKind::Decoding,
            Error::FileAccess { .. }
            | Error::InvalidInput(_)
            | Error::UrlParse(_)
            | Error::Config(_) => ErrorKind::Local,
        }
    }

    /// Returns `true` if the call ended because its deadline expired or
    /// its cancellation token fired.
    ///
    /// # Example
    ///
    /// ```
    /// use elevenlabs_rs::Error;
    /// use std::time::Duration;
    ///
    /// assert!(Error::Timeout(Duration::from_secs(1)).is_timeout());
    /// assert!(Error::Cancelled.is_timeout());
    /// ```
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout(_) | Error::Cancelled => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the API refused the credential.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Api(e) => e.http_status == 401 || e.detail.status == "needs_authorization",
            _ => false,
        }
    }

    /// Returns `true` if the request itself was rejected by the API.
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::Client
    }

    /// Returns `true` if the server answered with an unexpected status.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Build the error for a status that has no structured body.
    pub(crate) fn unexpected_status(status: reqwest::StatusCode) -> Self {
        Error::UnexpectedStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

/// Error body returned by the API for 400 and 401 responses.
///
/// ```json
/// {"detail": {"status": "needs_authorization", "message": "..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("api error - {}", .detail.message)]
pub struct ApiError {
    /// Error details
    pub detail: ApiErrorDetail,
    /// HTTP status the error arrived with
    #[serde(skip)]
    pub http_status: u16,
}

/// Details of an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable status, e.g. `needs_authorization`
    #[serde(default)]
    pub status: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Extra context, when the API provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Error body returned by the API for 422 responses.
///
/// Only the first issue is reported by the `Display` implementation, even
/// when the API lists several. The full list stays available in
/// [`detail`](Self::detail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field-level issues, in the order the API reported them
    #[serde(default)]
    pub detail: Vec<ValidationIssue>,
}

impl ValidationError {
    /// The first issue, which is the one shown to users.
    pub fn first(&self) -> Option<&ValidationIssue> {
        self.detail.first()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(issue) => write!(f, "validation error: {}", issue.msg),
            None => write!(f, "validation error: no details"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Location of the offending field, e.g. `["body", "text"]`
    #[serde(default, deserialize_with = "deserialize_loc")]
    pub loc: Vec<String>,
    /// Human-readable message
    #[serde(default)]
    pub msg: String,
    /// Error type tag, e.g. `value_error.missing`
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Accepts `"body"`, `["body", "text"]` or `["body", 0]` and normalizes
/// every segment to a string.
fn deserialize_loc<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LocVisitor;

    impl<'de> Visitor<'de> for LocVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a location string or an array of location segments")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut segments = Vec::new();
            while let Some(segment) = seq.next_element::<LocSegment>()? {
                segments.push(segment.0);
            }
            Ok(segments)
        }
    }

    deserializer.deserialize_any(LocVisitor)
}

struct LocSegment(String);

impl<'de> Deserialize<'de> for LocSegment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(LocSegment(s)),
            other => Ok(LocSegment(other.to_string())),
        }
    }
}
