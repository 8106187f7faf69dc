//! Remote chat/command endpoint boundary.
//!
//! # Responsibility
//! - POST `{message, source}` to the backend and return its reply text.
//! - Convert every transport/protocol failure into a typed, loggable error.
//!
//! # Invariants
//! - Nothing panics or escapes this boundary as a transport error; callers
//!   only ever see `Ok(reply)` or a [`BackendError`].
//! - No retries and no timeout tuning beyond the client default.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Endpoint of the local demo backend; override via [`HttpBackendGateway::new`].
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/api/chat";

/// Placeholder shown when a 2xx response carries no reply text.
const EMPTY_REPLY_FALLBACK: &str = "(backend returned no reply)";

/// Failure of one backend call; recoverable, surfaced through the log/status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The endpoint answered with a non-2xx status.
    Http { status: u16 },
    /// The endpoint could not be reached or its answer could not be read.
    Unreachable(String),
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { status } => write!(f, "backend error ({status})"),
            Self::Unreachable(reason) => write!(f, "backend not reachable: {reason}"),
        }
    }
}

impl Error for BackendError {}

/// Boundary trait so shell logic can run against a fake in tests.
pub trait BackendGateway {
    /// Sends one message; `source` tags which surface produced it.
    fn send(&self, message: &str, source: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Serialize)]
struct BackendRequest<'a> {
    message: &'a str,
    source: &'a str,
}

#[derive(Debug, Deserialize)]
struct BackendResponse {
    #[serde(default)]
    reply: Option<String>,
}

/// Blocking HTTP implementation of the backend boundary.
pub struct HttpBackendGateway {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpBackendGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpBackendGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendGateway for HttpBackendGateway {
    fn send(&self, message: &str, source: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&BackendRequest { message, source })
            .send()
            .map_err(|err| {
                warn!("event=backend_send module=gateway status=unreachable error={err}");
                BackendError::Unreachable(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=backend_send module=gateway status=http_error code={}",
                status.as_u16()
            );
            return Err(BackendError::Http {
                status: status.as_u16(),
            });
        }

        // A 2xx body that fails to decode is treated like a transport
        // failure, matching the original shell's catch-all.
        let body: BackendResponse = response.json().map_err(|err| {
            warn!("event=backend_send module=gateway status=bad_body error={err}");
            BackendError::Unreachable(err.to_string())
        })?;

        info!("event=backend_send module=gateway status=ok source={source}");
        Ok(body
            .reply
            .filter(|reply| !reply.is_empty())
            .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string()))
    }
}
