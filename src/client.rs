// Use 3rd party
use log::debug;
use serde_json::Value;
use thiserror::Error;

// Use built-in library
use std::sync::Arc;

// Use internal modules
use crate::http::{empty_object, settle, HttpMethod, RequestDescriptor, ReqwestTransport, Transport};
use crate::pending::Pending;

/// Possible errors returned from `rsmixes` calls.
///
/// Every variant carries, or can produce, the normalized JSON error payload.
#[derive(Clone, Debug, Error)]
pub enum ClientError {
    #[error("request error: {message}")]
    Transport { message: String, payload: Value },
    #[error("status code: {status}")]
    Api { status: u16, payload: Value },
    #[error("url error: {0}")]
    Url(String),
    #[error("json parse error: {0}")]
    ParseJSON(String),
    #[error("no async runtime: {0}")]
    Runtime(String),
}

impl ClientError {
    /// The normalized error body, `{}` when there is none.
    pub fn payload(&self) -> Value {
        match self {
            Self::Transport { payload, .. } | Self::Api { payload, .. } => payload.clone(),
            Self::Url(_) | Self::ParseJSON(_) | Self::Runtime(_) => empty_object(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseJSON(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Issues requests through a shared transport and wraps them as `Pending`.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn get(&self, url: ClientResult<String>) -> Pending {
        self.request(HttpMethod::Get, url)
    }

    pub fn post(&self, url: ClientResult<String>) -> Pending {
        self.request(HttpMethod::Post, url)
    }

    pub fn delete(&self, url: ClientResult<String>) -> Pending {
        self.request(HttpMethod::Delete, url)
    }

    /// A failed `url` settles the result without reaching the transport.
    pub fn request(&self, method: HttpMethod, url: ClientResult<String>) -> Pending {
        let transport = Arc::clone(&self.transport);
        Pending::new(async move {
            let request = RequestDescriptor::new(method, url?);
            debug!("{} {}", request.method, request.url);
            let outcome = transport.send(request).await;
            if let Ok(response) = &outcome {
                debug!("response status: {}", response.status);
            }
            settle(outcome)
        })
    }
}
