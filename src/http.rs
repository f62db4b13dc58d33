//! HTTP transport and response-body normalization.
//!
//! Every response body, successful or not, goes through the same policy:
//! a missing or empty body becomes `{}`, a JSON body is decoded, and a body
//! that is not JSON, or decodes to a falsy value, is replaced by `{}`. A 2xx status settles the request
//! successfully; anything else, including a connection failure, settles it
//! with a `ClientError` carrying the normalized body.

// Use 3rd party
use async_trait::async_trait;
use log::{error, warn};
use reqwest::{Client, Method};
use serde_json::{Map, Value};

// Use built-in library
use std::fmt;

// Use internal modules
use crate::client::{ClientError, ClientResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// One outgoing request. Built per call and consumed by the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// A response that made it back from the server, whatever its status.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<String>,
}

/// A request that never produced a response.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportFailure {
    pub message: String,
    pub body: Option<String>,
}

/// Performs requests on behalf of the facades.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestDescriptor) -> Result<RawResponse, TransportFailure>;
}

/// The default transport, backed by `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<RawResponse, TransportFailure> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        // Only add a body when one was given
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| TransportFailure {
            message: e.to_string(),
            body: None,
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportFailure {
            message: e.to_string(),
            body: None,
        })?;

        Ok(RawResponse {
            status,
            body: Some(body),
        })
    }
}

/// Decodes a response body, falling back to an empty object.
///
/// Bodies decoding to `null`, `false`, `0` or `""` are empty too.
pub fn normalize_body(body: Option<&str>) -> Value {
    match body {
        Some(text) if !text.trim().is_empty() => match serde_json::from_str::<Value>(text) {
            Ok(value) if is_falsy(&value) => empty_object(),
            Ok(value) => value,
            Err(e) => {
                warn!("response body is not json ({}), using an empty object", e);
                empty_object()
            }
        },
        _ => empty_object(),
    }
}

/// Turns what the transport delivered into the client's result shape.
pub fn settle(outcome: Result<RawResponse, TransportFailure>) -> ClientResult<Value> {
    match outcome {
        Ok(response) if (200..300).contains(&response.status) => {
            Ok(normalize_body(response.body.as_deref()))
        }
        Ok(response) => Err(ClientError::Api {
            status: response.status,
            payload: normalize_body(response.body.as_deref()),
        }),
        Err(failure) => {
            error!("request failed: {}", failure.message);
            Err(ClientError::Transport {
                payload: normalize_body(failure.body.as_deref()),
                message: failure.message,
            })
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}
