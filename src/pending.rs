//! A single in-flight request, consumable by awaiting or by callback.
//!
//! The request runs once, the first time the result is awaited or given a
//! callback, and every consumer sees that one outcome. Clones share it too.
//! A result that is dropped unconsumed never sends its request.

// Use 3rd party
use futures::future::{BoxFuture, FutureExt, Shared};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

// Use built-in library
use std::future::{Future, IntoFuture};

// Use internal modules
use crate::client::{ClientError, ClientResult};

/// Awaitable handle on a `Pending` result.
pub type Promise = Shared<BoxFuture<'static, ClientResult<Value>>>;

#[derive(Clone)]
#[must_use = "a pending result does nothing until it is awaited or given a callback"]
pub struct Pending {
    inner: Promise,
}

impl Pending {
    pub fn new<F>(operation: F) -> Self
    where
        F: Future<Output = ClientResult<Value>> + Send + 'static,
    {
        Self {
            inner: operation.boxed().shared(),
        }
    }

    /// A result that is already settled with `value`.
    pub fn resolved(value: Value) -> Self {
        Self::new(futures::future::ready(Ok(value)))
    }

    /// A result that is already settled with `err`.
    pub fn rejected(err: ClientError) -> Self {
        Self::new(futures::future::ready(Err(err)))
    }

    /// Returns the underlying operation for awaiting or chaining.
    pub fn as_promise(&self) -> Promise {
        self.inner.clone()
    }

    /// Registers `callback` for the outcome.
    ///
    /// On success it is called with `(None, Some(value))`, on failure with
    /// `(Some(err), None)`. Registering again does not repeat the request.
    ///
    /// The callback runs on the current Tokio runtime and the returned handle
    /// completes once it has. Outside a runtime nothing is sent: the callback
    /// is called right away with `ClientError::Runtime` and `None` is returned.
    pub fn as_callback<F>(&self, callback: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(Option<ClientError>, Option<Value>) + Send + 'static,
    {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                callback(Some(ClientError::Runtime(e.to_string())), None);
                return None;
            }
        };
        let promise = self.as_promise();
        Some(handle.spawn(async move {
            match promise.await {
                Ok(value) => callback(None, Some(value)),
                Err(err) => callback(Some(err), None),
            }
        }))
    }

    /// Awaits the outcome and decodes it into `T`.
    pub async fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        let value = self.as_promise().await?;
        serde_json::from_value::<T>(value).map_err(Into::into)
    }
}

impl IntoFuture for Pending {
    type Output = ClientResult<Value>;
    type IntoFuture = Promise;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}
