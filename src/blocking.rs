//! Synchronous wrapper that blocks on the async client.

use crate::models::{ModelRegistry, model_accessors};
use crate::{Client, ClientBuilder, Error, Properties, Result, Transport};
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

/// Blocking client for the Nova Poshta JSON API.
///
/// Wraps a [`Client`] and drives each call to completion on an owned
/// current-thread Tokio runtime. Do not use it from inside an async
/// runtime; use [`Client`] there.
///
/// # Examples
/// ```no_run
/// # use novaposhta_client::BlockingClient;
/// # fn main() -> Result<(), novaposhta_client::Error> {
/// let client = BlockingClient::new("my-api-key")?;
/// let cities = client.address().search_settlements("Київ", Some(5), None)?;
/// println!("{cities}");
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BlockingClient {
    inner: Client,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build_blocking()
    }

    pub(crate) fn from_client(inner: Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;
        Ok(Self { inner, runtime })
    }

    /// The wrapped async client, which shares settings and closed state.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Blocking counterpart of [`Client::send`].
    pub fn send(
        &self,
        model_name: &str,
        called_method: &str,
        properties: Properties,
    ) -> Result<Value> {
        if self.inner.is_closed() {
            return Err(Error::Closed);
        }
        self.runtime
            .block_on(self.inner.send(model_name, called_method, properties))
    }

    /// Release the underlying HTTP client. Idempotent.
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    model_accessors!();
}

impl Transport for BlockingClient {
    type Output<'a> = Result<Value>;

    fn call(
        &self,
        model_name: &'static str,
        called_method: &'static str,
        properties: Properties,
    ) -> Result<Value> {
        self.send(model_name, called_method, properties)
    }

    fn registry(&self) -> &ModelRegistry {
        self.inner.registry()
    }
}
