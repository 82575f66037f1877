//! Nova Poshta async client implementation.

use crate::models::{ModelRegistry, model_accessors};
use crate::transport::{ResponseFuture, Transport};
use crate::{BlockingClient, Error, Properties, Result};
use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Async client for the Nova Poshta JSON API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like the endpoint, timeout, proxy, or error-raising mode.
///
/// Models are reached through accessors such as [`Client::address`]; every
/// model method performs exactly one POST through [`Client::send`].
pub struct Client {
    http: Mutex<Option<reqwest::Client>>,
    api_key: String,
    api_endpoint: String,
    timeout: Duration,
    raise_for_errors: bool,
    proxy: Option<String>,
    user_agent: String,
    registry: ModelRegistry,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client with the default endpoint and settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use novaposhta_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), novaposhta_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let areas = client.address().get_areas().await?;
    /// println!("{areas}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether unsuccessful API responses are turned into errors.
    pub fn raise_for_errors(&self) -> bool {
        self.raise_for_errors
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Call `called_method` of `model_name` with the given properties.
    ///
    /// The request body is always the full envelope (`apiKey`, `modelName`,
    /// `calledMethod`, `methodProperties`). Returns the parsed JSON response.
    ///
    /// # Errors
    /// - [`Error::Closed`] if [`Client::close`] was called;
    /// - [`Error::Request`] on transport failure or a non-JSON body;
    /// - [`Error::InvalidApiKey`] / [`Error::ApiRequest`] when error raising is
    ///   enabled and the API reports `success: false`.
    ///
    /// # Examples
    /// ```no_run
    /// # use novaposhta_client::{Client, Properties};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), novaposhta_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let response = client
    ///     .send("Address", "getCities", Properties::new().with("FindByString", "Київ"))
    ///     .await?;
    /// println!("{}", response["data"][0]["Description"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(
        &self,
        model_name: &str,
        called_method: &str,
        properties: Properties,
    ) -> Result<Value> {
        let http = self.transport()?;
        let envelope = Envelope {
            api_key: &self.api_key,
            model_name,
            called_method,
            method_properties: &properties,
        };

        debug!("calling {model_name}.{called_method}");

        let response: Value = http
            .post(&self.api_endpoint)
            .headers(self.headers())
            .timeout(self.timeout)
            .json(&envelope)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if self.raise_for_errors {
            check_response(response)
        } else {
            Ok(response)
        }
    }

    /// Release the underlying HTTP client.
    ///
    /// Calling it again is a no-op; later sends fail with [`Error::Closed`].
    pub fn close(&self) {
        let released = self
            .http
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            debug!("nova poshta client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.http
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    model_accessors!();

    /// A handle to the live HTTP client; reqwest clients are cheap to clone.
    fn transport(&self) -> Result<reqwest::Client> {
        self.http
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::Closed)
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }
}

impl Transport for Client {
    type Output<'a> = ResponseFuture<'a>;

    fn call(
        &self,
        model_name: &'static str,
        called_method: &'static str,
        properties: Properties,
    ) -> ResponseFuture<'_> {
        Box::pin(self.send(model_name, called_method, properties))
    }

    fn registry(&self) -> &ModelRegistry {
        &self.registry
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_endpoint", &self.api_endpoint)
            .field("timeout", &self.timeout)
            .field("raise_for_errors", &self.raise_for_errors)
            .field("proxy", &self.proxy)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

/// Request body shared by every API call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<'a> {
    pub api_key: &'a str,
    pub model_name: &'a str,
    pub called_method: &'a str,
    pub method_properties: &'a Properties,
}

/// Turn an unsuccessful API response into an error.
///
/// The first entry of `errors` decides the kind: a message starting with
/// `"API key"` is [`Error::InvalidApiKey`], anything else [`Error::ApiRequest`].
/// Any other shape of `errors` is an [`Error::ApiRequest`] as well.
pub(crate) fn check_response(response: Value) -> Result<Value> {
    if response.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(response);
    }

    let error = match response.get("errors") {
        Some(Value::Array(errors)) => match errors.first() {
            Some(Value::String(message)) if message.starts_with("API key") => {
                warn!("nova poshta rejected the API key: {message}");
                return Err(Error::InvalidApiKey(message.clone()));
            }
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => "request failed without an error message".to_string(),
        },
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => "request failed without an error message".to_string(),
        Some(other) => other.to_string(),
    };

    warn!("nova poshta request failed: {error}");
    Err(Error::ApiRequest(error))
}

/// Default Nova Poshta JSON endpoint.
pub const API_ENDPOINT: &str = "https://api.novaposhta.ua/v2.0/json/";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT_VALUE: &str = concat!("novaposhta-client/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Nova Poshta client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    api_endpoint: String,
    timeout: Duration,
    raise_for_errors: bool,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - [`API_ENDPOINT`]
    /// - 10 second timeout
    /// - error raising off: unsuccessful responses are returned as is
    /// - no proxy, strict TLS validation
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_endpoint: API_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            raise_for_errors: false,
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Override the API endpoint URL.
    ///
    /// Useful for testing against a sandbox or a mock server.
    pub fn api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Turn `success: false` responses into [`Error::InvalidApiKey`] or
    /// [`Error::ApiRequest`] instead of returning them.
    pub fn raise_for_errors(mut self, value: bool) -> Self {
        self.raise_for_errors = value;
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the async client.
    ///
    /// No request is made until the first call.
    ///
    /// # Examples
    /// ```no_run
    /// # use novaposhta_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), novaposhta_client::Error> {
    /// let client = Client::builder("my-api-key")
    ///     .timeout(Duration::from_secs(5))
    ///     .raise_for_errors(true)
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http: Mutex::new(Some(http)),
            api_key: self.api_key,
            api_endpoint: self.api_endpoint,
            timeout: self.timeout,
            raise_for_errors: self.raise_for_errors,
            proxy: self.proxy,
            user_agent: self.user_agent,
            registry: ModelRegistry::new(),
        })
    }

    /// Build a [`BlockingClient`] with the same settings.
    pub fn build_blocking(self) -> Result<BlockingClient> {
        BlockingClient::from_client(self.build()?)
    }
}
