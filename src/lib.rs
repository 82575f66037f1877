//! # Nova Poshta Client
//! Asynchronous wrapper around the Nova Poshta delivery JSON API. Every API method is exposed as a Rust method on a model ([`models::Address`], [`models::InternetDocument`], ...) reached from a [`Client`] or [`BlockingClient`].
//!
//! ## Audience and uses
//! For Rust services that create waybills, look up cities and warehouses, or track parcels: configure with [`ClientBuilder`], call model methods, and read the returned JSON (optionally through [`response::ApiResponse`]). Dependent calls can be sequenced with [`Chain`].
//!
//! ## Wire format
//! Each call is one `POST` of the envelope `{apiKey, modelName, calledMethod, methodProperties}` to the API endpoint. Method properties follow the rules of [`Properties`]: absent values are omitted, scalars are sent as strings, lists and maps pass through.
//!
//! ## Runtime requirements
//! [`Client`] is async and needs a Tokio (v1) runtime. [`BlockingClient`] owns a current-thread runtime and must be used outside async code.
//!
//! ## Out of scope
//! No retries, caching, or rate limiting. The crate only proxies the Nova Poshta API and inherits its availability and limits.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`]. With [`ClientBuilder::raise_for_errors`] enabled, responses with `success: false` become [`Error::InvalidApiKey`] or [`Error::ApiRequest`]; otherwise they are returned unchanged. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use novaposhta_client::Client;
//! use novaposhta_client::models::TrackedDocument;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), novaposhta_client::Error> {
//!     let client = Client::builder("my-api-key").raise_for_errors(true).build()?;
//!
//!     let settlements = client.address().search_settlements("Київ", Some(5), None).await?;
//!     println!("{settlements}");
//!
//!     let status = client
//!         .tracking_document()
//!         .get_status_documents(vec![TrackedDocument::new("20400048799000")])
//!         .await?;
//!     println!("{}", status["data"][0]["Status"]);
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

mod blocking;
mod chain;
mod client;
mod error;
pub mod models;
mod properties;
pub mod response;
mod transport;

pub use blocking::BlockingClient;
pub use chain::{Chain, ChainArgs, ChainExecutor, ChainResult};
pub use client::{API_ENDPOINT, Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use error::Error;
pub use models::{Model, ModelRegistry};
pub use properties::{IntoProperty, Properties};
pub use transport::{ResponseFuture, Transport};

/// Result type alias for Nova Poshta operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
