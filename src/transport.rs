//! Capability shared by the async and blocking clients.

use crate::models::ModelRegistry;
use crate::{Properties, Result};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`crate::Client`] for a single API call.
pub type ResponseFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Something that can deliver one API call.
///
/// Models are generic over this trait, so the same model definition serves
/// both [`crate::Client`] (where `Output` is a [`ResponseFuture`]) and
/// [`crate::BlockingClient`] (where `Output` is a plain `Result`).
pub trait Transport {
    /// What a call hands back: a future or a finished result.
    type Output<'a>
    where
        Self: 'a;

    /// Send `properties` as `called_method` of `model_name`.
    fn call(
        &self,
        model_name: &'static str,
        called_method: &'static str,
        properties: Properties,
    ) -> Self::Output<'_>;

    /// Registry of model wrappers handed out by this client.
    fn registry(&self) -> &ModelRegistry;
}
