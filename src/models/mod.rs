//! Model wrappers, one per resource of the Nova Poshta API.
//!
//! A model borrows its client and turns each method call into exactly one
//! [`Transport::call`](crate::Transport::call) with the model's API name.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Defines a model wrapper struct bound to a client.
macro_rules! model {
    ($(#[$meta:meta])* $name:ident => $api_name:literal) => {
        $(#[$meta])*
        pub struct $name<'c, T> {
            client: &'c T,
            generation: u64,
        }

        impl<'c, T: 'c> $crate::models::Model<'c, T> for $name<'c, T> {
            const NAME: &'static str = $api_name;

            fn bind(client: &'c T, generation: u64) -> Self {
                Self { client, generation }
            }
        }

        impl<'c, T: $crate::Transport> $name<'c, T> {
            fn call(
                &self,
                called_method: &'static str,
                properties: $crate::Properties,
            ) -> T::Output<'c> {
                <T as $crate::Transport>::call(self.client, $api_name, called_method, properties)
            }
        }

        impl<T> Clone for $name<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<'_, T> {}

        impl<T> PartialEq for $name<'_, T> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.client, other.client) && self.generation == other.generation
            }
        }

        impl<T> Eq for $name<'_, T> {}

        impl<T> std::fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("generation", &self.generation)
                    .finish()
            }
        }

        impl<T> std::fmt::Display for $name<'_, T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($api_name)
            }
        }
    };
}

/// Registry and per-model accessors shared by both clients.
macro_rules! model_accessors {
    () => {
        /// Instantiate `M`, replacing any earlier registration of the same model.
        pub fn new_model<'c, M: $crate::models::Model<'c, Self>>(&'c self) -> M {
            let generation = $crate::Transport::registry(self).register(M::NAME);
            M::bind(self, generation)
        }

        /// The currently registered instance of `M`, if any.
        pub fn model<'c, M: $crate::models::Model<'c, Self>>(&'c self) -> Option<M> {
            $crate::Transport::registry(self)
                .generation(M::NAME)
                .map(|generation| M::bind(self, generation))
        }

        pub fn address(&self) -> $crate::models::Address<'_, Self> {
            self.new_model()
        }

        pub fn counterparty(&self) -> $crate::models::Counterparty<'_, Self> {
            self.new_model()
        }

        pub fn contact_person(&self) -> $crate::models::ContactPerson<'_, Self> {
            self.new_model()
        }

        pub fn scan_sheet(&self) -> $crate::models::ScanSheet<'_, Self> {
            self.new_model()
        }

        pub fn common(&self) -> $crate::models::Common<'_, Self> {
            self.new_model()
        }

        pub fn additional_service(&self) -> $crate::models::AdditionalService<'_, Self> {
            self.new_model()
        }

        pub fn internet_document(&self) -> $crate::models::InternetDocument<'_, Self> {
            self.new_model()
        }

        pub fn tracking_document(&self) -> $crate::models::TrackingDocument<'_, Self> {
            self.new_model()
        }
    };
}

pub(crate) use model_accessors;

mod additional_service;
mod address;
mod common;
mod contact_person;
mod counterparty;
mod internet_document;
mod scan_sheet;
mod tracking_document;

pub use additional_service::{AdditionalService, ChangeOrdersQuery, OrdersQuery, ReturnOrder};
pub use address::{Address, AddressUpdate, CitiesQuery, SettlementsQuery, WarehousesQuery};
pub use common::{Common, PackListQuery};
pub use contact_person::{ContactPerson, ContactPersonData};
pub use counterparty::{Counterparty, CounterpartyData, CounterpartyUpdate};
pub use internet_document::{
    DocumentListQuery, DocumentPriceQuery, DocumentUpdate, IncomingDocumentsQuery,
    InternetDocument, NewDocument,
};
pub use scan_sheet::ScanSheet;
pub use tracking_document::{TrackedDocument, TrackingDocument};

/// Default page size the API applies to paginated lookups.
pub const DEFAULT_LIMIT: u32 = 50;
/// First page.
pub const DEFAULT_PAGE: u32 = 1;

/// A model wrapper bound to a client.
pub trait Model<'c, T: 'c>: Sized {
    /// The API's `modelName` for this resource.
    const NAME: &'static str;

    fn bind(client: &'c T, generation: u64) -> Self;
}

/// Short-lived registry of instantiated model wrappers.
///
/// Registering a model again replaces the earlier registration; the new
/// wrapper compares unequal to the one it replaced.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    next: AtomicU64,
    models: Mutex<HashMap<&'static str, u64>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, returning the generation of the new instance.
    pub fn register(&self, name: &'static str) -> u64 {
        let generation = self.next.fetch_add(1, Ordering::Relaxed);
        self.models
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, generation);
        generation
    }

    /// Generation of the currently registered instance of `name`.
    pub fn generation(&self, name: &str) -> Option<u64> {
        self.models
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generation(name).is_some()
    }
}
