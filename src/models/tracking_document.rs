use crate::{Properties, Transport};
use serde_json::{Value, json};

model! {
    /// Shipment status tracking.
    TrackingDocument => "TrackingDocument"
}

/// One waybill to look up in [`TrackingDocument::get_status_documents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedDocument {
    pub document_number: String,
    /// Sender or recipient phone; unlocks the full status record.
    pub phone: Option<String>,
}

impl TrackedDocument {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl From<TrackedDocument> for Value {
    fn from(doc: TrackedDocument) -> Self {
        match doc.phone {
            Some(phone) => json!({ "DocumentNumber": doc.document_number, "Phone": phone }),
            None => json!({ "DocumentNumber": doc.document_number }),
        }
    }
}

impl<'c, T: Transport> TrackingDocument<'c, T> {
    pub fn get_status_documents(&self, documents: Vec<TrackedDocument>) -> T::Output<'c> {
        self.call(
            "getStatusDocuments",
            Properties::new().with("Documents", documents),
        )
    }
}
