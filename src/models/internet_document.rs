//! `InternetDocument` model: express waybills (EN), their price and delivery date.

use super::DEFAULT_PAGE;
use crate::{Properties, Transport};
use serde_json::{Map, Value};

model! {
    /// Express waybills: pricing, creation, listing and reports.
    InternetDocument => "InternetDocument"
}

/// Input for [`InternetDocument::get_document_price`].
#[derive(Debug, Clone, Default)]
pub struct DocumentPriceQuery {
    pub city_sender: String,
    pub city_recipient: String,
    /// Actual weight in kilograms.
    pub weight: f64,
    pub service_type: String,
    /// Declared value.
    pub cost: f64,
    pub cargo_type: String,
    pub seats_amount: u32,
    pub redelivery_calculate: Option<Map<String, Value>>,
    pub pack_count: Option<String>,
    pub pack_ref: Option<String>,
    pub amount: Option<String>,
    pub cargo_details: Option<Vec<Value>>,
    pub cargo_description: Option<String>,
}

/// Fields of a new waybill for [`InternetDocument::save`].
///
/// The API decides which combination is required (warehouse or address
/// delivery, private or organization recipient); everything left `None` is
/// not sent.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub payer_type: Option<String>,
    pub payment_method: Option<String>,
    pub date_time: Option<String>,
    pub cargo_type: Option<String>,
    pub weight: Option<f64>,
    pub service_type: Option<String>,
    pub seats_amount: Option<u32>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub city_sender: Option<String>,
    pub sender: Option<String>,
    pub sender_address: Option<String>,
    pub contact_sender: Option<String>,
    pub senders_phone: Option<String>,
    pub recipients_phone: Option<String>,
    pub city_recipient: Option<String>,
    pub recipient: Option<String>,
    pub recipient_address: Option<String>,
    pub contact_recipient: Option<String>,
    pub new_address: Option<String>,
    pub recipient_city_name: Option<String>,
    pub recipient_area: Option<String>,
    pub recipient_area_regions: Option<String>,
    pub recipient_address_name: Option<String>,
    pub recipient_house: Option<String>,
    pub recipient_flat: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_type: Option<String>,
    pub settlement_type: Option<String>,
    pub ownership_form: Option<String>,
    pub recipient_contact_name: Option<String>,
    pub edrpou: Option<String>,
    pub sender_warehouse_index: Option<String>,
    pub recipient_warehouse_index: Option<String>,
    pub volume_general: Option<f64>,
    pub options_seat: Option<Vec<Value>>,
    pub red_box_barcode: Option<String>,
    pub backward_delivery_data: Option<Vec<Value>>,
    pub recipient_address_note: Option<String>,
}

/// Full replacement of an existing waybill for [`InternetDocument::update`].
#[derive(Debug, Clone, Default)]
pub struct DocumentUpdate {
    pub ref_: String,
    pub payer_type: String,
    pub payment_method: String,
    pub date_time: String,
    pub cargo_type: String,
    pub weight: f64,
    pub service_type: String,
    pub seats_amount: u32,
    pub description: String,
    pub cost: f64,
    pub city_sender: String,
    pub sender: String,
    pub sender_address: String,
    pub contact_sender: String,
    pub senders_phone: String,
    pub city_recipient: String,
    pub recipient: String,
    pub recipient_address: String,
    pub contact_recipient: String,
    pub recipients_phone: String,
    pub volume_general: Option<f64>,
}

/// Date range for [`InternetDocument::get_document_list`] (`dd.mm.yyyy`).
#[derive(Debug, Clone)]
pub struct DocumentListQuery {
    pub date_time_from: String,
    pub date_time_to: String,
    pub page: u32,
    pub get_full_list: bool,
    pub date_time: Option<String>,
}

impl DocumentListQuery {
    pub fn new(date_time_from: impl Into<String>, date_time_to: impl Into<String>) -> Self {
        Self {
            date_time_from: date_time_from.into(),
            date_time_to: date_time_to.into(),
            page: DEFAULT_PAGE,
            get_full_list: true,
            date_time: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IncomingDocumentsQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub limit: Option<u32>,
}

impl<'c, T: Transport> InternetDocument<'c, T> {
    /// Estimate the delivery cost (`getDocumentPrice`).
    pub fn get_document_price(&self, query: DocumentPriceQuery) -> T::Output<'c> {
        self.call(
            "getDocumentPrice",
            Properties::new()
                .with("CitySender", query.city_sender)
                .with("CityRecipient", query.city_recipient)
                .with("Weight", query.weight)
                .with("ServiceType", query.service_type)
                .with("Cost", query.cost)
                .with("CargoType", query.cargo_type)
                .with("SeatsAmount", query.seats_amount)
                .with("RedeliveryCalculate", query.redelivery_calculate)
                .with("PackCount", query.pack_count)
                .with("PackRef", query.pack_ref)
                .with("Amount", query.amount)
                .with("CargoDetails", query.cargo_details)
                .with("CargoDescription", query.cargo_description),
        )
    }

    /// Estimate the delivery date (`getDocumentDeliveryDate`).
    pub fn get_document_delivery_date(
        &self,
        city_sender: &str,
        city_recipient: &str,
        service_type: &str,
        date_time: Option<&str>,
    ) -> T::Output<'c> {
        self.call(
            "getDocumentDeliveryDate",
            Properties::new()
                .with("CitySender", city_sender)
                .with("CityRecipient", city_recipient)
                .with("ServiceType", service_type)
                .with("DateTime", date_time),
        )
    }

    /// Create a waybill.
    pub fn save(&self, doc: NewDocument) -> T::Output<'c> {
        self.call(
            "save",
            Properties::new()
                .with("PayerType", doc.payer_type)
                .with("PaymentMethod", doc.payment_method)
                .with("DateTime", doc.date_time)
                .with("CargoType", doc.cargo_type)
                .with("Weight", doc.weight)
                .with("ServiceType", doc.service_type)
                .with("SeatsAmount", doc.seats_amount)
                .with("Description", doc.description)
                .with("Cost", doc.cost)
                .with("CitySender", doc.city_sender)
                .with("Sender", doc.sender)
                .with("SenderAddress", doc.sender_address)
                .with("ContactSender", doc.contact_sender)
                .with("SendersPhone", doc.senders_phone)
                .with("RecipientsPhone", doc.recipients_phone)
                .with("CityRecipient", doc.city_recipient)
                .with("Recipient", doc.recipient)
                .with("RecipientAddress", doc.recipient_address)
                .with("ContactRecipient", doc.contact_recipient)
                .with("NewAddress", doc.new_address)
                .with("RecipientCityName", doc.recipient_city_name)
                .with("RecipientArea", doc.recipient_area)
                .with("RecipientAreaRegions", doc.recipient_area_regions)
                .with("RecipientAddressName", doc.recipient_address_name)
                .with("RecipientHouse", doc.recipient_house)
                .with("RecipientFlat", doc.recipient_flat)
                .with("RecipientName", doc.recipient_name)
                .with("RecipientType", doc.recipient_type)
                .with("SettlementType", doc.settlement_type)
                .with("OwnershipForm", doc.ownership_form)
                .with("RecipientContactName", doc.recipient_contact_name)
                .with("EDRPOU", doc.edrpou)
                .with("SenderWarehouseIndex", doc.sender_warehouse_index)
                .with("RecipientWarehouseIndex", doc.recipient_warehouse_index)
                .with("VolumeGeneral", doc.volume_general)
                .with("OptionsSeat", doc.options_seat)
                .with("RedBoxBarcode", doc.red_box_barcode)
                .with("BackwardDeliveryData", doc.backward_delivery_data)
                .with("RecipientAddressNote", doc.recipient_address_note),
        )
    }

    pub fn update(&self, doc: DocumentUpdate) -> T::Output<'c> {
        self.call(
            "update",
            Properties::new()
                .with("Ref", doc.ref_)
                .with("PayerType", doc.payer_type)
                .with("PaymentMethod", doc.payment_method)
                .with("DateTime", doc.date_time)
                .with("CargoType", doc.cargo_type)
                .with("Weight", doc.weight)
                .with("ServiceType", doc.service_type)
                .with("SeatsAmount", doc.seats_amount)
                .with("Description", doc.description)
                .with("Cost", doc.cost)
                .with("CitySender", doc.city_sender)
                .with("Sender", doc.sender)
                .with("SenderAddress", doc.sender_address)
                .with("ContactSender", doc.contact_sender)
                .with("SendersPhone", doc.senders_phone)
                .with("CityRecipient", doc.city_recipient)
                .with("Recipient", doc.recipient)
                .with("RecipientAddress", doc.recipient_address)
                .with("ContactRecipient", doc.contact_recipient)
                .with("RecipientsPhone", doc.recipients_phone)
                .with("VolumeGeneral", doc.volume_general),
        )
    }

    pub fn get_document_list(&self, query: DocumentListQuery) -> T::Output<'c> {
        self.call(
            "getDocumentList",
            Properties::new()
                .with("DateTimeFrom", query.date_time_from)
                .with("DateTimeTo", query.date_time_to)
                .with("Page", query.page)
                .with("GetFullList", query.get_full_list)
                .with("DateTime", query.date_time),
        )
    }

    /// Waybills addressed to the phone number of the API key owner.
    pub fn get_incoming_documents_by_phone(&self, query: IncomingDocumentsQuery) -> T::Output<'c> {
        self.call(
            "getIncomingDocumentsByPhone",
            Properties::new()
                .with("DateFrom", query.date_from)
                .with("DateTo", query.date_to)
                .with("Limit", query.limit),
        )
    }

    pub fn delete(&self, document_refs: &str) -> T::Output<'c> {
        self.call(
            "delete",
            Properties::new().with("DocumentRefs", document_refs),
        )
    }

    /// Build a report (`Type` is `xls` or `csv`) over the given waybills.
    pub fn generate_report(&self, document_refs: &[&str], type_: &str, date_time: &str) -> T::Output<'c> {
        self.call(
            "generateReport",
            Properties::new()
                .with("DocumentRefs", document_refs)
                .with("Type", type_)
                .with("DateTime", date_time),
        )
    }
}
