//! `AdditionalService` model: returns, redirection and waybill change orders.

use super::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::{IntoProperty, Properties, Transport};

model! {
    /// Orders that modify an already shipped waybill.
    AdditionalService => "AdditionalService"
}

/// Return order for [`AdditionalService::save`].
#[derive(Debug, Clone)]
pub struct ReturnOrder {
    pub int_doc_number: String,
    pub payment_method: String,
    pub note: String,
    pub order_type: String,
    pub reason: Option<String>,
    pub sub_type_reason: Option<String>,
    pub return_address_ref: Option<String>,
    pub sender_contact_name: Option<String>,
    pub sender_phone: Option<String>,
    pub recipient: Option<String>,
    pub recipient_contact_name: Option<String>,
    pub recipient_phone: Option<String>,
    pub payer_type: Option<String>,
    pub customer: Option<String>,
    pub service_type: Option<String>,
    pub recipient_settlement: Option<String>,
    pub recipient_settlement_street: Option<String>,
    pub building_number: Option<String>,
    pub note_address_recipient: Option<String>,
    pub recipient_warehouse: Option<String>,
}

impl ReturnOrder {
    /// Order type used unless overridden.
    pub const CARGO_RETURN: &'static str = "orderCargoReturn";

    pub fn new(
        int_doc_number: impl Into<String>,
        payment_method: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            int_doc_number: int_doc_number.into(),
            payment_method: payment_method.into(),
            note: note.into(),
            order_type: Self::CARGO_RETURN.to_string(),
            reason: None,
            sub_type_reason: None,
            return_address_ref: None,
            sender_contact_name: None,
            sender_phone: None,
            recipient: None,
            recipient_contact_name: None,
            recipient_phone: None,
            payer_type: None,
            customer: None,
            service_type: None,
            recipient_settlement: None,
            recipient_settlement_street: None,
            building_number: None,
            note_address_recipient: None,
            recipient_warehouse: None,
        }
    }
}

/// Filters shared by the return and redirection order lists.
#[derive(Debug, Clone)]
pub struct OrdersQuery {
    pub number: Option<String>,
    pub ref_: Option<String>,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            number: None,
            ref_: None,
            begin_date: None,
            end_date: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl OrdersQuery {
    fn properties(self) -> Properties {
        Properties::new()
            .with("Number", self.number)
            .with("Ref", self.ref_)
            .with("BeginDate", self.begin_date)
            .with("EndDate", self.end_date)
            .with("Page", self.page)
            .with("Limit", self.limit)
    }
}

/// Filters for [`AdditionalService::get_change_ew_orders_list`]; the date range is mandatory.
#[derive(Debug, Clone)]
pub struct ChangeOrdersQuery {
    pub begin_date: String,
    pub end_date: String,
    pub number: Option<String>,
    pub ref_: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ChangeOrdersQuery {
    pub fn new(begin_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            begin_date: begin_date.into(),
            end_date: end_date.into(),
            number: None,
            ref_: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl<'c, T: Transport> AdditionalService<'c, T> {
    /// `number` may be a string or an integer waybill number.
    pub fn check_possibility_create_return(&self, number: impl IntoProperty) -> T::Output<'c> {
        self.call(
            "CheckPossibilityCreateReturn",
            Properties::new().with("Number", number),
        )
    }

    pub fn get_return_reasons(&self) -> T::Output<'c> {
        self.call("getReturnReasons", Properties::new())
    }

    pub fn get_return_reasons_subtypes(&self, reason_ref: &str) -> T::Output<'c> {
        self.call(
            "getReturnReasonsSubtypes",
            Properties::new().with("ReasonRef", reason_ref),
        )
    }

    /// Create a return order.
    pub fn save(&self, order: ReturnOrder) -> T::Output<'c> {
        self.call(
            "save",
            Properties::new()
                .with("IntDocNumber", order.int_doc_number)
                .with("PaymentMethod", order.payment_method)
                .with("Reason", order.reason)
                .with("SubtypeReason", order.sub_type_reason)
                .with("OrderType", order.order_type)
                .with("ReturnAddressRef", order.return_address_ref)
                .with("Note", order.note)
                .with("SenderContactName", order.sender_contact_name)
                .with("SenderPhone", order.sender_phone)
                .with("Recipient", order.recipient)
                .with("RecipientContactName", order.recipient_contact_name)
                .with("RecipientPhone", order.recipient_phone)
                .with("PayerType", order.payer_type)
                .with("Customer", order.customer)
                .with("ServiceType", order.service_type)
                .with("RecipientSettlement", order.recipient_settlement)
                .with("RecipientSettlementStreet", order.recipient_settlement_street)
                .with("BuildingNumber", order.building_number)
                .with("NoteAddressRecipient", order.note_address_recipient)
                .with("RecipientWarehouse", order.recipient_warehouse),
        )
    }

    pub fn get_return_orders_list(&self, query: OrdersQuery) -> T::Output<'c> {
        self.call("getReturnOrdersList", query.properties())
    }

    /// Cancel a return order.
    pub fn delete(&self, ref_: &str) -> T::Output<'c> {
        self.call("delete", Properties::new().with("Ref", ref_))
    }

    pub fn check_possibility_change_ew(&self, int_doc_number: impl IntoProperty) -> T::Output<'c> {
        self.call(
            "CheckPossibilityChangeEW",
            Properties::new().with("IntDocNumber", int_doc_number),
        )
    }

    pub fn get_change_ew_orders_list(&self, query: ChangeOrdersQuery) -> T::Output<'c> {
        self.call(
            "getChangeEWOrdersList",
            Properties::new()
                .with("Number", query.number)
                .with("Ref", query.ref_)
                .with("BeginDate", query.begin_date)
                .with("EndDate", query.end_date)
                .with("Page", query.page)
                .with("Limit", query.limit),
        )
    }

    pub fn check_possibility_for_redirecting(&self, number: impl IntoProperty) -> T::Output<'c> {
        self.call(
            "checkPossibilityForRedirecting",
            Properties::new().with("Number", number),
        )
    }

    pub fn get_redirection_orders_list(&self, query: OrdersQuery) -> T::Output<'c> {
        self.call("getRedirectionOrdersList", query.properties())
    }
}
