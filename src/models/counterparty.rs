use super::DEFAULT_PAGE;
use crate::{Properties, Transport};

model! {
    /// Senders and recipients registered under the API key.
    Counterparty => "Counterparty"
}

/// A new person or organization for [`Counterparty::save`].
#[derive(Debug, Clone, Default)]
pub struct CounterpartyData {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    /// `PrivatePerson` or `Organization`.
    pub counterparty_type: String,
    /// Company code; organizations only.
    pub edrpou: Option<String>,
    /// `Sender`, `Recipient` or `ThirdPerson`.
    pub counterparty_property: String,
    pub city_ref: String,
}

/// Replacement data for [`Counterparty::update`]. The company code cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct CounterpartyUpdate {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub counterparty_type: String,
    pub counterparty_property: String,
    pub city_ref: String,
}

impl<'c, T: Transport> Counterparty<'c, T> {
    pub fn save(&self, data: CounterpartyData) -> T::Output<'c> {
        self.call(
            "save",
            Properties::new()
                .with("FirstName", data.first_name)
                .with("MiddleName", data.middle_name)
                .with("LastName", data.last_name)
                .with("Phone", data.phone)
                .with("Email", data.email)
                .with("CounterpartyType", data.counterparty_type)
                .with("EDRPOU", data.edrpou)
                .with("CounterpartyProperty", data.counterparty_property)
                .with("CityRef", data.city_ref),
        )
    }

    pub fn update(&self, ref_: &str, data: CounterpartyUpdate) -> T::Output<'c> {
        self.call(
            "update",
            Properties::new()
                .with("Ref", ref_)
                .with("FirstName", data.first_name)
                .with("MiddleName", data.middle_name)
                .with("LastName", data.last_name)
                .with("Phone", data.phone)
                .with("Email", data.email)
                .with("CounterpartyType", data.counterparty_type)
                .with("CounterpartyProperty", data.counterparty_property)
                .with("CityRef", data.city_ref),
        )
    }

    pub fn delete(&self, ref_: &str) -> T::Output<'c> {
        self.call("delete", Properties::new().with("Ref", ref_))
    }

    pub fn get_counterparty_addresses(
        &self,
        ref_: &str,
        counterparty_property: Option<&str>,
    ) -> T::Output<'c> {
        self.call(
            "getCounterpartyAddresses",
            Properties::new()
                .with("Ref", ref_)
                .with("CounterpartyProperty", counterparty_property),
        )
    }

    pub fn get_counterparty_options(&self, ref_: &str) -> T::Output<'c> {
        self.call(
            "getCounterpartyOptions",
            Properties::new().with("Ref", ref_),
        )
    }

    pub fn get_counterparty_contact_persons(&self, ref_: &str, page: Option<u32>) -> T::Output<'c> {
        self.call(
            "getCounterpartyContactPersons",
            Properties::new()
                .with("Ref", ref_)
                .with("Page", page.unwrap_or(DEFAULT_PAGE)),
        )
    }

    /// List counterparties with the given property (`Sender`, `Recipient`, ...).
    pub fn get_counterparties(&self, counterparty_property: &str, page: Option<u32>) -> T::Output<'c> {
        self.call(
            "getCounterparties",
            Properties::new()
                .with("CounterpartyProperty", counterparty_property)
                .with("Page", page.unwrap_or(DEFAULT_PAGE)),
        )
    }
}
