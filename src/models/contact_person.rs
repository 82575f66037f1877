use crate::{Properties, Transport};

model! {
    /// Contact persons attached to a counterparty.
    ContactPerson => "ContactPerson"
}

#[derive(Debug, Clone, Default)]
pub struct ContactPersonData {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub counterparty_ref: String,
}

impl ContactPersonData {
    fn properties(self) -> Properties {
        Properties::new()
            .with("FirstName", self.first_name)
            .with("MiddleName", self.middle_name)
            .with("LastName", self.last_name)
            .with("Phone", self.phone)
            .with("Email", self.email)
            .with("CounterpartyRef", self.counterparty_ref)
    }
}

impl<'c, T: Transport> ContactPerson<'c, T> {
    pub fn save(&self, data: ContactPersonData) -> T::Output<'c> {
        self.call("save", data.properties())
    }

    pub fn update(&self, ref_: &str, data: ContactPersonData) -> T::Output<'c> {
        self.call("update", data.properties().with("Ref", ref_))
    }

    pub fn delete(&self, ref_: &str) -> T::Output<'c> {
        self.call("delete", Properties::new().with("Ref", ref_))
    }
}
