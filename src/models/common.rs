//! `Common` model: reference directories (cargo types, pallets, service types...).

use super::DEFAULT_PAGE;
use crate::{Properties, Transport};

model! {
    /// Reference data shared by the other models.
    Common => "Common"
}

/// Filters for [`Common::get_pack_list`]. Dimensions are in millimetres.
#[derive(Debug, Clone, Default)]
pub struct PackListQuery {
    pub length: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub volumetric_weight: Option<u32>,
    pub type_of_packing: Option<String>,
}

impl<'c, T: Transport> Common<'c, T> {
    /// Delivery time windows available for a recipient city.
    pub fn get_time_intervals(&self, recipient_city_ref: &str, date_time: Option<&str>) -> T::Output<'c> {
        self.call(
            "getTimeIntervals",
            Properties::new()
                .with("RecipientCityRef", recipient_city_ref)
                .with("DateTime", date_time),
        )
    }

    pub fn get_cargo_types(&self) -> T::Output<'c> {
        self.call("getCargoTypes", Properties::new())
    }

    pub fn get_backward_delivery_cargo_types(&self) -> T::Output<'c> {
        self.call("getBackwardDeliveryCargoTypes", Properties::new())
    }

    pub fn get_pallets_list(&self) -> T::Output<'c> {
        self.call("getPalletsList", Properties::new())
    }

    pub fn get_types_of_payers_for_redelivery(&self) -> T::Output<'c> {
        self.call("getTypesOfPayersForRedelivery", Properties::new())
    }

    pub fn get_pack_list(&self, query: PackListQuery) -> T::Output<'c> {
        self.call(
            "getPackList",
            Properties::new()
                .with("Length", query.length)
                .with("Width", query.width)
                .with("Height", query.height)
                .with("VolumetricWeight", query.volumetric_weight)
                .with("TypeOfPacking", query.type_of_packing),
        )
    }

    pub fn get_tires_wheels_list(&self) -> T::Output<'c> {
        self.call("getTiresWheelsList", Properties::new())
    }

    pub fn get_cargo_description_list(
        &self,
        find_by_string: Option<&str>,
        page: Option<u32>,
    ) -> T::Output<'c> {
        self.call(
            "getCargoDescriptionList",
            Properties::new()
                .with("FindByString", find_by_string)
                .with("Page", page.unwrap_or(DEFAULT_PAGE)),
        )
    }

    pub fn get_message_code_text(&self) -> T::Output<'c> {
        self.call("getMessageCodeText", Properties::new())
    }

    pub fn get_service_types(&self) -> T::Output<'c> {
        self.call("getServiceTypes", Properties::new())
    }

    pub fn get_ownership_forms_list(&self) -> T::Output<'c> {
        self.call("getOwnershipFormsList", Properties::new())
    }
}
