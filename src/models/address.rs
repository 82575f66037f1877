//! `Address` model: settlements, cities, streets, warehouses and saved addresses.

use super::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::{Properties, Transport};

model! {
    /// Geography lookups and counterparty address management.
    Address => "Address"
}

/// Filters for [`Address::get_settlements`].
#[derive(Debug, Clone)]
pub struct SettlementsQuery {
    pub area_ref: Option<String>,
    pub ref_: Option<String>,
    pub region_ref: Option<String>,
    pub page: u32,
    /// Only settlements that have a warehouse.
    pub warehouse: bool,
    pub find_by_string: Option<String>,
    pub limit: u32,
}

impl Default for SettlementsQuery {
    fn default() -> Self {
        Self {
            area_ref: None,
            ref_: None,
            region_ref: None,
            page: DEFAULT_PAGE,
            warehouse: true,
            find_by_string: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Filters for [`Address::get_cities`].
#[derive(Debug, Clone)]
pub struct CitiesQuery {
    pub ref_: Option<String>,
    pub find_by_string: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for CitiesQuery {
    fn default() -> Self {
        Self {
            ref_: None,
            find_by_string: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Filters for [`Address::get_warehouses`].
#[derive(Debug, Clone)]
pub struct WarehousesQuery {
    pub bicycle_parking: Option<bool>,
    pub post_finance: Option<bool>,
    pub city_name: Option<String>,
    pub city_ref: Option<String>,
    pub page: u32,
    pub find_by_string: Option<String>,
    pub limit: u32,
    pub settlement_ref: Option<String>,
    pub type_of_warehouse_ref: Option<String>,
    pub warehouse_id: Option<String>,
}

impl Default for WarehousesQuery {
    fn default() -> Self {
        Self {
            bicycle_parking: None,
            post_finance: None,
            city_name: None,
            city_ref: None,
            page: DEFAULT_PAGE,
            find_by_string: None,
            limit: DEFAULT_LIMIT,
            settlement_ref: None,
            type_of_warehouse_ref: None,
            warehouse_id: None,
        }
    }
}

/// Fields for [`Address::update`]. Only `ref_` is required.
#[derive(Debug, Clone, Default)]
pub struct AddressUpdate {
    pub ref_: String,
    pub street_ref: Option<String>,
    pub building_number: Option<String>,
    pub flat: Option<String>,
    pub note: Option<String>,
    pub counterparty_ref: Option<String>,
}

impl<'c, T: Transport> Address<'c, T> {
    /// Search settlements by name (`searchSettlements`).
    ///
    /// `limit` and `page` fall back to 50 and 1.
    pub fn search_settlements(
        &self,
        city_name: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> T::Output<'c> {
        self.call(
            "searchSettlements",
            Properties::new()
                .with("CityName", city_name)
                .with("Limit", limit.unwrap_or(DEFAULT_LIMIT))
                .with("Page", page.unwrap_or(DEFAULT_PAGE)),
        )
    }

    /// Search streets of a settlement (`searchSettlementStreets`).
    pub fn search_settlement_streets(
        &self,
        street_name: &str,
        settlement_ref: &str,
        limit: Option<u32>,
    ) -> T::Output<'c> {
        self.call(
            "searchSettlementStreets",
            Properties::new()
                .with("StreetName", street_name)
                .with("SettlementRef", settlement_ref)
                .with("Limit", limit.unwrap_or(DEFAULT_LIMIT)),
        )
    }

    /// Save a counterparty address.
    pub fn save(
        &self,
        counterparty_ref: &str,
        street_ref: &str,
        building_number: &str,
        flat: &str,
        note: Option<&str>,
    ) -> T::Output<'c> {
        self.call(
            "save",
            Properties::new()
                .with("CounterpartyRef", counterparty_ref)
                .with("StreetRef", street_ref)
                .with("BuildingNumber", building_number)
                .with("Flat", flat)
                .with("Note", note),
        )
    }

    pub fn delete(&self, ref_: &str) -> T::Output<'c> {
        self.call("delete", Properties::new().with("Ref", ref_))
    }

    pub fn update(&self, update: AddressUpdate) -> T::Output<'c> {
        self.call(
            "update",
            Properties::new()
                .with("Ref", update.ref_)
                .with("StreetRef", update.street_ref)
                .with("BuildingNumber", update.building_number)
                .with("Flat", update.flat)
                .with("Note", update.note)
                .with("CounterpartyRef", update.counterparty_ref),
        )
    }

    pub fn get_settlements(&self, query: SettlementsQuery) -> T::Output<'c> {
        self.call(
            "getSettlements",
            Properties::new()
                .with("AreaRef", query.area_ref)
                .with("Ref", query.ref_)
                .with("RegionRef", query.region_ref)
                .with("Page", query.page)
                .with("Warehouse", query.warehouse)
                .with("FindByString", query.find_by_string)
                .with("Limit", query.limit),
        )
    }

    pub fn get_cities(&self, query: CitiesQuery) -> T::Output<'c> {
        self.call(
            "getCities",
            Properties::new()
                .with("Ref", query.ref_)
                .with("Page", query.page)
                .with("FindByString", query.find_by_string)
                .with("Limit", query.limit),
        )
    }

    pub fn get_areas(&self) -> T::Output<'c> {
        self.call("getAreas", Properties::new())
    }

    /// List warehouses (`getWarehouses`). Boolean filters are sent as `"1"`/`"0"`.
    pub fn get_warehouses(&self, query: WarehousesQuery) -> T::Output<'c> {
        self.call(
            "getWarehouses",
            Properties::new()
                .with("BicycleParking", query.bicycle_parking)
                .with("PostFinance", query.post_finance)
                .with("CityName", query.city_name)
                .with("CityRef", query.city_ref)
                .with("Page", query.page)
                .with("FindByString", query.find_by_string)
                .with("Limit", query.limit)
                .with("SettlementRef", query.settlement_ref)
                .with("TypeOfWarehouseRef", query.type_of_warehouse_ref)
                .with("WarehouseId", query.warehouse_id),
        )
    }

    pub fn get_warehouse_types(&self) -> T::Output<'c> {
        self.call("getWarehouseTypes", Properties::new())
    }

    /// Find streets of a city (`getStreet`).
    pub fn get_street(
        &self,
        city_ref: &str,
        find_by_string: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> T::Output<'c> {
        self.call(
            "getStreet",
            Properties::new()
                .with("CityRef", city_ref)
                .with("FindByString", find_by_string)
                .with("Page", page.unwrap_or(DEFAULT_PAGE))
                .with("Limit", limit.unwrap_or(DEFAULT_LIMIT)),
        )
    }

    pub fn get_settlement_country_region(&self, area_ref: &str) -> T::Output<'c> {
        self.call(
            "getSettlementCountryRegion",
            Properties::new().with("AreaRef", area_ref),
        )
    }

    pub fn get_settlement_areas(&self, ref_: &str) -> T::Output<'c> {
        self.call("getSettlementAreas", Properties::new().with("Ref", ref_))
    }
}
