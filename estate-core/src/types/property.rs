//! Property listing types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    Land,
    Office,
    Warehouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Rented,
    UnderContract,
    Maintenance,
}

/// Persisted property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub price: Decimal,
    /// Floor area in square metres
    pub area: Decimal,
    pub rooms: u32,
    pub bathrooms: u32,
    pub parking_spaces: u32,
    pub year_built: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to list a new property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub property_type: PropertyType,
    #[serde(default)]
    pub status: PropertyStatus,
    pub price: Decimal,
    pub area: Decimal,
    #[serde(default)]
    pub rooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub parking_spaces: u32,
    pub year_built: i32,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub price: Option<Decimal>,
    pub area: Option<Decimal>,
    pub rooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking_spaces: Option<u32>,
    pub year_built: Option<i32>,
}

impl PropertyPatch {
    /// Apply the supplied fields onto `property`
    pub fn apply(self, property: &mut Property) {
        if let Some(name) = self.name {
            property.name = name;
        }
        if let Some(address) = self.address {
            property.address = address;
        }
        if let Some(description) = self.description {
            property.description = Some(description);
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(area) = self.area {
            property.area = area;
        }
        if let Some(rooms) = self.rooms {
            property.rooms = rooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(parking_spaces) = self.parking_spaces {
            property.parking_spaces = parking_spaces;
        }
        if let Some(year_built) = self.year_built {
            property.year_built = year_built;
        }
    }
}

/// Optional filters for property search; every supplied bound must hold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyCriteria {
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_area: Option<Decimal>,
    pub max_area: Option<Decimal>,
}

impl PropertyCriteria {
    pub fn matches(&self, property: &Property) -> bool {
        self.property_type.map_or(true, |t| property.property_type == t)
            && self.status.map_or(true, |s| property.status == s)
            && self.min_price.map_or(true, |p| property.price >= p)
            && self.max_price.map_or(true, |p| property.price <= p)
            && self.min_area.map_or(true, |a| property.area >= a)
            && self.max_area.map_or(true, |a| property.area <= a)
    }
}
