//! # Recognized Fields
//!
//! Closed set of field names a response record may carry.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A recognized, canonical (lower-case) field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Applicant,
    LocationId,
    LocationDescription,
    Address,
    FoodItems,
    FacilityType,
    Status,
    Latitude,
    Longitude,
    DaysHours,
    ExpirationDate,
    ZipCodes,
    /// Derived map link, never present upstream
    GoogleMapsUrl,
}

impl Field {
    /// Every recognized field, in canonical response order
    pub const ALL: [Field; 13] = [
        Field::Applicant,
        Field::LocationId,
        Field::LocationDescription,
        Field::Address,
        Field::FoodItems,
        Field::FacilityType,
        Field::Status,
        Field::Latitude,
        Field::Longitude,
        Field::DaysHours,
        Field::ExpirationDate,
        Field::ZipCodes,
        Field::GoogleMapsUrl,
    ];

    /// Fields returned by `list` when the caller asks for nothing else
    pub const DEFAULTS: [Field; 3] = [Field::Applicant, Field::LocationId, Field::GoogleMapsUrl];

    /// Canonical key as it appears in a normalized record
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Applicant => "applicant",
            Field::LocationId => "locationid",
            Field::LocationDescription => "locationdescription",
            Field::Address => "address",
            Field::FoodItems => "fooditems",
            Field::FacilityType => "facilitytype",
            Field::Status => "status",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::DaysHours => "dayshours",
            Field::ExpirationDate => "expirationdate",
            Field::ZipCodes => "zipcodes",
            Field::GoogleMapsUrl => "googlemapsurl",
        }
    }

    /// Case-insensitive lookup. Surrounding whitespace is ignored.
    pub fn parse(name: &str) -> Option<Field> {
        let name = name.trim().to_lowercase();
        Field::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unrecognized field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s).ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
