// src/domain/listing.rs

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    EntireHome,
    PrivateRoom,
    SharedRoom,
}

impl RoomType {
    pub const OPTIONS: &'static [&'static str] = &["Entire home/apt", "Private room", "Shared room"];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::EntireHome => "Entire home/apt",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Entire home/apt" => Some(RoomType::EntireHome),
            "Private room" => Some(RoomType::PrivateRoom),
            "Shared room" => Some(RoomType::SharedRoom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    Condominium,
    Loft,
}

impl PropertyType {
    pub const OPTIONS: &'static [&'static str] = &["Apartment", "House", "Condominium", "Loft"];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condominium => "Condominium",
            PropertyType::Loft => "Loft",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Apartment" => Some(PropertyType::Apartment),
            "House" => Some(PropertyType::House),
            "Condominium" => Some(PropertyType::Condominium),
            "Loft" => Some(PropertyType::Loft),
            _ => None,
        }
    }
}

/// Superhost is a two-way choice; anything else is rejected at collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Superhost {
    Yes,
    No,
}

impl Superhost {
    pub const OPTIONS: &'static [&'static str] = &["Yes", "No"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(Superhost::Yes),
            "No" => Some(Superhost::No),
            _ => None,
        }
    }

    /// Yes -> 1, No -> 0.
    pub fn encode(&self) -> i64 {
        match self {
            Superhost::Yes => 1,
            Superhost::No => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Amenity {
    Wifi,
    Kitchen,
    Parking,
    AirConditioning,
    Heating,
    Tv,
    Pool,
    Dryer,
    Washer,
}

impl Amenity {
    #[cfg(test)]
    pub const ALL: [Amenity; 9] = [
        Amenity::Wifi,
        Amenity::Kitchen,
        Amenity::Parking,
        Amenity::AirConditioning,
        Amenity::Heating,
        Amenity::Tv,
        Amenity::Pool,
        Amenity::Dryer,
        Amenity::Washer,
    ];

    /// Column name the trained pipeline uses for this amenity.
    pub fn column(&self) -> &'static str {
        match self {
            Amenity::Wifi => "amen_wifi",
            Amenity::Kitchen => "amen_kitchen",
            Amenity::Parking => "amen_parking",
            Amenity::AirConditioning => "amen_air_conditioning",
            Amenity::Heating => "amen_heating",
            Amenity::Tv => "amen_tv",
            Amenity::Pool => "amen_pool",
            Amenity::Dryer => "amen_dryer",
            Amenity::Washer => "amen_washer",
        }
    }

    /// Checkbox label shown on the form.
    pub const fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "WiFi",
            Amenity::Kitchen => "Kitchen",
            Amenity::Parking => "Parking",
            Amenity::AirConditioning => "Air Conditioning",
            Amenity::Heating => "Heating",
            Amenity::Tv => "TV",
            Amenity::Pool => "Pool",
            Amenity::Dryer => "Dryer",
            Amenity::Washer => "Washer",
        }
    }
}

/// Cities offered by the dropdown variant.
pub const CITIES: &[&str] = &[
    "Los Angeles",
    "New York",
    "San Francisco",
    "Chicago",
    "Boston",
    "Seattle",
    "Austin",
    "Miami",
    "Washington DC",
    "Denver",
    "San Diego",
    "Portland",
];

/// Everything a user entered on the form.
///
/// A field the active form variant never asks about stays `None` (or, for
/// amenities, absent from the map). It is not defaulted here: the assembler
/// decides what an absent column becomes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingInput {
    pub city: Option<String>,
    pub neighbourhood: Option<String>,
    pub room_type: Option<RoomType>,
    pub property_type: Option<PropertyType>,
    pub host_is_superhost: Option<Superhost>,

    pub accommodates: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub minimum_nights: Option<i64>,
    pub number_of_reviews: Option<i64>,
    pub review_scores_rating: Option<i64>,
    pub availability_365: Option<i64>,

    /// Only the amenities the form displayed; unchecked boxes are `false`.
    pub amenities: BTreeMap<Amenity, bool>,
}
