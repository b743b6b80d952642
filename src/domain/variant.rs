// src/domain/variant.rs

use crate::domain::listing::{Amenity, PropertyType, RoomType, Superhost, CITIES};

/// Approximate Los Angeles coordinates. Every variant feeds these to the
/// model regardless of the city entered.
pub const LA_LATITUDE: f64 = 34.0522;
pub const LA_LONGITUDE: f64 = -118.2437;

/// A listing attribute the form can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    City,
    Neighbourhood,
    RoomType,
    PropertyType,
    HostIsSuperhost,
    Accommodates,
    Bedrooms,
    Bathrooms,
    MinimumNights,
    NumberOfReviews,
    ReviewScoresRating,
    Availability365,
    Amenity(Amenity),
}

impl Field {
    /// Form input name; also the feature column it feeds.
    pub fn name(&self) -> &'static str {
        match self {
            Field::City => "city",
            Field::Neighbourhood => "neighbourhood",
            Field::RoomType => "room_type",
            Field::PropertyType => "property_type",
            Field::HostIsSuperhost => "host_is_superhost",
            Field::Accommodates => "accommodates",
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::MinimumNights => "minimum_nights",
            Field::NumberOfReviews => "number_of_reviews",
            Field::ReviewScoresRating => "review_scores_rating",
            Field::Availability365 => "availability_365",
            Field::Amenity(a) => a.column(),
        }
    }
}

/// The accepted values of one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    Text {
        default: &'static str,
    },
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
    Integer {
        min: i64,
        max: i64,
        default: i64,
    },
    Decimal {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub domain: Domain,
}

const fn spec(field: Field, label: &'static str, domain: Domain) -> FieldSpec {
    FieldSpec {
        field,
        label,
        domain,
    }
}

const fn amenity(a: Amenity) -> FieldSpec {
    spec(Field::Amenity(a), a.label(), Domain::Flag)
}

const CITY_TEXT: FieldSpec = spec(
    Field::City,
    "City",
    Domain::Text {
        default: "Los Angeles",
    },
);
const NEIGHBOURHOOD: FieldSpec = spec(
    Field::Neighbourhood,
    "Neighbourhood",
    Domain::Text {
        default: "Hollywood",
    },
);
const ROOM_TYPE: FieldSpec = spec(
    Field::RoomType,
    "Room Type",
    Domain::Choice {
        options: RoomType::OPTIONS,
        default: "Entire home/apt",
    },
);
const PROPERTY_TYPE: FieldSpec = spec(
    Field::PropertyType,
    "Property Type",
    Domain::Choice {
        options: PropertyType::OPTIONS,
        default: "Apartment",
    },
);
const ACCOMMODATES: FieldSpec = spec(
    Field::Accommodates,
    "Accommodates",
    Domain::Integer {
        min: 1,
        max: 16,
        default: 2,
    },
);
const BEDROOMS: FieldSpec = spec(
    Field::Bedrooms,
    "Bedrooms",
    Domain::Integer {
        min: 0,
        max: 10,
        default: 1,
    },
);
const BATHROOMS: FieldSpec = spec(
    Field::Bathrooms,
    "Bathrooms",
    Domain::Decimal {
        min: 0.0,
        max: 10.0,
        step: 0.5,
        default: 1.0,
    },
);
const NUMBER_OF_REVIEWS: FieldSpec = spec(
    Field::NumberOfReviews,
    "Number of Reviews",
    Domain::Integer {
        min: 0,
        max: 5000,
        default: 10,
    },
);
const REVIEW_SCORE: FieldSpec = spec(
    Field::ReviewScoresRating,
    "Review Score (0–100)",
    Domain::Integer {
        min: 0,
        max: 100,
        default: 90,
    },
);
const SUPERHOST: FieldSpec = spec(
    Field::HostIsSuperhost,
    "Host is Superhost?",
    Domain::Choice {
        options: Superhost::OPTIONS,
        default: "Yes",
    },
);
const AVAILABILITY: FieldSpec = spec(
    Field::Availability365,
    "Availability (days/year)",
    Domain::Integer {
        min: 0,
        max: 365,
        default: 120,
    },
);
const MINIMUM_NIGHTS: FieldSpec = spec(
    Field::MinimumNights,
    "Minimum Nights",
    Domain::Integer {
        min: 1,
        max: 365,
        default: 1,
    },
);

static STANDARD_FIELDS: &[FieldSpec] = &[
    CITY_TEXT,
    NEIGHBOURHOOD,
    ROOM_TYPE,
    PROPERTY_TYPE,
    ACCOMMODATES,
    BEDROOMS,
    BATHROOMS,
    NUMBER_OF_REVIEWS,
    REVIEW_SCORE,
    SUPERHOST,
    AVAILABILITY,
    amenity(Amenity::Wifi),
    amenity(Amenity::Kitchen),
    amenity(Amenity::Parking),
    amenity(Amenity::AirConditioning),
    amenity(Amenity::Heating),
    amenity(Amenity::Tv),
    amenity(Amenity::Pool),
    amenity(Amenity::Dryer),
    amenity(Amenity::Washer),
];

static CITY_PICKER_FIELDS: &[FieldSpec] = &[
    spec(
        Field::City,
        "City",
        Domain::Choice {
            options: CITIES,
            default: "Los Angeles",
        },
    ),
    ROOM_TYPE,
    PROPERTY_TYPE,
    ACCOMMODATES,
    BEDROOMS,
    BATHROOMS,
    NUMBER_OF_REVIEWS,
    REVIEW_SCORE,
    SUPERHOST,
    AVAILABILITY,
    amenity(Amenity::Wifi),
    amenity(Amenity::Kitchen),
    amenity(Amenity::Parking),
    amenity(Amenity::AirConditioning),
    amenity(Amenity::Heating),
    amenity(Amenity::Tv),
    amenity(Amenity::Pool),
    amenity(Amenity::Dryer),
    amenity(Amenity::Washer),
];

static STAY_RULES_FIELDS: &[FieldSpec] = &[
    CITY_TEXT,
    ROOM_TYPE,
    ACCOMMODATES,
    BEDROOMS,
    BATHROOMS,
    MINIMUM_NIGHTS,
    SUPERHOST,
    amenity(Amenity::Wifi),
    amenity(Amenity::Kitchen),
    amenity(Amenity::Parking),
    amenity(Amenity::AirConditioning),
    amenity(Amenity::Heating),
    amenity(Amenity::Tv),
];

/// Columns the training process saw but the form never collects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralDefaults {
    pub latitude: f64,
    pub longitude: f64,
    pub minimum_nights: i64,
    /// Columns the pipeline expects to exist, always fed as `0`.
    pub placeholders: &'static [&'static str],
}

impl Default for StructuralDefaults {
    fn default() -> Self {
        Self {
            latitude: LA_LATITUDE,
            longitude: LA_LONGITUDE,
            minimum_nights: 1,
            placeholders: &["log_price"],
        }
    }
}

/// The three shapes of the listing form. They differ only in which fields
/// are shown; assembly and prediction are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    #[default]
    Standard,
    CityPicker,
    StayRules,
}

impl FormVariant {
    pub const ALL: [FormVariant; 3] = [
        FormVariant::Standard,
        FormVariant::CityPicker,
        FormVariant::StayRules,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            FormVariant::Standard => "standard",
            FormVariant::CityPicker => "city-picker",
            FormVariant::StayRules => "stay-rules",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormVariant::Standard => "Listing details",
            FormVariant::CityPicker => "Listing details (pick a city)",
            FormVariant::StayRules => "Listing details and stay rules",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormVariant::Standard => STANDARD_FIELDS,
            FormVariant::CityPicker => CITY_PICKER_FIELDS,
            FormVariant::StayRules => STAY_RULES_FIELDS,
        }
    }

    pub fn defaults(&self) -> StructuralDefaults {
        // TODO: derive coordinates from the selected city once a city -> geo
        // table is agreed with whoever owns the training data.
        StructuralDefaults::default()
    }
}
