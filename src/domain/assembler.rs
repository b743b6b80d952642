// src/domain/assembler.rs

use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::feature_row::{FeatureRow, FeatureValue, ModelSchema};
use crate::domain::listing::ListingInput;
use crate::domain::variant::StructuralDefaults;
use crate::model::{PredictError, Preprocessor};

/// Column name -> value, before alignment with a schema.
pub type RawRecord = BTreeMap<String, FeatureValue>;

/// A schema-aligned row plus what alignment had to do to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub row: FeatureRow,
    /// Schema columns nobody supplied, filled with `0`.
    pub filled: Vec<String>,
    /// Collected columns the schema does not know.
    pub dropped: Vec<String>,
}

/// Builds the unaligned record: structural defaults first, then whatever the
/// user entered, so a collected field wins over its default.
pub fn build_raw_record(input: &ListingInput, defaults: &StructuralDefaults) -> RawRecord {
    let mut raw = RawRecord::new();

    raw.insert("latitude".into(), defaults.latitude.into());
    raw.insert("longitude".into(), defaults.longitude.into());
    raw.insert("minimum_nights".into(), defaults.minimum_nights.into());
    for placeholder in defaults.placeholders {
        raw.insert(placeholder.to_string(), FeatureValue::Int(0));
    }

    let mut put = |column: &str, value: Option<FeatureValue>| {
        if let Some(v) = value {
            raw.insert(column.to_string(), v);
        }
    };

    put("city", input.city.clone().map(FeatureValue::from));
    put(
        "neighbourhood",
        input.neighbourhood.clone().map(FeatureValue::from),
    );
    put("room_type", input.room_type.map(|r| r.label().into()));
    put("property_type", input.property_type.map(|p| p.label().into()));
    put(
        "host_is_superhost",
        input.host_is_superhost.map(|s| s.encode().into()),
    );
    put("accommodates", input.accommodates.map(FeatureValue::from));
    put("bedrooms", input.bedrooms.map(FeatureValue::from));
    put("bathrooms", input.bathrooms.map(FeatureValue::from));
    put("minimum_nights", input.minimum_nights.map(FeatureValue::from));
    put(
        "number_of_reviews",
        input.number_of_reviews.map(FeatureValue::from),
    );
    put(
        "review_scores_rating",
        input.review_scores_rating.map(FeatureValue::from),
    );
    put(
        "availability_365",
        input.availability_365.map(FeatureValue::from),
    );

    for (amenity, checked) in &input.amenities {
        put(amenity.column(), Some(FeatureValue::Int(i64::from(*checked))));
    }

    raw
}

/// Keeps exactly the schema's columns in schema order, filling any the record
/// lacks with `0`.
pub fn align_to_schema(mut raw: RawRecord, schema: &ModelSchema) -> Assembly {
    let mut filled = Vec::new();
    let cells = schema
        .columns()
        .iter()
        .map(|col| {
            let value = raw.remove(col).unwrap_or_else(|| {
                filled.push(col.clone());
                FeatureValue::Int(0)
            });
            (col.clone(), value)
        })
        .collect();

    Assembly {
        row: FeatureRow::from_cells(cells),
        filled,
        dropped: raw.into_keys().collect(),
    }
}

/// Produces the row for `preprocessor`, reading its schema now rather than
/// trusting any earlier copy.
pub fn assemble(
    input: &ListingInput,
    defaults: &StructuralDefaults,
    preprocessor: &dyn Preprocessor,
) -> Result<Assembly, PredictError> {
    let schema = preprocessor.schema()?;
    let assembly = align_to_schema(build_raw_record(input, defaults), &schema);

    debug!(
        columns = assembly.row.len(),
        filled = ?assembly.filled,
        dropped = ?assembly.dropped,
        "feature row assembled"
    );

    Ok(assembly)
}
