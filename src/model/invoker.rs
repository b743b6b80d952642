// src/model/invoker.rs

use tracing::info;

use crate::domain::assembler::assemble;
use crate::domain::feature_row::FeatureRow;
use crate::domain::listing::ListingInput;
use crate::domain::pricing::PredictionResult;
use crate::domain::variant::FormVariant;
use crate::model::{Artifacts, PredictError};

/// Runs one aligned row through the preprocessor and model and returns the
/// first (only) prediction.
pub fn invoke(row: &FeatureRow, artifacts: &Artifacts) -> Result<f64, PredictError> {
    let features = artifacts.preprocessor.transform(row)?;
    let predictions = artifacts.model.predict(std::slice::from_ref(&features))?;

    let value = predictions
        .first()
        .copied()
        .ok_or_else(|| PredictError::PredictFailure("model returned no predictions".into()))?;

    if !value.is_finite() {
        return Err(PredictError::PredictFailure(format!(
            "model returned a non-finite value ({value})"
        )));
    }

    Ok(value)
}

/// Assemble + invoke for one form submission.
pub fn predict_listing(
    input: &ListingInput,
    variant: FormVariant,
    artifacts: &Artifacts,
) -> Result<PredictionResult, PredictError> {
    let assembly = assemble(input, &variant.defaults(), artifacts.preprocessor.as_ref())?;
    let price = invoke(&assembly.row, artifacts)?;

    info!(
        variant = variant.slug(),
        zero_filled = assembly.filled.len(),
        price,
        "prediction served"
    );

    Ok(PredictionResult::new(price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{Amenity, RoomType, Superhost};
    use crate::model::{ColumnPipeline, Model, Regressor};

    fn fixture() -> Artifacts {
        let pre: ColumnPipeline = serde_json::from_str(
            r#"{
                "feature_names_in": ["accommodates", "bedrooms", "room_type", "amen_wifi", "log_price"],
                "transformers": [
                    {"kind": "passthrough", "columns": ["accommodates", "bedrooms"]},
                    {"kind": "one_hot", "columns": ["room_type"],
                     "categories": [["Entire home/apt", "Private room", "Shared room"]]},
                    {"kind": "passthrough", "columns": ["amen_wifi"]}
                ]
            }"#,
        )
        .unwrap();
        let model: Regressor = serde_json::from_str(
            r#"{"kind": "linear", "coef": [10.0, 20.0, 30.0, 0.0, -15.0, 5.0], "intercept": 50.0}"#,
        )
        .unwrap();
        Artifacts::from_parts(Box::new(model), Box::new(pre))
    }

    fn listing() -> ListingInput {
        ListingInput {
            city: Some("Los Angeles".into()),
            room_type: Some(RoomType::EntireHome),
            host_is_superhost: Some(Superhost::No),
            accommodates: Some(2),
            bedrooms: Some(1),
            bathrooms: Some(1.0),
            amenities: [(Amenity::Wifi, true)].into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn predicts_through_both_artifacts() {
        let result = predict_listing(&listing(), FormVariant::Standard, &fixture()).unwrap();
        // 2*10 + 1*20 + 30 (entire home) + 5 (wifi) + 50
        assert_eq!(result.price, 125.0);
    }

    #[test]
    fn repeated_predictions_are_bit_identical() {
        let artifacts = fixture();
        let first = predict_listing(&listing(), FormVariant::Standard, &artifacts).unwrap();
        for _ in 0..10 {
            let again = predict_listing(&listing(), FormVariant::Standard, &artifacts).unwrap();
            assert_eq!(again.price.to_bits(), first.price.to_bits());
        }
    }

    #[test]
    fn unseen_category_surfaces_as_transform_failure() {
        struct FixedRoom;
        impl crate::model::Preprocessor for FixedRoom {
            fn expected_columns(&self) -> Option<&[String]> {
                None
            }
            fn transform(&self, _row: &FeatureRow) -> Result<Vec<f64>, PredictError> {
                Err(PredictError::transform("room_type", "unknown category 'Yurt'"))
            }
        }
        let artifacts = fixture();
        let row = assemble(
            &listing(),
            &FormVariant::Standard.defaults(),
            artifacts.preprocessor.as_ref(),
        )
        .unwrap()
        .row;

        let broken = Artifacts::from_parts(
            Box::new(Regressor::Linear {
                coef: vec![1.0],
                intercept: 0.0,
                target: Default::default(),
            }),
            Box::new(FixedRoom),
        );
        assert!(matches!(
            invoke(&row, &broken),
            Err(PredictError::TransformFailure { .. })
        ));
    }

    #[test]
    fn empty_or_non_finite_model_output_is_an_error() {
        struct Silent;
        impl Model for Silent {
            fn predict(&self, _rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
                Ok(vec![])
            }
        }
        struct Overflow;
        impl Model for Overflow {
            fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
                Ok(rows.iter().map(|_| f64::INFINITY).collect())
            }
        }

        let pre = || -> Box<ColumnPipeline> {
            Box::new(
                serde_json::from_str(
                    r#"{"feature_names_in": ["accommodates"], "transformers": [
                        {"kind": "passthrough", "columns": ["accommodates"]}]}"#,
                )
                .unwrap(),
            )
        };

        for model in [
            Box::new(Silent) as Box<dyn Model>,
            Box::new(Overflow) as Box<dyn Model>,
        ] {
            let artifacts = Artifacts::from_parts(model, pre());
            assert!(matches!(
                predict_listing(&listing(), FormVariant::Standard, &artifacts),
                Err(PredictError::PredictFailure(_))
            ));
        }
    }
}
