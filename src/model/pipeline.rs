// src/model/pipeline.rs

use serde::Deserialize;

use crate::domain::feature_row::{FeatureRow, FeatureValue};
use crate::model::{PredictError, Preprocessor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    Ignore,
}

/// One step of the column transformer. Each step reads its own columns and
/// appends its outputs to the feature vector.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transformer {
    StandardScaler {
        columns: Vec<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    },
    OneHot {
        columns: Vec<String>,
        categories: Vec<Vec<String>>,
        #[serde(default)]
        handle_unknown: HandleUnknown,
    },
    Passthrough {
        columns: Vec<String>,
    },
}

impl Transformer {
    pub fn columns(&self) -> &[String] {
        match self {
            Transformer::StandardScaler { columns, .. }
            | Transformer::OneHot { columns, .. }
            | Transformer::Passthrough { columns } => columns,
        }
    }

    /// Number of values this step contributes.
    pub fn width(&self) -> usize {
        match self {
            Transformer::OneHot { categories, .. } => categories.iter().map(Vec::len).sum(),
            other => other.columns().len(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Transformer::StandardScaler {
                columns,
                mean,
                scale,
            } => {
                if mean.len() != columns.len() || scale.len() != columns.len() {
                    return Err(format!(
                        "standard_scaler has {} columns but {} means and {} scales",
                        columns.len(),
                        mean.len(),
                        scale.len()
                    ));
                }
            }
            Transformer::OneHot {
                columns,
                categories,
                ..
            } => {
                if categories.len() != columns.len() {
                    return Err(format!(
                        "one_hot has {} columns but {} category lists",
                        columns.len(),
                        categories.len()
                    ));
                }
            }
            Transformer::Passthrough { .. } => {}
        }
        Ok(())
    }

    fn apply(&self, row: &FeatureRow, out: &mut Vec<f64>) -> Result<(), PredictError> {
        match self {
            Transformer::StandardScaler {
                columns,
                mean,
                scale,
            } => {
                for ((col, m), s) in columns.iter().zip(mean).zip(scale) {
                    let x = numeric(row, col)?;
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    out.push((x - m) / s);
                }
            }
            Transformer::OneHot {
                columns,
                categories,
                handle_unknown,
            } => {
                for (col, cats) in columns.iter().zip(categories) {
                    let value = lookup(row, col)?.to_string();
                    let hit = cats.iter().position(|c| *c == value);
                    if hit.is_none() && *handle_unknown == HandleUnknown::Error {
                        return Err(PredictError::transform(
                            col,
                            format!("unknown category '{value}'"),
                        ));
                    }
                    out.extend((0..cats.len()).map(|i| if Some(i) == hit { 1.0 } else { 0.0 }));
                }
            }
            Transformer::Passthrough { columns } => {
                for col in columns {
                    out.push(numeric(row, col)?);
                }
            }
        }
        Ok(())
    }
}

fn lookup<'a>(row: &'a FeatureRow, column: &str) -> Result<&'a FeatureValue, PredictError> {
    row.get(column)
        .ok_or_else(|| PredictError::transform(column, "column missing from row"))
}

fn numeric(row: &FeatureRow, column: &str) -> Result<f64, PredictError> {
    let value = lookup(row, column)?;
    value
        .as_f64()
        .ok_or_else(|| PredictError::transform(column, format!("expected a number, got '{value}'")))
}

/// A fitted column transformer. Columns no step names are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnPipeline {
    #[serde(default)]
    pub feature_names_in: Option<Vec<String>>,
    pub transformers: Vec<Transformer>,
}

impl ColumnPipeline {
    /// Checks the artifact is internally consistent.
    pub fn validate(&self) -> Result<(), String> {
        for t in &self.transformers {
            t.validate()?;
            if let Some(names) = &self.feature_names_in {
                if let Some(col) = t.columns().iter().find(|c| !names.contains(c)) {
                    return Err(format!(
                        "transformer column '{col}' is not among feature_names_in"
                    ));
                }
            }
        }
        Ok(())
    }

    /// Length of every vector `transform` returns.
    pub fn output_width(&self) -> usize {
        self.transformers.iter().map(Transformer::width).sum()
    }
}

impl Preprocessor for ColumnPipeline {
    fn expected_columns(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }

    fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, PredictError> {
        let schema = self.schema()?;
        if !row.matches(&schema) {
            let have: Vec<&str> = row.columns().collect();
            return Err(PredictError::transform(
                "*",
                format!(
                    "row columns {:?} do not match expected {:?}",
                    have,
                    schema.columns()
                ),
            ));
        }

        let mut out = Vec::with_capacity(self.output_width());
        for t in &self.transformers {
            t.apply(row, &mut out)?;
        }
        Ok(out)
    }
}
