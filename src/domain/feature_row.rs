// src/domain/feature_row.rs

use std::collections::HashSet;
use std::fmt;

use crate::model::PredictError;

/// A single cell of the feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    /// Numeric view of the value; text has none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Text(_) => None,
            FeatureValue::Int(n) => Some(*n as f64),
            FeatureValue::Float(x) => Some(*x),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Text(s) => write!(f, "{s}"),
            FeatureValue::Int(n) => write!(f, "{n}"),
            FeatureValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Text(s.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Text(s)
    }
}

impl From<i64> for FeatureValue {
    fn from(n: i64) -> Self {
        FeatureValue::Int(n)
    }
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self {
        FeatureValue::Float(x)
    }
}

/// The ordered input columns a loaded preprocessor declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    columns: Vec<String>,
}

impl ModelSchema {
    /// Rejects an empty column list and duplicate names; either would leave
    /// the column order ambiguous.
    pub fn new(columns: Vec<String>) -> Result<Self, PredictError> {
        if columns.is_empty() {
            return Err(PredictError::InvalidSchema(
                "expected column list is empty".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.as_str()) {
                return Err(PredictError::InvalidSchema(format!(
                    "column '{col}' is declared more than once"
                )));
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

/// One schema-aligned record, ready for the preprocessor.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    cells: Vec<(String, FeatureValue)>,
}

impl FeatureRow {
    pub(crate) fn from_cells(cells: Vec<(String, FeatureValue)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row holds exactly the schema's columns in schema order.
    pub fn matches(&self, schema: &ModelSchema) -> bool {
        self.len() == schema.len()
            && self
                .columns()
                .zip(schema.columns())
                .all(|(have, want)| have == want)
    }
}
