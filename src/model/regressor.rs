// src/model/regressor.rs

use serde::Deserialize;

use crate::model::{Model, PredictError};

/// How the model's raw output relates to a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetScale {
    #[default]
    Identity,
    /// Trained on `ln(price)`.
    Log,
    /// Trained on `ln(1 + price)`.
    Log1p,
}

impl TargetScale {
    fn invert(&self, raw: f64) -> f64 {
        match self {
            TargetScale::Identity => raw,
            TargetScale::Log => raw.exp(),
            TargetScale::Log1p => raw.exp_m1(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!(
                        "node {i} splits on feature {feature} but the model has {n_features}"
                    ));
                }
                // Children after their parent keeps every walk finite.
                for child in [*left, *right] {
                    if child <= i || child >= self.nodes.len() {
                        return Err(format!("node {i} has out-of-order child {child}"));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_for(&self, x: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

fn default_learning_rate() -> f64 {
    1.0
}

/// A fitted regression model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    Linear {
        coef: Vec<f64>,
        intercept: f64,
        #[serde(default)]
        target: TargetScale,
    },
    TreeEnsemble {
        n_features: usize,
        trees: Vec<Tree>,
        #[serde(default)]
        base_score: f64,
        #[serde(default = "default_learning_rate")]
        learning_rate: f64,
        /// Average the trees (forest) instead of summing them (boosting).
        #[serde(default)]
        average: bool,
        #[serde(default)]
        target: TargetScale,
    },
}

impl Regressor {
    pub fn n_features(&self) -> usize {
        match self {
            Regressor::Linear { coef, .. } => coef.len(),
            Regressor::TreeEnsemble { n_features, .. } => *n_features,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            Regressor::Linear { coef, .. } if coef.is_empty() => {
                Err("linear model has no coefficients".into())
            }
            Regressor::Linear { .. } => Ok(()),
            Regressor::TreeEnsemble {
                n_features, trees, ..
            } => {
                if trees.is_empty() {
                    return Err("tree ensemble has no trees".into());
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(*n_features)
                        .map_err(|e| format!("tree {i}: {e}"))?;
                }
                Ok(())
            }
        }
    }

    fn predict_one(&self, x: &[f64]) -> f64 {
        match self {
            Regressor::Linear {
                coef,
                intercept,
                target,
            } => {
                let raw = coef.iter().zip(x).map(|(c, v)| c * v).sum::<f64>() + intercept;
                target.invert(raw)
            }
            Regressor::TreeEnsemble {
                trees,
                base_score,
                learning_rate,
                average,
                target,
                ..
            } => {
                let total: f64 = trees.iter().map(|t| t.leaf_for(x)).sum();
                let combined = if *average {
                    total / trees.len() as f64
                } else {
                    total * learning_rate
                };
                target.invert(base_score + combined)
            }
        }
    }
}

impl Model for Regressor {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
        let width = self.n_features();
        rows.iter()
            .map(|x| {
                if x.len() != width {
                    return Err(PredictError::PredictFailure(format!(
                        "model expects {width} features, got {}",
                        x.len()
                    )));
                }
                Ok(self.predict_one(x))
            })
            .collect()
    }
}
