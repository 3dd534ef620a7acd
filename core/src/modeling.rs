//! Regresjon og beslutningstre over den berikede tabellen. Begge er direkte
//! engangs-kall til linfa; ingen egen optimeringsløkke her.

use linfa::prelude::*;
use linfa_linear::LinearRegression;
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2};

use crate::error::FuelError;
use crate::models::EnrichedRecord;

/// Prediktorer, i kolonnerekkefølge.
pub const FEATURES: [&str; 5] = ["calories", "protein_g", "fat_g", "carbs_g", "fiber_g"];

#[derive(Debug, Clone)]
pub struct RegressionSummary {
    pub feature_names: Vec<&'static str>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub r_squared: f64,
    pub n: usize,
}

#[derive(Debug, Clone)]
pub struct TreeSummary {
    pub depth: usize,
    pub num_leaves: usize,
    /// Treningsnøyaktighet mot terciler av effektivitet.
    pub accuracy: f64,
    pub feature_importance: Vec<(&'static str, f64)>,
    pub n: usize,
}

/// Komplette rader: alle fem næringsfelter til stede. Manglende verdier
/// imputeres ikke (spesielt ikke til 0); raden utelates i stedet.
fn design_matrix(rows: &[EnrichedRecord]) -> (Array2<f64>, Array1<f64>) {
    let mut features = Vec::new();
    let mut targets = Vec::new();

    for row in rows {
        let n = &row.nutrition;
        if let (Some(cal), Some(protein), Some(fat), Some(carbs), Some(fiber)) =
            (n.calories, n.protein_g, n.fat_g, n.carbs_g, n.fiber_g)
        {
            features.extend_from_slice(&[cal, protein, fat, carbs, fiber]);
            targets.push(row.session.efficiency_ratio);
        }
    }

    let n_rows = targets.len();
    let x = Array2::from_shape_vec((n_rows, FEATURES.len()), features)
        .unwrap_or_else(|_| Array2::zeros((0, FEATURES.len())));
    (x, Array1::from_vec(targets))
}

/// Multippel lineær regresjon: effektivitet ~ makronæringsstoffer (OLS).
pub fn fit_regression(rows: &[EnrichedRecord]) -> Result<RegressionSummary, FuelError> {
    let (x, y) = design_matrix(rows);
    let n = y.len();
    if n <= FEATURES.len() + 1 {
        return Err(FuelError::EmptyTable("linear regression"));
    }

    let dataset = Dataset::new(x, y).with_feature_names(FEATURES.to_vec());
    let model = LinearRegression::new()
        .fit(&dataset)
        .map_err(|e| FuelError::Modeling(e.to_string()))?;

    let predicted = model.predict(&dataset);
    let r_squared = predicted
        .r2(&dataset)
        .map_err(|e| FuelError::Modeling(e.to_string()))?;

    Ok(RegressionSummary {
        feature_names: FEATURES.to_vec(),
        coefficients: model.params().to_vec(),
        intercept: model.intercept(),
        r_squared,
        n,
    })
}

/// Terciler (33-/66-persentil) av målvariabelen, brukt som klassegrenser.
pub fn terciles(values: &[f64]) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let lo = sorted[sorted.len() / 3];
    let hi = sorted[sorted.len() * 2 / 3];
    (lo, hi)
}

/// Beslutningstre over effektivitet diskretisert i terciler (lav/middels/høy).
/// Tre-læreren i linfa er en klassifikator, så målet binnes; grensene
/// rapporteres ikke utover treet selv.
pub fn fit_tree(rows: &[EnrichedRecord]) -> Result<TreeSummary, FuelError> {
    let (x, y) = design_matrix(rows);
    let n = y.len();
    if n < 9 {
        return Err(FuelError::EmptyTable("decision tree"));
    }

    let targets: Vec<f64> = y.to_vec();
    let (lo, hi) = terciles(&targets);
    let labels: Array1<usize> = targets
        .iter()
        .map(|&v| if v <= lo { 0 } else if v <= hi { 1 } else { 2 })
        .collect();

    let dataset = Dataset::new(x, labels).with_feature_names(FEATURES.to_vec());
    let tree = DecisionTree::params()
        .split_quality(SplitQuality::Gini)
        .max_depth(Some(4))
        .min_weight_leaf(2.0)
        .fit(&dataset)
        .map_err(|e| FuelError::Modeling(e.to_string()))?;

    let predicted = tree.predict(&dataset);
    let cm = predicted
        .confusion_matrix(&dataset)
        .map_err(|e| FuelError::Modeling(e.to_string()))?;

    let importance = FEATURES
        .iter()
        .copied()
        .zip(tree.feature_importance())
        .collect();

    Ok(TreeSummary {
        depth: tree.max_depth(),
        num_leaves: tree.num_leaves(),
        accuracy: f64::from(cm.accuracy()),
        feature_importance: importance,
        n,
    })
}
