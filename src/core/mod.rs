pub mod dimension;
pub mod likert;
pub mod stats;

pub use dimension::{Dimension, DimensionTable, QUESTION_COUNT};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::DataQualityIssue;

/// Raw survey input handed to the engine: one row of 48 response cells per
/// respondent, plus an optional parallel department column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurveyTable {
    pub responses: Vec<Vec<String>>,
    pub departments: Option<Vec<Option<String>>>,
}

/// Descriptive statistics over the per-respondent dimension scores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DimensionStatistics {
    pub means: DimensionTable<f64>,
    pub medians: DimensionTable<f64>,
    pub std_devs: DimensionTable<f64>,
    pub weak_dimensions: Vec<Dimension>,
    pub strong_dimensions: Vec<Dimension>,
}

/// Cronbach's alpha for one dimension, or an explicit marker that the data
/// cannot support the estimate. Never conflated with an alpha of zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityEstimate {
    Alpha(f64),
    InsufficientData { reason: String },
}

impl ReliabilityEstimate {
    pub fn alpha(&self) -> Option<f64> {
        match self {
            ReliabilityEstimate::Alpha(a) => Some(*a),
            ReliabilityEstimate::InsufficientData { .. } => None,
        }
    }
}

/// Complete result of one analysis request. Fully recomputed per call;
/// the engine holds no state between requests.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Imputed response matrix, values rounded to 2 decimals.
    pub cleaned_data: Vec<Vec<f64>>,
    /// Per-respondent dimension means, rounded to 2 decimals.
    pub dimension_scores: Vec<DimensionTable<f64>>,
    pub statistics: DimensionStatistics,
    pub reliability: DimensionTable<ReliabilityEstimate>,
    /// Per-department per-dimension means; empty when the input carried no
    /// department column.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub department_breakdown: BTreeMap<String, DimensionTable<f64>>,
    /// Per-column data-quality findings that did not abort the analysis.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<DataQualityIssue>,
}
