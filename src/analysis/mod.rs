//! Survey analysis pipeline.
//!
//! Stages, in order: Likert encoding, two-pass missing-value imputation,
//! per-respondent dimension aggregation, descriptive statistics and
//! reliability estimation, and the optional department breakdown. Every
//! stage allocates its own accumulators; nothing is shared between
//! invocations, so concurrent analyses need no coordination.

pub mod aggregate;
pub mod department;
pub mod descriptive;
pub mod impute;
pub mod reliability;

pub use aggregate::{respondent_scores, score_respondents};
pub use department::breakdown;
pub use descriptive::{describe, STRONG_THRESHOLD, WEAK_THRESHOLD};
pub use impute::{impute, ImputedMatrix};
pub use reliability::cronbach_alpha;

use crate::core::likert::encode;
use crate::core::stats::round2;
use crate::core::{
    AnalysisReport, Dimension, DimensionTable, SurveyTable, QUESTION_COUNT,
};
use crate::errors::{DataQualityIssue, SurveyError};

/// Run the full scoring pipeline over one survey table.
///
/// Structural problems (an empty table) fail the whole call; per-column
/// data-quality findings are attached to the report as diagnostics instead,
/// since the remaining dimensions are still meaningful.
pub fn analyze(table: &SurveyTable) -> Result<AnalysisReport, SurveyError> {
    if table.responses.is_empty() {
        return Err(SurveyError::NoResponses);
    }
    log::debug!("analyzing {} respondent rows", table.responses.len());

    let encoded: Vec<Vec<Option<u8>>> = table
        .responses
        .iter()
        .map(|row| {
            (0..QUESTION_COUNT)
                .map(|i| row.get(i).map(String::as_str).and_then(encode))
                .collect()
        })
        .collect();

    let imputed = impute(&encoded);
    let diagnostics: Vec<DataQualityIssue> = imputed
        .empty_columns
        .iter()
        .filter_map(|&column| {
            Dimension::containing(column)
                .map(|dimension| DataQualityIssue::EmptyColumn { column, dimension })
        })
        .collect();
    for issue in &diagnostics {
        log::warn!("{}", issue.describe());
    }

    let cleaned_data: Vec<Vec<f64>> = imputed
        .values
        .iter()
        .map(|row| row.iter().copied().map(round2).collect())
        .collect();

    let dimension_scores = score_respondents(&imputed.values);
    let statistics = describe(&dimension_scores);
    let reliability =
        DimensionTable::from_fn(|dim| cronbach_alpha(&imputed.values, dim.items()));
    let department_breakdown = breakdown(&dimension_scores, table.departments.as_deref());

    Ok(AnalysisReport {
        cleaned_data,
        dimension_scores,
        statistics,
        reliability,
        department_breakdown,
        diagnostics,
    })
}
