//! Error taxonomy for survey analysis.
//!
//! Structural problems with the input abort the whole computation and
//! surface as [`SurveyError`]. Per-column data-quality findings ride along
//! with the result as [`DataQualityIssue`] diagnostics instead, since the
//! remaining dimensions may still be valid.

use serde::Serialize;
use thiserror::Error;

use crate::core::Dimension;

/// Fatal input errors. No partial result is produced when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("survey input must contain a header row and at least one data row")]
    TooFewRows,

    #[error("expected {expected} question columns after optional columns, found {found}")]
    QuestionColumnMismatch { expected: usize, found: usize },

    #[error("survey contains no respondent rows")]
    NoResponses,
}

/// Non-fatal data-quality findings attached to an [`AnalysisReport`].
///
/// [`AnalysisReport`]: crate::core::AnalysisReport
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DataQualityIssue {
    /// A question column had no valid Likert responses at all, so its mean
    /// is undefined and its cells could not be imputed.
    EmptyColumn { column: usize, dimension: Dimension },
}

impl DataQualityIssue {
    pub fn describe(&self) -> String {
        match self {
            DataQualityIssue::EmptyColumn { column, dimension } => format!(
                "question column {column} ({dimension}) has no valid responses; \
                 its mean is undefined and affected scores exclude it"
            ),
        }
    }
}
