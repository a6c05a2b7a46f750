// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;
pub mod report;
pub mod sample;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, Dimension, DimensionStatistics, DimensionTable, ReliabilityEstimate,
    SurveyTable, QUESTION_COUNT,
};

pub use crate::analysis::{
    analyze, breakdown, cronbach_alpha, describe, impute, respondent_scores, score_respondents,
    ImputedMatrix, STRONG_THRESHOLD, WEAK_THRESHOLD,
};

pub use crate::core::likert::encode;

pub use crate::errors::{DataQualityIssue, SurveyError};

pub use crate::io::{create_writer, parse_survey, read_survey, OutputFormat, OutputWriter};

pub use crate::report::render_markdown;
