use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analysis::analyze;
use crate::io::reader::read_survey;
use crate::io::{create_writer, OutputFormat};

/// Read a survey file, run the analysis pipeline and write the result in
/// the requested format.
pub fn handle_analyze(path: &Path, format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let table = read_survey(path)?;
    let report = analyze(&table)?;
    log::info!(
        "scored {} respondents across {} departments",
        report.dimension_scores.len(),
        report.department_breakdown.len()
    );

    let out: Box<dyn Write> = match output {
        Some(path) => Box::new(
            fs::File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    create_writer(format, out).write_report(&report)
}
