//! Delimited-text survey reader.
//!
//! Parses a CSV export line by line: a header row, then one row per
//! respondent. Besides the 48 question columns the header may carry two
//! recognized optional columns, matched case-insensitively: `department`
//! (used for grouping) and `timestamp` (ignored). After excluding those,
//! exactly 48 question columns must remain; any other count mis-binds the
//! fixed dimension map and is rejected up front.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::{SurveyTable, QUESTION_COUNT};
use crate::errors::SurveyError;

/// Read and parse a survey CSV file.
pub fn read_survey(path: &Path) -> Result<SurveyTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read survey file: {}", path.display()))?;
    parse_survey(&content)
        .with_context(|| format!("Failed to parse survey file: {}", path.display()))
}

/// Parse survey CSV text into the engine's input table.
pub fn parse_survey(input: &str) -> Result<SurveyTable, SurveyError> {
    let lines: Vec<&str> = input
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(SurveyError::TooFewRows);
    }

    let header = split_line(lines[0]);
    let mut department_column = None;
    let mut question_columns = Vec::new();
    for (index, cell) in header.iter().enumerate() {
        match cell.trim().to_lowercase().as_str() {
            "department" => department_column = Some(index),
            "timestamp" => {}
            _ => question_columns.push(index),
        }
    }
    if question_columns.len() != QUESTION_COUNT {
        return Err(SurveyError::QuestionColumnMismatch {
            expected: QUESTION_COUNT,
            found: question_columns.len(),
        });
    }

    let mut responses = Vec::with_capacity(lines.len() - 1);
    let mut departments = Vec::with_capacity(lines.len() - 1);
    for (row_number, line) in lines[1..].iter().enumerate() {
        let cells = split_line(line);
        if cells.len() < header.len() {
            log::warn!(
                "row {} has {} cells, expected {}; missing cells treated as unanswered",
                row_number + 2,
                cells.len(),
                header.len()
            );
        }
        responses.push(
            question_columns
                .iter()
                .map(|&i| cells.get(i).cloned().unwrap_or_default())
                .collect(),
        );
        departments.push(department_column.and_then(|i| {
            cells
                .get(i)
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        }));
    }

    Ok(SurveyTable {
        responses,
        departments: department_column.map(|_| departments),
    })
}

/// Split one CSV line into cells, honoring double-quoted fields with `""`
/// escapes.
fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quoted_fields() {
        assert_eq!(
            split_line(r#"a,"b,c","d""e",f"#),
            vec!["a", "b,c", "d\"e", "f"]
        );
    }

    #[test]
    fn rejects_header_only_input() {
        let header = vec!["Q"; QUESTION_COUNT].join(",");
        assert_eq!(parse_survey(&header), Err(SurveyError::TooFewRows));
    }

    #[test]
    fn rejects_wrong_question_column_count() {
        let input = "Q1,Q2\nAgree,Agree\n";
        assert_eq!(
            parse_survey(input),
            Err(SurveyError::QuestionColumnMismatch {
                expected: QUESTION_COUNT,
                found: 2
            })
        );
    }
}
