//! Demonstration survey data.
//!
//! Generates a small deterministic CSV in the shape the reader expects, so
//! the tool can be exercised without a real survey export. The data carries
//! a department column, a handful of unanswered cells (to show imputation)
//! and enough spread to produce defined reliability estimates.

use std::fmt::Write;

use crate::core::QUESTION_COUNT;

const PHRASES: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Not Sure",
    "Agree",
    "Strongly Agree",
];

const DEPARTMENTS: [&str; 3] = ["Sales", "R&D", "Operations"];

const RESPONDENTS: usize = 8;

/// Render the demonstration survey as CSV text.
pub fn sample_csv() -> String {
    let mut out = String::new();
    let _ = write!(out, "Timestamp");
    for question in 1..=QUESTION_COUNT {
        let _ = write!(out, ",Q{question}");
    }
    let _ = writeln!(out, ",Department");

    for respondent in 0..RESPONDENTS {
        let _ = write!(out, "2025-03-{:02} 09:00", respondent + 10);
        for column in 0..QUESTION_COUNT {
            let _ = write!(out, ",{}", cell(respondent, column));
        }
        let department = if respondent == RESPONDENTS - 1 {
            // last respondent left the field blank, lands in "Unknown"
            ""
        } else {
            DEPARTMENTS[respondent % DEPARTMENTS.len()]
        };
        let _ = writeln!(out, ",{department}");
    }
    out
}

fn cell(respondent: usize, column: usize) -> &'static str {
    // a few skipped answers, resolved later by imputation
    if (respondent + column) % 23 == 11 {
        return "";
    }
    // deterministic spread: per-respondent base attitude plus mild
    // per-question variation
    let base = 2 + (respondent * 2) % 3;
    let wobble = (respondent + column * 7) % 3;
    let code = (base + wobble).clamp(1, 5);
    PHRASES[code - 1]
}
