//! Template-based narrative report.
//!
//! Synthesizes a markdown survey report directly from the computed
//! statistics. This is the deterministic fallback summary used when no
//! external generative-text collaborator is in play; it never invents
//! numbers, every figure comes from the analysis result.

use chrono::Utc;
use std::fmt::Write;

use crate::core::{AnalysisReport, Dimension, ReliabilityEstimate};

/// Render the full markdown report for one analysis result.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let means = &report.statistics.means;
    let mut ranked: Vec<(Dimension, f64)> = Dimension::ALL
        .into_iter()
        .map(|d| (d, means[d]))
        .filter(|(_, m)| m.is_finite())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut out = String::new();
    let _ = writeln!(out, "# CEAI Survey Analysis Report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Generated: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Respondents: {}", report.dimension_scores.len());
    let _ = writeln!(out);

    write_executive_summary(&mut out, report, &ranked);
    write_dimension_averages(&mut out, report, &ranked);
    write_reliability(&mut out, report);
    write_strengths_weaknesses(&mut out, report, &ranked);
    write_recommendations(&mut out, report, &ranked);
    write_diagnostics(&mut out, report);
    write_conclusion(&mut out, &ranked);
    out
}

fn overall_average(ranked: &[(Dimension, f64)]) -> Option<f64> {
    if ranked.is_empty() {
        return None;
    }
    Some(ranked.iter().map(|(_, m)| m).sum::<f64>() / ranked.len() as f64)
}

fn overall_assessment(average: f64) -> &'static str {
    if average > 4.0 {
        "highly supportive environment for entrepreneurship"
    } else if average > 3.5 {
        "moderately supportive environment for entrepreneurship"
    } else if average > 2.5 {
        "somewhat supportive environment for entrepreneurship with significant room for improvement"
    } else {
        "challenging environment for entrepreneurship that requires substantial improvement"
    }
}

fn write_executive_summary(out: &mut String, report: &AnalysisReport, ranked: &[(Dimension, f64)]) {
    let stats = &report.statistics;
    let _ = writeln!(out, "## Executive Summary");
    let _ = writeln!(out);
    let Some(average) = overall_average(ranked) else {
        let _ = writeln!(
            out,
            "The survey data did not yield any defined dimension scores; \
             see the data quality section below."
        );
        let _ = writeln!(out);
        return;
    };
    let mut summary = format!(
        "The Corporate Entrepreneurship Assessment Instrument (CEAI) survey \
         results indicate a **{}**.",
        overall_assessment(average)
    );
    if !stats.strong_dimensions.is_empty() {
        let names: Vec<&str> = stats.strong_dimensions.iter().map(|d| d.name()).collect();
        summary.push_str(&format!(" Notable strengths include {}.", names.join(", ")));
    }
    if !stats.weak_dimensions.is_empty() {
        let names: Vec<&str> = stats.weak_dimensions.iter().map(|d| d.name()).collect();
        summary.push_str(&format!(
            " Areas requiring immediate attention include {}.",
            names.join(", ")
        ));
    }
    let _ = writeln!(out, "{summary}");
    let _ = writeln!(out);
}

fn write_dimension_averages(out: &mut String, report: &AnalysisReport, ranked: &[(Dimension, f64)]) {
    let _ = writeln!(out, "## Overall Dimension Averages");
    let _ = writeln!(out);
    for &(dim, score) in ranked {
        let marker = if report.statistics.strong_dimensions.contains(&dim) {
            " (strong)"
        } else if report.statistics.weak_dimensions.contains(&dim) {
            " (weak)"
        } else {
            ""
        };
        let _ = writeln!(out, "* **{}**: {:.2}{}", dim.name(), score, marker);
    }
    let _ = writeln!(out);
}

fn alpha_quality(alpha: f64) -> &'static str {
    if alpha >= 0.9 {
        "Excellent"
    } else if alpha >= 0.8 {
        "Good"
    } else if alpha >= 0.7 {
        "Acceptable"
    } else if alpha >= 0.6 {
        "Questionable"
    } else {
        "Poor"
    }
}

fn write_reliability(out: &mut String, report: &AnalysisReport) {
    let _ = writeln!(out, "## Reliability Analysis");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "The internal consistency of each dimension was measured using \
         Cronbach's alpha:"
    );
    let _ = writeln!(out);
    for dim in Dimension::ALL {
        match &report.reliability[dim] {
            ReliabilityEstimate::Alpha(alpha) => {
                let _ = writeln!(
                    out,
                    "* **{}**: {:.3} ({})",
                    dim.name(),
                    alpha,
                    alpha_quality(*alpha)
                );
            }
            ReliabilityEstimate::InsufficientData { reason } => {
                let _ = writeln!(out, "* **{}**: insufficient data ({reason})", dim.name());
            }
        }
    }
    let _ = writeln!(out);
}

fn write_strengths_weaknesses(
    out: &mut String,
    report: &AnalysisReport,
    ranked: &[(Dimension, f64)],
) {
    let stats = &report.statistics;
    let _ = writeln!(out, "## Strengths and Weaknesses");
    let _ = writeln!(out);
    let _ = writeln!(out, "### Strengths");
    if !stats.strong_dimensions.is_empty() {
        for dim in &stats.strong_dimensions {
            let _ = writeln!(
                out,
                "* **{}** stands out as a strength with a score of {:.2}",
                dim.name(),
                stats.means[*dim]
            );
        }
    } else if let Some(&(top, score)) = ranked.first() {
        let _ = writeln!(
            out,
            "* **{}** is the highest scoring dimension at {:.2}, though it \
             does not reach the threshold for a strong dimension (>4.0)",
            top.name(),
            score
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "### Areas for Improvement");
    if !stats.weak_dimensions.is_empty() {
        for dim in &stats.weak_dimensions {
            let _ = writeln!(
                out,
                "* **{}** is a critical area for improvement with a low score of {:.2}",
                dim.name(),
                stats.means[*dim]
            );
        }
    } else if let Some(&(bottom, score)) = ranked.last() {
        let _ = writeln!(
            out,
            "* **{}** is the lowest scoring dimension at {:.2}, though it \
             does not fall below the threshold for a weak dimension (<2.5)",
            bottom.name(),
            score
        );
    }
    let _ = writeln!(out);
}

fn recommendation(dim: Dimension) -> (&'static str, [&'static str; 3]) {
    match dim {
        Dimension::ManagementSupport => (
            "Strengthen Management Support",
            [
                "Provide leadership training focused on supporting entrepreneurial initiatives",
                "Establish clear channels for idea submission and feedback",
                "Recognize and celebrate innovative efforts, even when they don't succeed",
            ],
        ),
        Dimension::WorkDiscretion => (
            "Enhance Employee Autonomy",
            [
                "Empower employees to make more decisions without excessive oversight",
                "Create opportunities for self-directed work",
                "Reduce approval layers for innovative ideas",
            ],
        ),
        Dimension::Rewards => (
            "Improve Reward Systems",
            [
                "Develop recognition programs specifically for innovative contributions",
                "Align performance metrics with entrepreneurial behaviors",
                "Consider both financial and non-financial rewards for innovation",
            ],
        ),
        Dimension::TimeAvailability => (
            "Optimize Time Management",
            [
                "Evaluate workload distribution across teams",
                "Allocate dedicated time for innovative activities",
                "Consider implementing 'innovation time' policies",
            ],
        ),
        Dimension::OrganizationalBoundaries => (
            "Reduce Organizational Barriers",
            [
                "Review and streamline standard operating procedures",
                "Create more cross-functional collaboration opportunities",
                "Reduce bureaucratic barriers to innovation",
            ],
        ),
    }
}

fn write_recommendations(out: &mut String, report: &AnalysisReport, ranked: &[(Dimension, f64)]) {
    let _ = writeln!(out, "## Recommendations");
    let _ = writeln!(out);
    let bottom = ranked.iter().rev().take(3);
    let mut number = 0;
    for &(dim, _) in bottom {
        number += 1;
        let (title, bullets) = recommendation(dim);
        let _ = writeln!(out, "{number}. **{title}**");
        for bullet in bullets {
            let _ = writeln!(out, "   * {bullet}");
        }
        let _ = writeln!(out);
    }
    if let Some(strong) = report.statistics.strong_dimensions.first() {
        number += 1;
        let _ = writeln!(out, "{number}. **Maintain Strength in {}**", strong.name());
        let _ = writeln!(
            out,
            "   * Continue practices that have led to high scores in {}",
            strong.name()
        );
        let _ = writeln!(
            out,
            "   * Document and share successful strategies across the organization"
        );
        let _ = writeln!(
            out,
            "   * Use this dimension as a model for improving other areas"
        );
        let _ = writeln!(out);
    }
}

fn write_diagnostics(out: &mut String, report: &AnalysisReport) {
    if report.diagnostics.is_empty() {
        return;
    }
    let _ = writeln!(out, "## Data Quality");
    let _ = writeln!(out);
    for issue in &report.diagnostics {
        let _ = writeln!(out, "* {}", issue.describe());
    }
    let _ = writeln!(out);
}

fn write_conclusion(out: &mut String, ranked: &[(Dimension, f64)]) {
    let _ = writeln!(out, "## Conclusion");
    let _ = writeln!(out);
    let Some(average) = overall_average(ranked) else {
        let _ = writeln!(
            out,
            "No conclusion can be drawn until the data quality issues above \
             are resolved."
        );
        return;
    };
    let tone = if average > 3.5 { "a supportive" } else { "an evolving" };
    let followup = if average > 3.5 {
        "maintaining strengths and addressing areas for improvement"
    } else {
        "focusing on the identified areas for improvement"
    };
    let _ = writeln!(
        out,
        "The organization demonstrates {tone} environment for corporate \
         entrepreneurship. By {followup}, the organization can enhance its \
         entrepreneurial climate and potentially see increased innovation \
         and initiative from employees."
    );
}
