use crate::core::{AnalysisReport, Dimension, ReliabilityEstimate};
use crate::report;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable result structure
    Json,
    /// Narrative survey report
    Markdown,
    /// Colored tables for interactive use
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, out: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.writer
            .write_all(report::render_markdown(report).as_bytes())?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_statistics(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let stats = &report.statistics;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Dimension",
            "Mean",
            "Median",
            "Std Dev",
            "Alpha",
        ]);
        for dim in Dimension::ALL {
            let alpha = match &report.reliability[dim] {
                ReliabilityEstimate::Alpha(a) => format!("{a:.3}"),
                ReliabilityEstimate::InsufficientData { .. } => "insufficient data".to_string(),
            };
            table.add_row(vec![
                Cell::new(dim.name()),
                Cell::new(format!("{:.2}", stats.means[dim])),
                Cell::new(format!("{:.2}", stats.medians[dim])),
                Cell::new(format!("{:.2}", stats.std_devs[dim])),
                Cell::new(alpha),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_classification(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let stats = &report.statistics;
        if !stats.strong_dimensions.is_empty() {
            let names: Vec<&str> = stats.strong_dimensions.iter().map(|d| d.name()).collect();
            writeln!(
                self.writer,
                "{} {}",
                "Strong dimensions:".green().bold(),
                names.join(", ")
            )?;
        }
        if !stats.weak_dimensions.is_empty() {
            let names: Vec<&str> = stats.weak_dimensions.iter().map(|d| d.name()).collect();
            writeln!(
                self.writer,
                "{} {}",
                "Weak dimensions:".red().bold(),
                names.join(", ")
            )?;
        }
        if stats.strong_dimensions.is_empty() && stats.weak_dimensions.is_empty() {
            writeln!(
                self.writer,
                "No dimension crossed the weak (<2.5) or strong (>4.0) thresholds."
            )?;
        }
        Ok(())
    }

    fn write_departments(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.department_breakdown.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Department breakdown".bold())?;
        let mut table = Table::new();
        let mut header = vec!["Department".to_string()];
        header.extend(Dimension::ALL.iter().map(|d| d.name().to_string()));
        table.load_preset(UTF8_FULL).set_header(header);
        for (department, means) in &report.department_breakdown {
            let mut row = vec![department.clone()];
            row.extend(Dimension::ALL.iter().map(|&d| format!("{:.2}", means[d])));
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_diagnostics(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        for issue in &report.diagnostics {
            writeln!(
                self.writer,
                "{} {}",
                "data quality:".yellow().bold(),
                issue.describe()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} ({} respondents)",
            "CEAI Survey Analysis".bold(),
            report.dimension_scores.len()
        )?;
        writeln!(self.writer)?;
        self.write_statistics(report)?;
        self.write_classification(report)?;
        self.write_departments(report)?;
        self.write_diagnostics(report)?;
        Ok(())
    }
}
