use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::sample::sample_csv;

/// Write the demonstration survey CSV to a file or stdout.
pub fn handle_sample(output: Option<PathBuf>) -> Result<()> {
    let csv = sample_csv();
    match output {
        Some(path) => fs::write(&path, csv)
            .with_context(|| format!("Failed to write sample file: {}", path.display())),
        None => {
            std::io::stdout().write_all(csv.as_bytes())?;
            Ok(())
        }
    }
}
