use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "ceaiscore")]
#[command(about = "CEAI survey scoring and reliability analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a CEAI survey export and report dimension statistics
    Analyze {
        /// Path to the survey CSV file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit a small demonstration survey CSV
    Sample {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
