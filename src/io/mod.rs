pub mod output;
pub mod reader;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use reader::{parse_survey, read_survey};
