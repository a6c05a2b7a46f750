//! CLI command implementations.
//!
//! - **analyze**: score a survey CSV and write the result in the selected
//!   output format
//! - **sample**: emit a small demonstration survey CSV

pub mod analyze;
pub mod sample;

pub use analyze::handle_analyze;
pub use sample::handle_sample;
