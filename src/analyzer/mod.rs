//! Analyzer module for simulation log parsing.
//!
//! Provides functionality for:
//! - Loading a log file into its title line and body tokens
//! - Extracting the frame / entity count series from the tokens
//! - Recognising the run parameter header in the title

pub mod log_loader;
pub mod log_parser;
pub mod run_header;
pub mod types;

pub use log_loader::load;
pub use log_parser::{extract_series, extract_series_with};
pub use run_header::{RunHeader, parse_run_header};
pub use types::{AnalyzerError, LengthPolicy, LoadedLog, Marker, ScanMode, Series};
