//! Extract the frame and entity count series from a log token stream.
//!
//! The simulation writes a progress line every few hundred frames:
//!
//! ```text
//! Frame 250, EntityCount: 17
//! ```
//!
//! which splits into the tokens `Frame`, `250,`, `EntityCount:`, `17`.
//! A marker token is followed by its value; commas are dropped before the
//! value is parsed.

use super::types::{AnalyzerError, Marker, ScanMode, Series};

/// Extract both series with the default stride-2 scan.
///
/// Only even token positions are inspected. A marker at an odd position is
/// never seen, which matches how the logs have always been read.
pub fn extract_series<S: AsRef<str>>(tokens: &[S]) -> Result<Series, AnalyzerError> {
    extract_series_with(tokens, ScanMode::StrideTwo)
}

/// Extract both series using the given scan mode.
///
/// # Parameters
///
/// * `tokens` - Ordered token stream of the log body
/// * `mode` - Which token positions are inspected for markers
///
/// # Returns
///
/// The series in scan order (possibly empty, possibly of unequal length), or
/// the first `Parse` / `MissingValue` error encountered.
pub fn extract_series_with<S: AsRef<str>>(tokens: &[S], mode: ScanMode) -> Result<Series, AnalyzerError> {
    let mut series = Series::default();
    let mut index = 0;

    while index < tokens.len() {
        let step = match Marker::from_token(tokens[index].as_ref()) {
            Some(marker) => {
                let value = parse_marker_value(tokens, marker, index)?;
                match marker {
                    Marker::Frame => series.frames.push(value),
                    Marker::EntityCount => series.entity_counts.push(value),
                }
                // Marker and value form one pair in both modes
                2
            }
            None => match mode {
                ScanMode::StrideTwo => 2,
                ScanMode::EveryToken => 1,
            },
        };
        index += step;
    }

    log::debug!(
        "Extracted {} frame values and {} entity count values ({:?})",
        series.frames.len(),
        series.entity_counts.len(),
        mode
    );

    Ok(series)
}

/// Parse the token following the marker at `index`.
fn parse_marker_value<S: AsRef<str>>(tokens: &[S], marker: Marker, index: usize) -> Result<i64, AnalyzerError> {
    let token: &str = tokens
        .get(index + 1)
        .ok_or(AnalyzerError::MissingValue { marker, index })?
        .as_ref();

    token.replace(',', "").parse().map_err(|_| AnalyzerError::Parse {
        marker,
        token: token.to_string(),
        index: index + 1,
    })
}
