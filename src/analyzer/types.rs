//! Type definitions specific to the analyzer module.

use serde::Deserialize;

/// Marker token announcing a frame index in the next token.
pub const FRAME_MARKER: &str = "Frame";
/// Marker token announcing an entity count in the next token.
pub const ENTITY_COUNT_MARKER: &str = "EntityCount:";

/// How the token stream is walked when looking for markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Inspect only even token positions (0, 2, 4, ...).
    #[default]
    StrideTwo,
    /// Inspect every token position; a marker consumes the value after it.
    EveryToken,
}

/// What to do when the two series end up with different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPolicy {
    /// Pair values up to the length of the shorter series.
    #[default]
    Truncate,
    /// Refuse to plot unequal series.
    Strict,
}

/// Recognised marker tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Frame,
    EntityCount,
}

impl Marker {
    /// Match a token against the marker literals. Matching is exact.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            FRAME_MARKER => Some(Marker::Frame),
            ENTITY_COUNT_MARKER => Some(Marker::EntityCount),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Frame => FRAME_MARKER,
            Marker::EntityCount => ENTITY_COUNT_MARKER,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A log file split into its title line and the body token stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedLog {
    /// First line of the file, line terminator removed, otherwise verbatim.
    pub title: String,
    /// Whitespace-separated tokens of everything after the first line.
    pub tokens: Vec<String>,
}

/// Frame indices and entity counts in the order they were found.
///
/// The two vectors are only correlated by scan position, so they can differ
/// in length when markers are unbalanced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Series {
    pub frames: Vec<i64>,
    pub entity_counts: Vec<i64>,
}

impl Series {
    pub fn is_balanced(&self) -> bool {
        self.frames.len() == self.entity_counts.len()
    }

    /// Pair frames with entity counts as plot points.
    ///
    /// # Parameters
    ///
    /// * `policy` - Decides how unequal lengths are handled
    ///
    /// # Returns
    ///
    /// `(frame, entity_count)` points, or `LengthMismatch` under `LengthPolicy::Strict`.
    pub fn paired(&self, policy: LengthPolicy) -> Result<Vec<[f64; 2]>, AnalyzerError> {
        if !self.is_balanced() {
            match policy {
                LengthPolicy::Strict => {
                    return Err(AnalyzerError::LengthMismatch {
                        frames: self.frames.len(),
                        entity_counts: self.entity_counts.len(),
                    });
                }
                LengthPolicy::Truncate => {
                    log::warn!(
                        "Series lengths differ ({} frames, {} entity counts), plotting the first {} pairs",
                        self.frames.len(),
                        self.entity_counts.len(),
                        self.frames.len().min(self.entity_counts.len())
                    );
                }
            }
        }

        Ok(self
            .frames
            .iter()
            .zip(&self.entity_counts)
            .map(|(&frame, &count)| [frame as f64, count as f64])
            .collect())
    }
}

/// Error type for log loading and series extraction failures.
#[derive(Debug)]
pub enum AnalyzerError {
    /// The log file is missing or unreadable.
    FileAccess { path: String, source: std::io::Error },
    /// The token after a marker is not an integer once commas are removed.
    Parse { marker: Marker, token: String, index: usize },
    /// A marker is the last token, so there is no value to read.
    MissingValue { marker: Marker, index: usize },
    /// Unequal series under the strict length policy.
    LengthMismatch { frames: usize, entity_counts: usize },
}

impl std::fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerError::FileAccess { path, source } => write!(f, "Failed to read log file {}: {}", path, source),
            AnalyzerError::Parse { marker, token, index } => {
                write!(f, "Value '{}' after '{}' at token {} is not an integer", token, marker, index)
            }
            AnalyzerError::MissingValue { marker, index } => {
                write!(f, "Marker '{}' at token {} has no following value", marker, index)
            }
            AnalyzerError::LengthMismatch { frames, entity_counts } => {
                write!(f, "Found {} frame values but {} entity count values", frames, entity_counts)
            }
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzerError::FileAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(frames: &[i64], entity_counts: &[i64]) -> Series {
        Series {
            frames: frames.to_vec(),
            entity_counts: entity_counts.to_vec(),
        }
    }

    #[test]
    fn test_marker_from_token_is_exact() {
        assert_eq!(Marker::from_token("Frame"), Some(Marker::Frame));
        assert_eq!(Marker::from_token("EntityCount:"), Some(Marker::EntityCount));
        assert_eq!(Marker::from_token("frame"), None);
        assert_eq!(Marker::from_token("EntityCount"), None);
    }

    #[test]
    fn test_paired_balanced() {
        let points = series(&[0, 1], &[5, 7]).paired(LengthPolicy::Strict).unwrap();
        assert_eq!(points, vec![[0.0, 5.0], [1.0, 7.0]]);
    }

    #[test]
    fn test_paired_truncates_to_shorter() {
        let points = series(&[0, 250, 500], &[5, 7]).paired(LengthPolicy::Truncate).unwrap();
        assert_eq!(points, vec![[0.0, 5.0], [250.0, 7.0]]);
    }

    #[test]
    fn test_paired_strict_rejects_mismatch() {
        let result = series(&[0], &[5, 7]).paired(LengthPolicy::Strict);
        match result {
            Err(AnalyzerError::LengthMismatch { frames, entity_counts }) => {
                assert_eq!(frames, 1);
                assert_eq!(entity_counts, 2);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_paired_empty() {
        let points = Series::default().paired(LengthPolicy::Strict).unwrap();
        assert!(points.is_empty());
    }
}
