//! Read a simulation log into its title line and body token stream.
//!
//! The whole file is read at once. The file handle lives only for the
//! duration of [`load`], so it is closed on every exit path.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::types::{AnalyzerError, LoadedLog};

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Load a log file.
///
/// # Parameters
///
/// * `path` - Path to the log file
///
/// # Returns
///
/// The first line as the title (line terminator removed) and the rest of the
/// file split on whitespace, or `AnalyzerError::FileAccess` if the file cannot
/// be opened or read.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedLog, AnalyzerError> {
    let path = path.as_ref();
    let file_access = |source| AnalyzerError::FileAccess {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut title = String::new();
    reader.read_line(&mut title).map_err(file_access)?;
    strip_line_terminator(&mut title);

    let mut body = String::new();
    reader.read_to_string(&mut body).map_err(file_access)?;

    let tokens: Vec<String> = body.split_whitespace().map(str::to_owned).collect();

    log::debug!("Loaded {}: title {:?}, {} tokens", path.display(), title, tokens.len());
    log::trace!("Tokens: {:?}", tokens);

    Ok(LoadedLog { title, tokens })
}

fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_splits_title_and_tokens() {
        let file = write_log("Seed {} Mutation {}\nFrame 0, EntityCount: 5\nFrame 250, EntityCount: 7\n");
        let log = load(file.path()).unwrap();

        assert_eq!(log.title, "Seed {} Mutation {}");
        assert_eq!(
            log.tokens,
            vec!["Frame", "0,", "EntityCount:", "5", "Frame", "250,", "EntityCount:", "7"]
        );
    }

    #[test]
    fn test_load_keeps_title_verbatim_except_terminator() {
        let file = write_log("  My run {}  \r\nFrame 1\n");
        let log = load(file.path()).unwrap();
        assert_eq!(log.title, "  My run {}  ");
        assert_eq!(log.tokens, vec!["Frame", "1"]);
    }

    #[test]
    fn test_load_title_only() {
        let file = write_log("just a title");
        let log = load(file.path()).unwrap();
        assert_eq!(log.title, "just a title");
        assert!(log.tokens.is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let file = write_log("");
        let log = load(file.path()).unwrap();
        assert_eq!(log, LoadedLog::default());
    }

    #[test]
    fn test_load_splits_on_any_whitespace() {
        let file = write_log("title\nFrame\t0\n\n   EntityCount:   5 \n");
        let log = load(file.path()).unwrap();
        assert_eq!(log.tokens, vec!["Frame", "0", "EntityCount:", "5"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let file = write_log("title\nFrame 10 EntityCount: 3\n");
        let first = load(file.path()).unwrap();
        let second = load(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_invalid_utf8() {
        for contents in [&b"title\nFrame \xff 1\n"[..], &b"ti\xfftle\nFrame 0 EntityCount: 1\n"[..]] {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(contents).unwrap();
            file.flush().unwrap();

            match load(file.path()) {
                Err(AnalyzerError::FileAccess { source, .. }) => {
                    assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
                }
                other => panic!("Expected FileAccess error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        match load(&path) {
            Err(AnalyzerError::FileAccess { path: reported, source }) => {
                assert!(reported.ends_with("does_not_exist.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected FileAccess error, got {:?}", other),
        }
    }
}
