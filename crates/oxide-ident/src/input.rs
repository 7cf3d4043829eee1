//! Collecting the identifier strings to check.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::info;

use crate::error::{CliError, Result};

/// Reads one input per line. Line terminators are stripped; other
/// whitespace is kept since it is significant to the grammar.
///
/// # Errors
///
/// Returns an IO error if reading fails.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Reads inputs from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns [`CliError::ReadInput`] if the file cannot be read.
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        info!("Reading identifiers from stdin");
        return read_lines(io::stdin().lock());
    }
    let content = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = read_lines(content.as_bytes())?;
    info!("Read {} identifiers from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_lines_keeps_spaces() {
        let lines = read_lines("  a.b \n\"x y\"\r\n\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["  a.b ", "\"x y\"", ""]);
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "public.users").unwrap();
        writeln!(file, "  orders ").unwrap();
        let lines = read_file(file.path()).unwrap();
        assert_eq!(lines, vec!["public.users", "  orders "]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, CliError::ReadInput { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
