//! Whole-file text reading
//!
//! Lyrics are read in one go and must be valid UTF-8. Line endings are
//! normalised to `\n` so CRLF files escape the same way as LF files.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while reading a text file
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", .path.display())]
    InvalidUtf8 { path: PathBuf, offset: usize },
}

impl ReadError {
    /// Kind of the underlying I/O error, if any
    #[allow(dead_code)]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            ReadError::Io { source, .. } => Some(source.kind()),
            ReadError::InvalidUtf8 { .. } => None,
        }
    }
}

/// Read the whole file as UTF-8 text with normalised line endings
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    Ok(normalize_newlines(content))
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("song.txt");
        fs::write(&file, "line 1\nline 2").unwrap();

        assert_eq!(read_text(&file).unwrap(), "line 1\nline 2");
    }

    #[test]
    fn test_read_text_crlf() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("song.txt");
        fs::write(&file, "a\r\nb\rc\n").unwrap();

        assert_eq!(read_text(&file).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_read_text_missing() {
        let temp = tempfile::tempdir().unwrap();
        let err = read_text(&temp.path().join("missing.txt")).unwrap_err();

        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("bin.txt");
        fs::write(&file, [b'o', b'k', 0xff, 0xfe]).unwrap();

        let err = read_text(&file).unwrap_err();
        assert!(matches!(err, ReadError::InvalidUtf8 { offset: 2, .. }));
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn test_normalize_newlines_untouched() {
        let s = "no carriage returns\n".to_string();
        assert_eq!(normalize_newlines(s.clone()), s);
    }
}
