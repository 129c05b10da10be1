//! Input sources
//!
//! Every command hashes raw bytes; this module turns command-line arguments
//! into those bytes.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors reading or decoding an input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid hex: {source}")]
    BatchLine {
        line: usize,
        #[source]
        source: hex::FromHexError,
    },
}

/// Where the bytes to hash come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// UTF-8 bytes of a literal string
    Text(String),
    /// Hex-encoded bytes (optional `0x` prefix, surrounding whitespace ignored)
    Hex(String),
    /// Raw contents of a file
    File(PathBuf),
    /// Raw bytes from standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from mutually exclusive arguments, stdin if none given
    pub fn from_args(text: Option<String>, hex: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, hex, file) {
            (Some(text), _, _) => InputSource::Text(text),
            (None, Some(hex), _) => InputSource::Hex(hex),
            (None, None, Some(path)) => InputSource::File(path),
            (None, None, None) => InputSource::Stdin,
        }
    }

    /// Read the input bytes
    pub fn read(&self) -> Result<Vec<u8>, InputError> {
        match self {
            InputSource::Text(text) => Ok(text.as_bytes().to_vec()),
            InputSource::Hex(encoded) => Ok(decode_hex(encoded)?),
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => read_all(io::stdin().lock(), "<stdin>"),
        }
    }
}

/// Decode hex, tolerating a `0x` prefix and surrounding whitespace
pub fn decode_hex(encoded: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let trimmed = encoded.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits)
}

/// Parse a batch file: one hex-encoded input per line.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
pub fn parse_batch(contents: &str) -> Result<Vec<Vec<u8>>, InputError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            decode_hex(line).map_err(|source| InputError::BatchLine {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Read a whole file
pub fn read_file(path: &Path) -> Result<Vec<u8>, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read input file");
    Ok(bytes)
}

/// Read a whole file as text
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_all<R: Read>(mut reader: R, label: &str) -> Result<Vec<u8>, InputError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::Io {
            path: label.to_string(),
            source,
        })?;
    debug!(source = label, len = bytes.len(), "read input");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_priority() {
        assert_eq!(
            InputSource::from_args(Some("a".into()), Some("00".into()), None),
            InputSource::Text("a".into())
        );
        assert_eq!(
            InputSource::from_args(None, Some("00".into()), Some("f".into())),
            InputSource::Hex("00".into())
        );
        assert_eq!(
            InputSource::from_args(None, None, Some("f".into())),
            InputSource::File("f".into())
        );
        assert_eq!(InputSource::from_args(None, None, None), InputSource::Stdin);
    }

    #[test]
    fn test_decode_hex_variants() {
        assert_eq!(decode_hex("616263").unwrap(), b"abc");
        assert_eq!(decode_hex("  0x616263\n").unwrap(), b"abc");
        assert_eq!(decode_hex("0X00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn test_text_and_hex_sources_agree() {
        let text = InputSource::Text("abc".into()).read().unwrap();
        let hex = InputSource::Hex("616263".into()).read().unwrap();
        assert_eq!(text, hex);
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8, 1, 2, 0xFF]).unwrap();

        let bytes = InputSource::File(file.path().to_path_buf()).read().unwrap();
        assert_eq!(bytes, vec![0u8, 1, 2, 0xFF]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = InputSource::File("/nonexistent/zr5/input".into())
            .read()
            .unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/zr5/input"));
    }

    #[test]
    fn test_read_all_from_reader() {
        let bytes = read_all(&b"streamed"[..], "test").unwrap();
        assert_eq!(bytes, b"streamed");
    }

    #[test]
    fn test_parse_batch() {
        let contents = "# header\n616263\n\n  0x00  \n\n";
        let inputs = parse_batch(contents).unwrap();
        assert_eq!(inputs, vec![b"abc".to_vec(), vec![0u8]]);
    }

    #[test]
    fn test_parse_batch_reports_line() {
        let err = parse_batch("00\n# ok\nnothex\n").unwrap_err();
        match err {
            InputError::BatchLine { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }
}
