//! COE reader: parse a COE document produced by this crate back into bytes.
//!
//! Strict about layout: both header lines verbatim, 8 lowercase hex digits per
//! data line, and a lone `;` as the final byte.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::format::{decode_word, LINE_END, RADIX_LINE, TERMINATOR, VECTOR_LINE};

/// Errors produced by the COE reader.
#[derive(Debug, Error)]
pub enum CoeParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header: document ends before the vector starts")]
    MissingHeader,
    #[error("bad radix line: expected \"{}\"", RADIX_LINE)]
    BadRadixLine,
    #[error("bad vector line: expected \"{}\"", VECTOR_LINE)]
    BadVectorLine,
    #[error("line {line}: invalid word {text:?} (expected 8 lowercase hex digits)")]
    InvalidWord { line: usize, text: String },
    #[error("missing terminator ';'")]
    MissingTerminator,
    #[error("unexpected data after terminator")]
    TrailingData,
}

/// Parsed COE document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoeReader {
    /// Decoded vector bytes, 4 per data line, in document order.
    data: Vec<u8>,
}

impl CoeReader {
    /// Open and parse a .coe file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CoeParseError> {
        let file = File::open(path)?;
        let data = read_coe(BufReader::new(file))?;
        Ok(Self { data })
    }

    /// Decoded bytes of the initialization vector.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of words (data lines) in the document.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.data.len() / crate::format::WORD_LEN
    }
}

/// Parse a COE document from `input` and return the decoded vector bytes.
pub fn read_coe<R: BufRead>(mut input: R) -> Result<Vec<u8>, CoeParseError> {
    let mut line = Vec::new();

    // --- Header ---
    for (expected, mismatch) in [
        (RADIX_LINE, CoeParseError::BadRadixLine),
        (VECTOR_LINE, CoeParseError::BadVectorLine),
    ] {
        let end = read_line(&mut input, &mut line)?;
        if end == LineEnd::Eof && line.is_empty() {
            return Err(CoeParseError::MissingHeader);
        }
        if line != expected.as_bytes() {
            return Err(mismatch);
        }
        if end == LineEnd::Eof {
            return Err(CoeParseError::MissingHeader);
        }
    }

    // --- Vector body, then terminator ---
    let mut data = Vec::new();
    let mut line_no = 2;
    loop {
        line_no += 1;
        let end = read_line(&mut input, &mut line)?;
        if line == [TERMINATOR] {
            return match end {
                LineEnd::Eof => Ok(data),
                LineEnd::Newline => Err(CoeParseError::TrailingData),
            };
        }
        if end == LineEnd::Eof {
            return Err(if line.first() == Some(&TERMINATOR) {
                CoeParseError::TrailingData
            } else {
                CoeParseError::MissingTerminator
            });
        }
        let word = decode_word(&line).ok_or_else(|| CoeParseError::InvalidWord {
            line: line_no,
            text: String::from_utf8_lossy(&line).into_owned(),
        })?;
        data.extend_from_slice(&word);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    Newline,
    Eof,
}

/// Read one line into `buf` without its trailing newline.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<LineEnd> {
    buf.clear();
    input.read_until(LINE_END, buf)?;
    if buf.last() == Some(&LINE_END) {
        buf.pop();
        Ok(LineEnd::Newline)
    } else {
        Ok(LineEnd::Eof)
    }
}
