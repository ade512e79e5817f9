//! COE writer: header, one hex line per word, terminator.
//!
//! Used by the converter. The caller drives the body; `finish` writes the
//! trailing `;` and flushes.

use std::io::Write;

use crate::format::{encode_word, Word, LINE_END, RADIX_LINE, TERMINATOR, VECTOR_LINE};

/// Streaming COE document writer.
pub struct CoeWriter<W: Write> {
    out: W,
    words: u64,
}

impl<W: Write> CoeWriter<W> {
    /// Write both header lines and return a writer positioned at the start of the vector.
    pub fn new(mut out: W) -> std::io::Result<Self> {
        out.write_all(RADIX_LINE.as_bytes())?;
        out.write_all(&[LINE_END])?;
        out.write_all(VECTOR_LINE.as_bytes())?;
        out.write_all(&[LINE_END])?;
        Ok(Self { out, words: 0 })
    }

    /// Append one data line (8 lowercase hex characters + newline).
    pub fn write_word(&mut self, word: &Word) -> std::io::Result<()> {
        self.out.write_all(&encode_word(word))?;
        self.out.write_all(&[LINE_END])?;
        self.words += 1;
        Ok(())
    }

    /// Number of data lines written so far.
    #[must_use]
    pub fn words(&self) -> u64 {
        self.words
    }

    /// Write the terminator (no newline after it), flush, and hand back the sink.
    pub fn finish(mut self) -> std::io::Result<(W, u64)> {
        self.out.write_all(&[TERMINATOR])?;
        self.out.flush()?;
        Ok((self.out, self.words))
    }
}
