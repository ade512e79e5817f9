//! Lazy 4-byte chunking over any reader.
//!
//! Yields full words only. The first short read ends the sequence; the 0–3
//! leftover bytes are counted but never yielded.

use std::io::{ErrorKind, Read};

use crate::format::{Word, WORD_LEN};

/// Iterator over the full words of a byte stream.
pub struct Chunks<R> {
    inner: R,
    /// Bytes discarded by the terminating short read.
    remainder: usize,
    /// Bytes yielded so far (always a multiple of WORD_LEN).
    consumed: u64,
    done: bool,
}

impl<R: Read> Chunks<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            remainder: 0,
            consumed: 0,
            done: false,
        }
    }

    /// Trailing bytes dropped at end of input. Only meaningful once the iterator is exhausted.
    #[must_use]
    pub fn remainder(&self) -> usize {
        self.remainder
    }

    /// Bytes handed out as full words so far.
    #[must_use]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Fill `buf` as far as the reader allows. Returns the number of bytes read;
    /// less than `buf.len()` means end of input.
    fn fill(&mut self, buf: &mut Word) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for Chunks<R> {
    type Item = std::io::Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut word = [0u8; WORD_LEN];
        match self.fill(&mut word) {
            Ok(WORD_LEN) => {
                self.consumed += WORD_LEN as u64;
                Some(Ok(word))
            }
            Ok(short) => {
                self.done = true;
                self.remainder = short;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Chunks<R> {}
