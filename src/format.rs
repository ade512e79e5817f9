//! COE text format constants and hex rendering.
//!
//! Defines the fixed header lines, terminator, and word size of the COE
//! memory-initialization files this crate produces. Words are rendered as
//! lowercase hex in file byte order; they are never reinterpreted as integers.

/// First header line: radix declaration.
pub const RADIX_LINE: &str = "memory_initialization_radix = 16;";

/// Second header line: opens the initialization vector.
pub const VECTOR_LINE: &str = "memory_initialization_vector =";

/// Terminator written as the very last byte of the document.
pub const TERMINATOR: u8 = b';';

/// Line separator after each header and data line.
pub const LINE_END: u8 = b'\n';

/// Bytes per word (one data line).
pub const WORD_LEN: usize = 4;

/// Hex characters per data line: two per byte.
pub const HEX_WORD_LEN: usize = WORD_LEN * 2;

/// One raw word as read from the input.
pub type Word = [u8; WORD_LEN];

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Map a 4-bit value to its lowercase hex character. Only the low nibble of `n` is used.
#[inline]
#[must_use]
pub fn nibble_to_hex(n: u8) -> u8 {
    HEX_DIGITS[usize::from(n & 0x0F)]
}

/// Inverse of [`nibble_to_hex`]; accepts lowercase digits only.
#[inline]
#[must_use]
pub fn hex_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Render one word as 8 hex characters, high nibble before low nibble for each byte.
#[must_use]
pub fn encode_word(word: &Word) -> [u8; HEX_WORD_LEN] {
    let mut out = [0u8; HEX_WORD_LEN];
    for (i, byte) in word.iter().enumerate() {
        out[2 * i] = nibble_to_hex(byte >> 4);
        out[2 * i + 1] = nibble_to_hex(*byte);
    }
    out
}

/// Parse one data line back into a word. Returns `None` unless `text` is exactly
/// 8 lowercase hex characters.
#[must_use]
pub fn decode_word(text: &[u8]) -> Option<Word> {
    if text.len() != HEX_WORD_LEN {
        return None;
    }
    let mut word = [0u8; WORD_LEN];
    for (i, pair) in text.chunks_exact(2).enumerate() {
        word[i] = (hex_to_nibble(pair[0])? << 4) | hex_to_nibble(pair[1])?;
    }
    Some(word)
}
