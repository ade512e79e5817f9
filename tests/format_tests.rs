//! Format tests: nibble mapping and word rendering.

use bin2coe::format::{decode_word, encode_word, hex_to_nibble, nibble_to_hex};

#[test]
fn nibbles_map_to_lowercase_hex() {
    let rendered: Vec<u8> = (0..16).map(nibble_to_hex).collect();
    assert_eq!(rendered, b"0123456789abcdef");
}

/// Only the low four bits select the digit.
#[test]
fn nibble_ignores_high_bits() {
    assert_eq!(nibble_to_hex(0xFA), b'a');
    assert_eq!(nibble_to_hex(0x10), b'0');
}

#[test]
fn hex_to_nibble_rejects_uppercase_and_junk() {
    assert_eq!(hex_to_nibble(b'f'), Some(15));
    assert_eq!(hex_to_nibble(b'F'), None);
    assert_eq!(hex_to_nibble(b'g'), None);
    assert_eq!(hex_to_nibble(b'x'), None);
}

/// High nibble first, bytes in the order given.
#[test]
fn encode_word_keeps_byte_order() {
    assert_eq!(&encode_word(&[0xFF, 0x0A, 0xB3, 0x00]), b"ff0ab300");
    assert_eq!(&encode_word(&[0x00, 0x01, 0x02, 0x03]), b"00010203");
}

#[test]
fn decode_word_inverts_encode_word() {
    for word in [[0u8; 4], [0xFF; 4], [0x12, 0x34, 0xAB, 0xCD]] {
        assert_eq!(decode_word(&encode_word(&word)), Some(word));
    }
    assert_eq!(decode_word(b"1234"), None);
    assert_eq!(decode_word(b"123456789"), None);
}
