//! Minimal example: convert a small in-memory image to COE text, print it, then decode it back.
//!
//! Run: cargo run --example convert_and_read

use bin2coe::{convert_stream, read_coe};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let image: Vec<u8> = vec![0x13, 0x00, 0x00, 0x00, 0x6f, 0x00, 0x00, 0x00, 0xaa];

    let mut coe = Vec::new();
    let summary = convert_stream(&image[..], &mut coe)?;
    println!("{}", String::from_utf8(coe.clone())?);
    println!(
        "words: {}, discarded trailing bytes: {}",
        summary.words, summary.bytes_discarded
    );

    let decoded = read_coe(&coe[..])?;
    assert_eq!(decoded, &image[..8]);
    println!("decoded {} bytes back", decoded.len());
    Ok(())
}
