//! bin2coe — convert raw binary images into COE memory-initialization files.
//!
//! This crate provides:
//! - **Format** (`format`): header lines, terminator, word size, nibble/hex mapping.
//! - **Chunks** (`chunks`): lazy 4-byte word iterator that stops on a short read.
//! - **Writer** (`writer`): `CoeWriter` emitting header, hex lines, and `;`.
//! - **Reader** (`reader`): `CoeReader::open(path)` / `read_coe` to decode a COE file back to bytes.
//! - **Converter** (`convert`): `convert(input, output)`, `convert_stream` over any reader/writer, and `verify`.
//! - **CLI** (binary `bin2coe`): `bin2coe <input-binary-path> <output-coe-path>`.

pub mod chunks;
pub mod convert;
pub mod format;
pub mod reader;
pub mod writer;

pub use chunks::Chunks;
pub use convert::{convert, convert_stream, verify, ConvertError, ConvertSummary};
pub use format::{encode_word, nibble_to_hex, RADIX_LINE, TERMINATOR, VECTOR_LINE, WORD_LEN};
pub use reader::{read_coe, CoeParseError, CoeReader};
pub use writer::CoeWriter;
