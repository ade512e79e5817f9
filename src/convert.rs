//! Converter: raw binary file → COE text file.
//!
//! The input must open as a regular file before the output is touched. The
//! document is written to a staging file beside the output and renamed into
//! place only after the terminator is flushed, so a failed run never leaves a
//! truncated or half-written .coe behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::chunks::Chunks;
use crate::reader::CoeReader;
use crate::writer::CoeWriter;

/// Errors produced by the converter and the CLI around it.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid arguments.")]
    InvalidArguments,
    #[error("Fail to open file: {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Fail to open file: {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("verification failed: {0}")]
    Verify(String),
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertSummary {
    /// Data lines written (one per 4-byte word).
    pub words: u64,
    /// Input bytes rendered into those lines.
    pub bytes_converted: u64,
    /// Trailing bytes (0–3) that did not fill a word and were dropped.
    pub bytes_discarded: usize,
}

/// Convert the binary file at `input_path` into a COE file at `output_path`
/// (created or replaced).
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<ConvertSummary, ConvertError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let input_open = |source: std::io::Error| ConvertError::InputOpen {
        path: input_path.to_path_buf(),
        source,
    };
    let output_open = |source: std::io::Error| ConvertError::OutputOpen {
        path: output_path.to_path_buf(),
        source,
    };

    let input = File::open(input_path).map_err(input_open)?;
    if !input.metadata().map_err(input_open)?.is_file() {
        return Err(input_open(std::io::Error::new(
            ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    let mut staged = staging_file(output_path).map_err(output_open)?;
    let summary = convert_stream(BufReader::new(input), BufWriter::new(staged.as_file_mut()))?;
    staged.as_file().sync_all()?;
    staged
        .persist(output_path)
        .map_err(|e| output_open(e.error))?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        words = summary.words,
        "wrote COE file"
    );
    Ok(summary)
}

/// Create the staging file in the output's directory so the final rename stays on one filesystem.
fn staging_file(output_path: &Path) -> std::io::Result<NamedTempFile> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".bin2coe-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Same mode File::create uses; umask still applies.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Decode the COE file at `output_path` and check it against the first
/// `summary.bytes_converted` bytes of `input_path`.
pub fn verify<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    summary: &ConvertSummary,
) -> Result<(), ConvertError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let original = std::fs::read(input_path)?;
    let decoded = CoeReader::open(output_path)
        .map_err(|e| ConvertError::Verify(format!("{}: {e}", output_path.display())))?;
    let expected = usize::try_from(summary.bytes_converted)
        .ok()
        .and_then(|len| original.get(..len))
        .ok_or_else(|| {
            ConvertError::Verify(format!(
                "{} is shorter than the converted length",
                input_path.display()
            ))
        })?;
    if decoded.data() != expected {
        return Err(ConvertError::Verify(format!(
            "{} does not match {}",
            output_path.display(),
            input_path.display()
        )));
    }
    debug!(words = decoded.word_count(), "verified COE output");
    Ok(())
}

/// Convert everything readable from `input` and write the COE document to `output`.
/// The output is flushed before returning.
pub fn convert_stream<R: Read, W: Write>(
    input: R,
    output: W,
) -> Result<ConvertSummary, ConvertError> {
    let mut writer = CoeWriter::new(output)?;
    let mut chunks = Chunks::new(input);
    for word in chunks.by_ref() {
        writer.write_word(&word?)?;
    }
    let (_, words) = writer.finish()?;

    let summary = ConvertSummary {
        words,
        bytes_converted: chunks.consumed(),
        bytes_discarded: chunks.remainder(),
    };
    if summary.bytes_discarded > 0 {
        debug!(
            discarded = summary.bytes_discarded,
            "dropped trailing partial word"
        );
    }
    Ok(summary)
}
