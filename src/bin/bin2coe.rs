//! bin2coe: turn a raw binary image into a COE memory-initialization file.
//!
//! Usage: `bin2coe <input-binary-path> <output-coe-path> [--json] [--verify]`.
//! Anything other than exactly two positional paths prints `Invalid arguments.`
//! and exits 1 before touching the filesystem.

use std::path::PathBuf;
use std::process::ExitCode;

use bin2coe::{convert, verify, ConvertError};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bin2coe")]
#[command(about = "Convert a raw binary file into a COE memory-initialization file")]
#[command(version)]
struct Cli {
    /// Raw binary input file
    input: PathBuf,

    /// COE file to create or overwrite
    output: PathBuf,

    /// Print a JSON summary of the conversion to stdout
    #[arg(long)]
    json: bool,

    /// Re-read the written file and check it against the input
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", ConvertError::InvalidArguments);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let summary = convert(&cli.input, &cli.output)?;
    if cli.verify {
        verify(&cli.input, &cli.output, &summary)?;
    }
    if cli.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| ConvertError::Io(std::io::Error::other(e)))?;
        println!("{json}");
    }
    Ok(())
}
