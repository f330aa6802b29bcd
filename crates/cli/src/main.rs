//! CLI tool for converting subtitle files into plain-text transcripts.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::ffi::OsStr;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Suffix appended to the input stem to name the output file.
const OUTPUT_SUFFIX: &str = "_converted.txt";

/// Convert a subtitle file into a single deduplicated paragraph of text.
#[derive(Parser, Debug)]
#[command(name = "srt-clean")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Input subtitle file (.srt)
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            log::debug!("Argument error: {:?}", e.kind());
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::from(1);
        }
    };

    match process_file(&args.input) {
        Ok(output_path) => log::info!("Written to: {}", output_path.display()),
        Err(e) => report_error(&args.input, &e),
    }

    ExitCode::SUCCESS
}

/// Convert a single subtitle file and write the transcript next to it.
fn process_file(input_path: &Path) -> Result<PathBuf> {
    log::debug!("Processing: {}", input_path.display());

    let output = srt_core::srt_to_text(input_path)?;

    let output_path = get_output_path(input_path);
    write_output(&output_path, &output)?;

    Ok(output_path)
}

/// Print a user-facing message for a failed conversion.
fn report_error(input_path: &Path, err: &anyhow::Error) {
    match err.downcast_ref::<srt_core::Error>() {
        Some(e) if e.is_not_found() => {
            eprintln!("Error: The file '{}' was not found.", input_path.display());
        }
        // Core errors already carry their cause in the message.
        Some(e) => eprintln!("An error occurred: {}", e),
        None => eprintln!("An error occurred: {:#}", err),
    }
}

/// Determine the output path for a processed file.
///
/// Only the final extension of the file name is removed, so
/// `movie.en.srt` becomes `movie.en_converted.txt` in the same directory.
/// The name is handled as an `OsStr` so non-UTF-8 names survive intact.
fn get_output_path(input_path: &Path) -> PathBuf {
    let stem = match (input_path.file_stem(), input_path.extension()) {
        (Some(stem), Some(_)) => stem,
        // A leading dot is the only dot, e.g. `.srt`.
        (Some(stem), None) if stem.as_encoded_bytes().starts_with(b".") => OsStr::new(""),
        (Some(stem), None) => stem,
        (None, _) => OsStr::new(""),
    };

    let mut output_filename = stem.to_os_string();
    output_filename.push(OUTPUT_SUFFIX);

    match input_path.parent() {
        Some(parent) => parent.join(output_filename),
        None => PathBuf::from(output_filename),
    }
}

/// Write output to a file, replacing any existing content.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
