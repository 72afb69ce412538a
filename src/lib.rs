pub mod token;
pub mod lexer;
pub mod scanner;
pub mod report;

pub use report::Summary;
pub use scanner::{classify_each, count_escaped_substring, count_total, Classified, Classify};
pub use token::{Token, Verdict};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path inspected when none is given on the command line.
pub const DEFAULT_TARGET: &str = "app/api/chat/route.ts";

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("File not found.")]
    FileNotFound { path: PathBuf },
    #[error("Failed to read source file")]
    Io(#[from] std::io::Error),
}

/// `\r\n` and lone `\r` become `\n`; indices are reported against this text.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads the whole file as UTF-8 text with line endings normalized.
/// The handle is closed before returning.
pub fn load_source(path: &Path) -> Result<String, CheckError> {
    if !path.exists() {
        return Err(CheckError::FileNotFound { path: path.to_path_buf() });
    }
    let raw = fs::read_to_string(path)?;
    let raw_len = raw.len();
    let source = normalize_newlines(raw);
    log::info!("loaded {} ({} bytes, {} after newline normalization)", path.display(), raw_len, source.len());
    Ok(source)
}

/// Loads `path` and writes the backtick report to `out`.
pub fn check_file<W: Write>(path: &Path, out: &mut W) -> Result<Summary, CheckError> {
    let source = load_source(path)?;
    let summary = report::write_report(out, &source)?;
    log::info!(
        "{}: {} backticks, {} escaped sequences, {} unescaped",
        path.display(),
        summary.total,
        summary.escaped_substrings,
        summary.reported
    );
    Ok(summary)
}
