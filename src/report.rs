// src/report.rs
use crate::scanner::{classify_each, count_escaped_substring, count_total, Classified};
use crate::token::Verdict;
use std::io::{self, Write};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub escaped_substrings: usize,
    pub reported: usize,
}

fn write_finding<W: Write>(out: &mut W, found: Classified) -> io::Result<()> {
    match found.verdict {
        Verdict::Unescaped => writeln!(out, "Unescaped backtick at index {}", found.index),
        Verdict::UnescapedAfterDoubleBackslash => writeln!(
            out,
            "Unescaped backtick at index {} (preceded by double backslash)",
            found.index
        ),
        Verdict::Escaped => Ok(()),
    }
}

// Findings are streamed as the scan advances.
pub fn write_report<W: Write>(out: &mut W, text: &str) -> io::Result<Summary> {
    let total = count_total(text);
    writeln!(out, "Total backticks: {}", total)?;

    let escaped_substrings = count_escaped_substring(text);
    writeln!(out, "Escaped backticks: {}", escaped_substrings)?;

    let mut reported = 0;
    for found in classify_each(text) {
        if found.verdict.is_reported() {
            reported += 1;
        }
        write_finding(out, found)?;
    }

    Ok(Summary { total, escaped_substrings, reported })
}
