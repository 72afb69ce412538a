// tests/common.rs
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `relative` inside `dir`, creating parent folders.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create {}: {}", parent.display(), e));
    }
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Runs the full report over an in-memory text.
#[allow(dead_code)]
pub fn report_for(text: &str) -> String {
    let mut out = Vec::new();
    backtick_scan::report::write_report(&mut out, text).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("report is UTF-8")
}
