//! Output file naming.

use chrono::{DateTime, Local, TimeZone};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tone_stretch::OutputFormat;
use unicode_normalization::UnicodeNormalization;

/// Timestamp format used in generated file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Name used when sanitizing leaves nothing
const FALLBACK_NAME: &str = "image";

/// Current local time formatted for file names
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Reduce a file name to a safe ASCII form.
///
/// Accented letters are folded to their ASCII base (`ä` becomes `a`).
/// Keeps ASCII letters, digits, `.`, `-` and `_`; whitespace becomes `_`;
/// everything else is dropped. Dots and underscores are stripped from both
/// ends so the result is never hidden or empty.
pub fn secure_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let folded: String = base.nfkd().filter(char::is_ascii).collect();
    let cleaned: String = folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let trimmed = cleaned.trim_matches(['.', '_']);
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sanitized file stem of an input path
pub fn secure_stem(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    secure_filename(&stem)
}

/// Sanitized stems for a set of inputs, made distinct by `_2`, `_3`, ...
/// suffixes in input order.
///
/// Comparison ignores ASCII case so names stay distinct on case-insensitive
/// file systems.
pub fn unique_stems(inputs: &[PathBuf]) -> Vec<String> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = secure_stem(input);
            let mut candidate = stem.clone();
            let mut n = 2;
            while !taken.insert(candidate.to_ascii_lowercase()) {
                candidate = format!("{stem}_{n}");
                n += 1;
            }
            candidate
        })
        .collect()
}

/// `output_<timestamp>_<stem>.<ext>`
pub fn output_file_name(stem: &str, timestamp: &str, format: OutputFormat) -> String {
    format!("output_{}_{}.{}", timestamp, stem, format.extension())
}

/// `preview_<timestamp>.png`, or `preview_<timestamp>_<stem>.png` when
/// several previews share a timestamp
pub fn preview_file_name(timestamp: &str, stem: Option<&str>) -> String {
    match stem {
        Some(stem) => format!("preview_{}_{}.png", timestamp, secure_filename(stem)),
        None => format!("preview_{}.png", timestamp),
    }
}
