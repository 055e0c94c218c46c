//! Utility functions for file names, file reading and log formatting.

use crate::error::Result;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Append `.txt` to `name` unless it already ends with it.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(with_txt_extension("speech"), "speech.txt");
/// assert_eq!(with_txt_extension("speech.txt"), "speech.txt");
/// ```
pub fn with_txt_extension(name: &str) -> String {
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{name}.txt")
    }
}

/// Read a UTF-8 text file in full.
///
/// # Errors
///
/// Propagates the underlying I/O error, including not-found and invalid
/// UTF-8.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_text_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).await?;
    info!(bytes = text.len(), "Read text file");
    debug!(preview = %truncate_for_log(&text, 120), "File contents");
    Ok(text)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, backing off to the nearest
/// character boundary, with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
