//! Payload acquisition from files and stdin.

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// A payload and where it came from.
pub struct Source {
    /// Display name (file path or `<stdin>`).
    pub name: String,
    /// Raw payload text.
    pub text: String,
}

/// Read a payload file.
pub fn read_file(path: &Path) -> Result<Source> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "read payload file");
    Ok(Source {
        name: path.display().to_string(),
        text,
    })
}

/// Read one payload from stdin.
pub fn read_stdin() -> Result<Source> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste the pose detector JSON, then finish with an empty line:");
    }
    let text = read_payload(stdin.lock()).context("failed to read stdin")?;
    Ok(Source {
        name: "<stdin>".to_string(),
        text,
    })
}

/// Collect lines until EOF or the first empty line after some content.
///
/// Leading empty lines are skipped so a stray Enter does not end the paste.
fn read_payload(reader: impl BufRead) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(trimmed.to_string());
    }
    Ok(lines.join("\n"))
}
