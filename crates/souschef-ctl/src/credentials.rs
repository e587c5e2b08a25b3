//! Local credential cache in `.env` files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use souschef_client::{ClientError, ClientResult};

const DOTENV_FILENAME: &str = ".env";

/// Find the nearest `.env`, starting at `start` and walking up.
pub(crate) fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Insert or replace `key` in the `.env` file at `path`.
///
/// Other lines are kept as they are. The file is created if missing.
/// Values with line breaks cannot be stored on one line and are rejected.
pub(crate) fn set_key(path: &Path, key: &str, value: &str) -> ClientResult<()> {
    if value.contains(['\n', '\r']) {
        return Err(ClientError::InvalidInput(format!(
            "{key} cannot be cached: value contains a line break"
        )));
    }

    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let entry = format!("{key}={}", quote(value));
    let mut replaced = false;
    let mut lines: Vec<String> = existing
        .lines()
        .map(|line| {
            if !replaced && line_key(line) == Some(key) {
                replaced = true;
                entry.clone()
            } else {
                line.to_string()
            }
        })
        .collect();
    if !replaced {
        lines.push(entry);
    }

    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), key, replaced, "Updated .env entry");
    Ok(())
}

/// Key of an assignment line, ignoring comments and an `export ` prefix.
fn line_key(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    line.split_once('=').map(|(key, _)| key.trim())
}

/// Quote `value` so dotenvy reads it back unchanged.
///
/// Single quotes are literal. Double quotes are only used when the value
/// holds a `'`, and then `\`, `"` and `$` are escaped so nothing expands.
fn quote(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
