//! Styled terminal output for `souschef`.
//!
//! Results go to stdout. Failures and warnings go to stderr. `anstream`
//! strips the styling when the stream is not a terminal, so piped JSON stays
//! clean.

mod styles;
mod table;

use std::fmt::Display;
use std::io::Write;

use anstyle::Style;
use serde::Serialize;

pub(crate) use styles::clap_styles;

use styles::{EMPHASIS, ERROR, HINT, MUTED, SUCCESS, WARNING};

fn stdout_line(style: Style, text: impl Display) {
    writeln!(anstream::stdout().lock(), "{style}{text}{style:#}").ok();
}

pub(crate) fn success(msg: impl Display) {
    stdout_line(SUCCESS, format_args!("✓ {msg}"));
}

/// Report a failure on stderr.
pub(crate) fn error(msg: impl Display) {
    writeln!(anstream::stderr().lock(), "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Report a non-fatal problem on stderr.
pub(crate) fn warning(msg: impl Display) {
    writeln!(anstream::stderr().lock(), "{WARNING}! {msg}{WARNING:#}").ok();
}

/// `  name: value` with the name emphasized.
pub(crate) fn label(name: impl Display, value: impl Display) {
    writeln!(anstream::stdout().lock(), "  {EMPHASIS}{name}:{EMPHASIS:#} {value}").ok();
}

pub(crate) fn dim(msg: impl Display) {
    stdout_line(MUTED, msg);
}

/// Suggested next step for the user.
pub(crate) fn hint(msg: impl Display) {
    stdout_line(HINT, msg);
}

pub(crate) fn blank() {
    writeln!(anstream::stdout().lock()).ok();
}

/// Print a response body as pretty JSON.
pub(crate) fn json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => stdout_line(Style::new(), rendered),
        Err(e) => error(format!("Could not render response as JSON: {e}")),
    }
}

pub(crate) fn table(headers: &[&str], rows: &[Vec<String>]) {
    let (header_line, body) = table::render_table(headers, rows);
    let mut out = anstream::stdout().lock();
    writeln!(out, "{EMPHASIS}{header_line}{EMPHASIS:#}").ok();
    for line in body {
        writeln!(out, "{line}").ok();
    }
}
