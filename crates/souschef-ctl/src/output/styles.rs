//! Palette for `souschef` output and help text.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn paint(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

pub(crate) const SUCCESS: Style = paint(AnsiColor::Green);
pub(crate) const ERROR: Style = paint(AnsiColor::Red);
pub(crate) const WARNING: Style = paint(AnsiColor::Yellow);

/// Table header rows and the name half of "name: value" pairs.
pub(crate) const EMPHASIS: Style = Style::new().effects(Effects::BOLD);

/// Progress notes and service diagnostics.
pub(crate) const MUTED: Style = Style::new().effects(Effects::DIMMED);

/// Guidance on what to do next.
pub(crate) const HINT: Style = paint(AnsiColor::Cyan).effects(Effects::ITALIC);

pub(crate) fn clap_styles() -> clap::builder::Styles {
    let heading = paint(AnsiColor::Green).effects(Effects::BOLD);
    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(paint(AnsiColor::Cyan))
        .placeholder(paint(AnsiColor::Cyan))
        .error(paint(AnsiColor::Red).effects(Effects::BOLD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_styles_are_distinct() {
        let styles = [SUCCESS, ERROR, WARNING, EMPHASIS, MUTED, HINT];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
