//! Render lexer diagnostics as annotated source snippets.

use std::io;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use sterfmt_lexer::LexError;

/// Rendering options for [`render_errors`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Write one report per error to `out`.
///
/// `name` labels the source in report headers, e.g. a file path or `<stdin>`.
pub fn render_errors<W: io::Write>(
    out: &mut W,
    name: &str,
    source: &str,
    errors: &[LexError],
    options: RenderOptions,
) -> io::Result<()> {
    for error in errors {
        let range = error.span.to_range();
        let config = Config::default()
            .with_color(options.color)
            .with_index_type(IndexType::Byte);
        let mut report = Report::build(ReportKind::Error, name, range.start)
            .with_config(config)
            .with_message(error.title())
            .with_label(
                Label::new((name, range))
                    .with_message(error.kind.to_string())
                    .with_color(Color::Red),
            );
        for suggestion in &error.suggestions {
            report = report.with_help(&suggestion.message);
        }
        report
            .finish()
            .write((name, Source::from(source.to_owned())), &mut *out)?;
    }
    Ok(())
}

/// Render to a `String` with color disabled.
pub fn render_to_string(name: &str, source: &str, errors: &[LexError]) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    if render_errors(&mut out, name, source, errors, RenderOptions { color: false }).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests;
