//! Command implementations for the `sterfmt` binary.
//!
//! Each command writes to a caller-supplied writer so it can be driven from
//! tests; `main.rs` passes stdout and turns results into exit codes.

mod check;
mod demo;
mod keywords;
mod lex;

use std::io::{self, Read};

use sterfmt_lexer::IdentOverflow;

use crate::diagnostic::RenderOptions;
use crate::SessionConfig;

pub use check::check_source;
pub use demo::{run_demo, DEMO_INPUT};
pub use keywords::list_keywords;
pub use lex::lex_source;

/// Options shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub session: SessionConfig,
    pub render: RenderOptions,
}

/// Split `args` into options and positional arguments.
///
/// Recognized flags: `--max-ident=<n>`, `--truncate`, `--strict` and
/// `--no-color`. `-` alone is positional (stdin).
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), String> {
    let mut options = CliOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-ident=") {
            let max = value
                .parse::<u32>()
                .map_err(|e| format!("invalid --max-ident value '{value}': {e}"))?;
            if max == 0 {
                return Err("--max-ident must be at least 1".to_string());
            }
            options.session.lexer.max_ident_len = max;
        } else if arg == "--truncate" {
            options.session.lexer.ident_overflow = IdentOverflow::Truncate;
        } else if arg == "--strict" {
            options.session.strict = true;
        } else if arg == "--no-color" {
            options.render.color = false;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((options, positional))
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return match io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(e) => Err(format!("error reading stdin: {e}")),
        };
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Display name for an input path in reports.
pub fn input_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}
