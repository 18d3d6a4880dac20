//! Errors returned by the session API.

use std::{fmt, io};

use sterfmt_lexer::LexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// Rendering the format arguments failed.
    #[error("failed to render format arguments")]
    Format(#[from] fmt::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Strict mode saw at least one lexer diagnostic.
    #[error("markup has {} diagnostic(s), first: {}", .errors.len(), first_error(.errors))]
    Lex { errors: Vec<LexError> },

    #[error("invalid handler name `{name}`: {reason}")]
    InvalidHandlerName { name: String, reason: &'static str },

    #[error("a handler named `{name}` is already registered")]
    DuplicateHandler { name: String },
}

fn first_error(errors: &[LexError]) -> String {
    errors
        .first()
        .map_or_else(String::new, ToString::to_string)
}
