//! Lexer diagnostics.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` recording how deeply nested the lexer was
//! - HOW: `suggestions` providing actionable fixes
//!
//! No diagnostic is fatal. The lexer returns one next to the token it
//! concerns and keeps going.

use std::fmt;

use sterfmt_ir::Span;

/// A lexer diagnostic with enough context for rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Character Errors ===
    /// A character that starts no token.
    InvalidCharacter { ch: char },
    /// Null byte inside the input.
    InteriorNull,
    /// UTF-8 byte order mark at the start of the input.
    Utf8Bom,

    // === Word Errors ===
    /// Alphabetic run that names no directive.
    UnknownDirective { word: String },
    /// Alphabetic run longer than the configured limit.
    IdentifierTooLong { len: u32, max: u32 },

    // === Nesting Errors ===
    /// `>` or `}` with nothing open.
    UnmatchedCloser { delimiter: char },
    /// Input ended with delimiters still open.
    UnclosedDelimiter { open: u32 },
}

/// Nesting state at the point of error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Outside any `<...>` or `{...}`.
    #[default]
    TopLevel,
    /// Inside `depth` unclosed delimiters.
    Nested { depth: u32 },
}

impl LexErrorContext {
    pub fn from_depth(depth: u32) -> Self {
        if depth == 0 {
            LexErrorContext::TopLevel
        } else {
            LexErrorContext::Nested { depth }
        }
    }
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement, if one applies.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion that deletes `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, "")
    }

    /// Create a suggestion with a replacement.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    fn new(span: Span, kind: LexErrorKind) -> Self {
        Self {
            span,
            kind,
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn invalid_character(span: Span, ch: char) -> Self {
        let mut err = Self::new(span, LexErrorKind::InvalidCharacter { ch });
        if ch.is_ascii_digit() {
            err.suggestions.push(LexSuggestion::text(
                "directives are spelled with letters only",
                1,
            ));
        }
        err
    }

    #[cold]
    pub fn interior_null(span: Span) -> Self {
        Self::new(span, LexErrorKind::InteriorNull).with_suggestion(LexSuggestion::removal(
            "remove the null byte",
            span,
        ))
    }

    #[cold]
    pub fn utf8_bom(span: Span) -> Self {
        Self::new(span, LexErrorKind::Utf8Bom).with_suggestion(LexSuggestion::removal(
            "remove the byte order mark",
            span,
        ))
    }

    /// Unknown word. `near` is the canonical spelling of a keyword that
    /// matches when case is ignored.
    #[cold]
    pub fn unknown_directive(span: Span, word: &str, near: Option<&'static str>) -> Self {
        let err = Self::new(
            span,
            LexErrorKind::UnknownDirective {
                word: word.to_owned(),
            },
        );
        match near {
            Some(spelling) => err.with_suggestion(LexSuggestion::replace(
                format!("directives are lowercase: `{spelling}`"),
                span,
                spelling,
            )),
            None => err.with_suggestion(LexSuggestion::text(
                "run `sterfmt keywords` for the list of directives",
                2,
            )),
        }
    }

    #[cold]
    pub fn identifier_too_long(span: Span, max: u32) -> Self {
        let len = span.len();
        Self::new(span, LexErrorKind::IdentifierTooLong { len, max }).with_suggestion(
            LexSuggestion::text(format!("directive names are at most {max} letters"), 1),
        )
    }

    #[cold]
    pub fn unmatched_closer(span: Span, delimiter: char) -> Self {
        Self::new(span, LexErrorKind::UnmatchedCloser { delimiter })
            .with_suggestion(LexSuggestion::removal(format!("remove this `{delimiter}`"), span))
    }

    /// Delimiters left open at end of input. `span` is the end-of-input point.
    #[cold]
    pub fn unclosed_delimiter(span: Span, open: u32) -> Self {
        Self::new(span, LexErrorKind::UnclosedDelimiter { open })
            .with_context(LexErrorContext::from_depth(open))
            .with_suggestion(LexSuggestion::text("close every `<` with `>` and every `{` with `}`", 0))
    }

    #[must_use]
    pub fn with_context(mut self, ctx: LexErrorContext) -> Self {
        self.context = ctx;
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Short label naming the diagnostic, used as a report title.
    pub fn title(&self) -> &'static str {
        match self.kind {
            LexErrorKind::InvalidCharacter { .. } => "invalid character",
            LexErrorKind::InteriorNull => "null byte in input",
            LexErrorKind::Utf8Bom => "byte order mark in input",
            LexErrorKind::UnknownDirective { .. } => "unknown directive",
            LexErrorKind::IdentifierTooLong { .. } => "directive name too long",
            LexErrorKind::UnmatchedCloser { .. } => "unmatched closing delimiter",
            LexErrorKind::UnclosedDelimiter { .. } => "unclosed delimiter",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidCharacter { ch } => {
                write!(f, "invalid character {ch:?} (U+{:04X})", u32::from(*ch))
            }
            LexErrorKind::InteriorNull => f.write_str("null byte inside input"),
            LexErrorKind::Utf8Bom => f.write_str("input starts with a UTF-8 byte order mark"),
            LexErrorKind::UnknownDirective { word } => write!(f, "unknown directive `{word}`"),
            LexErrorKind::IdentifierTooLong { len, max } => {
                write!(f, "directive name is {len} letters long, limit is {max}")
            }
            LexErrorKind::UnmatchedCloser { delimiter } => {
                write!(f, "`{delimiter}` has no matching opener")
            }
            LexErrorKind::UnclosedDelimiter { open } => {
                let s = if *open == 1 { "" } else { "s" };
                write!(f, "{open} delimiter{s} left open at end of input")
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}
