//! Stateful tokenizer.
//!
//! Turns `(RawTag, len)` pairs from the raw scanner into [`Token`]s:
//!
//! ```text
//! source → SourceBuffer → RawScanner → (RawTag, len) → Lexer → Lexed
//! ```
//!
//! The lexer owns the only mutable state of a pass: the scanner position,
//! the nesting balance and whether end of input has been reported. Every
//! call to [`Lexer::next_token`] either consumes at least one byte or
//! returns `Eof`, so driving it to `Eof` always terminates.

use sterfmt_ir::{Span, Token, TokenKind};
use sterfmt_lexer_core::{EncodingIssueKind, RawScanner, RawTag, SourceBuffer};

use crate::config::{IdentOverflow, LexerConfig};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorContext};

/// One step of lexing: a token and the diagnostic it raised, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexed {
    pub token: Token,
    pub error: Option<LexError>,
}

impl Lexed {
    fn ok(token: Token) -> Self {
        Self { token, error: None }
    }

    fn with_error(token: Token, error: LexError) -> Self {
        Self {
            token,
            error: Some(error),
        }
    }
}

pub struct Lexer<'src> {
    buffer: &'src SourceBuffer,
    scanner: RawScanner<'src>,
    config: LexerConfig,
    /// Unmatched `<` and `{`, combined.
    balance: u32,
    /// Set once the first `Eof` has been produced.
    eof_reported: bool,
    /// Set once the iterator has yielded `Eof`.
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(buffer: &'src SourceBuffer, config: LexerConfig) -> Self {
        Self {
            buffer,
            scanner: RawScanner::new(buffer.cursor()),
            config,
            balance: 0,
            eof_reported: false,
            exhausted: false,
        }
    }

    /// Current nesting balance.
    #[inline]
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> u32 {
        self.scanner.pos()
    }

    /// Produce the next token.
    ///
    /// After end of input every call returns `Eof` again. An
    /// `UnclosedDelimiter` diagnostic accompanies the first `Eof` only.
    pub fn next_token(&mut self) -> Lexed {
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let span = Span::new(start, start + raw.len);

            let lexed = match raw.tag {
                RawTag::Whitespace => continue,
                RawTag::Less => self.service(TokenKind::Open, span),
                RawTag::LeftBrace => self.service(TokenKind::LBrace, span),
                RawTag::Greater => self.service(TokenKind::Close, span),
                RawTag::RightBrace => self.service(TokenKind::RBrace, span),
                RawTag::Colon => self.service(TokenKind::Colon, span),
                RawTag::Comma => self.service(TokenKind::Delim, span),
                RawTag::Slash => self.service(TokenKind::Reset, span),
                RawTag::Word => self.word(span),
                RawTag::InvalidChar => self.invalid_char(span),
                RawTag::InteriorNull => {
                    let error = self.located(LexError::interior_null(span));
                    Lexed::with_error(Token::illegal(span), error)
                }
                RawTag::Eof => self.eof(start),
            };

            tracing::trace!(token = ?lexed.token, "lexed");
            if let Some(error) = &lexed.error {
                tracing::debug!(%error, "lex diagnostic");
            }
            return lexed;
        }
    }

    /// Service token. Openers and closers move the nesting balance.
    ///
    /// A closer at zero balance is still a token; the balance stays at zero.
    fn service(&mut self, kind: TokenKind, span: Span) -> Lexed {
        let token = fixed(kind, span);
        if kind.is_opener() {
            self.balance = self.balance.saturating_add(1);
        } else if kind.is_closer() {
            if self.balance == 0 {
                let delimiter = token.text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Lexed::with_error(token, LexError::unmatched_closer(span, delimiter));
            }
            self.balance -= 1;
        }
        Lexed::ok(token)
    }

    fn word(&self, span: Span) -> Lexed {
        let text = self.scanner.slice(span.start, span.end);
        let max = self.config.max_ident_len;

        if span.len() > max {
            let error = self.located(LexError::identifier_too_long(span, max));
            let token = match self.config.ident_overflow {
                IdentOverflow::Reject => Token::illegal(span),
                IdentOverflow::Truncate => {
                    // Words are ASCII, so any byte index is a char boundary.
                    let prefix = text.get(..max as usize).unwrap_or(text);
                    resolve(prefix, span).unwrap_or_else(|| Token::illegal(span))
                }
            };
            return Lexed::with_error(token, error);
        }

        match resolve(text, span) {
            Some(token) => Lexed::ok(token),
            None => {
                let near = keywords::lookup_ignore_ascii_case(text).map(|kw| kw.spelling);
                let error = self.located(LexError::unknown_directive(span, text, near));
                Lexed::with_error(Token::illegal(span), error)
            }
        }
    }

    fn invalid_char(&self, span: Span) -> Lexed {
        let error = match self.buffer.encoding_issue_at(span.start) {
            Some(issue) if issue.kind == EncodingIssueKind::Utf8Bom => LexError::utf8_bom(span),
            _ => {
                let text = self.scanner.slice(span.start, span.end);
                let ch = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                LexError::invalid_character(span, ch)
            }
        };
        Lexed::with_error(Token::illegal(span), self.located(error))
    }

    fn eof(&mut self, pos: u32) -> Lexed {
        let token = Token::eof(pos);
        if self.eof_reported {
            return Lexed::ok(token);
        }
        self.eof_reported = true;
        if self.balance > 0 {
            let error = LexError::unclosed_delimiter(Span::point(pos), self.balance);
            return Lexed::with_error(token, error);
        }
        Lexed::ok(token)
    }

    fn located(&self, error: LexError) -> LexError {
        error.with_context(LexErrorContext::from_depth(self.balance))
    }
}

/// Yields every token up to and including the first `Eof`.
impl Iterator for Lexer<'_> {
    type Item = Lexed;

    fn next(&mut self) -> Option<Lexed> {
        if self.exhausted {
            return None;
        }
        let lexed = self.next_token();
        if lexed.token.is_eof() {
            self.exhausted = true;
        }
        Some(lexed)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Token for a service kind with a fixed spelling.
fn fixed(kind: TokenKind, span: Span) -> Token {
    Token::new(kind, kind.fixed_lexeme().unwrap_or("ILLEGAL"), span)
}

fn resolve(word: &str, span: Span) -> Option<Token> {
    keywords::lookup(word).map(|kw| Token::new(kw.kind, kw.spelling, span))
}

#[cfg(test)]
mod tests;
