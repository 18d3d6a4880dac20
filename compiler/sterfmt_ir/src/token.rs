//! Token types for the sterfmt lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text it stands for and
//! the span of source it covers.

use std::fmt;
use std::ops::Index;

use super::Span;

/// The family a [`TokenKind`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenFamily {
    /// Structural punctuation, end of input, and illegal input.
    Service,
    Direction,
    Decoration,
    Alignment,
    Color,
}

impl TokenFamily {
    pub const fn name(self) -> &'static str {
        match self {
            TokenFamily::Service => "service",
            TokenFamily::Direction => "direction",
            TokenFamily::Decoration => "decoration",
            TokenFamily::Alignment => "alignment",
            TokenFamily::Color => "color",
        }
    }
}

/// Token category, with families in contiguous discriminant ranges:
///
/// | Range | Family     |
/// |-------|------------|
/// | 0-15  | Service    |
/// | 16-31 | Direction  |
/// | 32-47 | Decoration |
/// | 48-63 | Alignment  |
/// | 64-79 | Color      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Service (0-15) ===
    Illegal = 0,
    Eof = 1,
    /// `<`
    Open = 2,
    /// `>`
    Close = 3,
    /// `{`
    LBrace = 4,
    /// `}`
    RBrace = 5,
    /// `:`
    Colon = 6,
    /// `,`
    Delim = 7,
    /// `/`
    Reset = 8,

    // === Direction (16-31) ===
    Up = 16,
    Down = 17,
    Left = 18,
    Right = 19,

    // === Decoration (32-47) ===
    DecorNone = 32,
    Bold = 33,
    Underline = 34,
    Italic = 35,
    Blink = 36,
    Invert = 37,
    Strike = 38,

    // === Alignment (48-63) ===
    AlignDefault = 48,
    Justify = 49,
    Center = 50,

    // === Color (64-79) ===
    ColorDefault = 64,
    Black = 65,
    Red = 66,
    Green = 67,
    Yellow = 68,
    Blue = 69,
    Magenta = 70,
    Cyan = 71,
    White = 72,
}

impl TokenKind {
    /// Every variant, in discriminant order.
    pub const ALL: [TokenKind; 32] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Open,
        TokenKind::Close,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Colon,
        TokenKind::Delim,
        TokenKind::Reset,
        TokenKind::Up,
        TokenKind::Down,
        TokenKind::Left,
        TokenKind::Right,
        TokenKind::DecorNone,
        TokenKind::Bold,
        TokenKind::Underline,
        TokenKind::Italic,
        TokenKind::Blink,
        TokenKind::Invert,
        TokenKind::Strike,
        TokenKind::AlignDefault,
        TokenKind::Justify,
        TokenKind::Center,
        TokenKind::ColorDefault,
        TokenKind::Black,
        TokenKind::Red,
        TokenKind::Green,
        TokenKind::Yellow,
        TokenKind::Blue,
        TokenKind::Magenta,
        TokenKind::Cyan,
        TokenKind::White,
    ];

    pub const fn family(self) -> TokenFamily {
        match self as u8 {
            0..=15 => TokenFamily::Service,
            16..=31 => TokenFamily::Direction,
            32..=47 => TokenFamily::Decoration,
            48..=63 => TokenFamily::Alignment,
            _ => TokenFamily::Color,
        }
    }

    /// Returns `true` for tokens naming a formatting effect.
    #[inline]
    pub const fn is_directive(self) -> bool {
        !matches!(self.family(), TokenFamily::Service)
    }

    /// Open delimiters increment the nesting balance.
    #[inline]
    pub const fn is_opener(self) -> bool {
        matches!(self, TokenKind::Open | TokenKind::LBrace)
    }

    /// Close delimiters decrement the nesting balance.
    #[inline]
    pub const fn is_closer(self) -> bool {
        matches!(self, TokenKind::Close | TokenKind::RBrace)
    }

    /// Literal text for kinds whose spelling never varies.
    ///
    /// Directive kinds return `None`; their canonical spelling comes from the
    /// keyword table.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Illegal => Some("ILLEGAL"),
            TokenKind::Eof => Some("EOF"),
            TokenKind::Open => Some("<"),
            TokenKind::Close => Some(">"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Colon => Some(":"),
            TokenKind::Delim => Some(","),
            TokenKind::Reset => Some("/"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self:?})", self.family().name())
    }
}

/// A classified token.
///
/// `text` is the keyword table's canonical spelling for directives, the
/// punctuation itself for service delimiters, and `"EOF"` / `"ILLEGAL"`
/// for the synthetic kinds.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: &'static str,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'static str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// End-of-input token at byte offset `pos`.
    #[inline]
    pub const fn eof(pos: u32) -> Self {
        Token::new(TokenKind::Eof, "EOF", Span::point(pos))
    }

    /// Illegal token covering `span`.
    #[inline]
    pub const fn illegal(span: Span) -> Self {
        Token::new(TokenKind::Illegal, "ILLEGAL", span)
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 32);
}

/// Ordered tokens produced by one lexing pass.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in order, for compact assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
