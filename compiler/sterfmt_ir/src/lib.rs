//! sterfmt IR - token and span types.
//!
//! This crate contains the data the lexer hands to its consumers:
//! - Spans for source locations
//! - `TokenKind`, the closed set of token categories, grouped into families
//! - `Token` and `TokenList` for lexer output
//!
//! Every type is `Clone + Eq + Hash + Debug`. Tokens are `Copy` and carry
//! only `&'static` text, so they never borrow from the input they were
//! scanned from.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenFamily, TokenKind, TokenList};
