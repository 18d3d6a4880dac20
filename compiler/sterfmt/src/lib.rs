//! sterfmt: terminal formatting markup.
//!
//! Markup such as `<bold, red>text</>` is tokenized by `sterfmt_lexer`. This
//! crate adds the user-facing layer on top:
//! - [`Session`] to feed and emit markup and register directive handlers
//! - [`diagnostic`] to render lexer diagnostics against their source
//! - [`commands`] backing the `sterfmt` binary

pub mod commands;
pub mod diagnostic;
mod error;
mod session;

use std::sync::Once;

pub use error::FormatError;
pub use session::{FeedReport, Handler, Pending, Session, SessionConfig};
pub use sterfmt_lexer::{lex, IdentOverflow, LexError, LexOutput, LexerConfig};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for the current process.
///
/// Does nothing unless `RUST_LOG` is set. With `STERFMT_LOG_TREE` also set,
/// spans are printed as an indented tree instead of flat lines. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("STERFMT_LOG_TREE").is_some();

        // Token output goes to stdout, so logs go to stderr.
        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let hierarchical =
            tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true));

        tracing_subscriber::registry()
            .with(flat)
            .with(hierarchical)
            .with(filter)
            .init();
    });
}
