//! `demo`: tokenize a fixed sample through a [`Session`].

use std::io;

use crate::{FormatError, Session, SessionConfig};

pub const DEMO_INPUT: &str = "<bold, red></>";

pub fn run_demo<W: io::Write>(out: &mut W, config: SessionConfig) -> Result<usize, FormatError> {
    Session::new(config).emit(out, format_args!("{DEMO_INPUT}"))
}
