//! Configuration types
//!
//! Board-agnostic configuration structures and the parser for the
//! embedded `animatron.toml`.

pub mod parser;
pub mod types;

pub use parser::{parse_config, ParseError};
pub use types::*;
