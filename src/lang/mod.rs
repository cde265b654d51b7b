/*!
# Rust Language Module

This Rust module turns the words of a statement into tokens and
rebuilds the statement tree the machine executes.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

/// Number of addressable program lines. Line numbers are `0..MAX_LINES`.
pub const MAX_LINES: usize = 65536;

pub type LineNumber = u16;
