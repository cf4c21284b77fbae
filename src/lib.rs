#![allow(clippy::module_inception)]

//! Tokenizer and recursive-descent parser for a small curly-brace scripting
//! language.
//!
//! ```
//! let program = curly::parse("let x = 2 + 2 * 2;").unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use errors::errors::{Error, ErrorKind};
pub use parser::parser::{parse, Parser};
