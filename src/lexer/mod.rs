//! Lexical analysis module for the parser.
//!
//! This module contains the tokenizer that scans source code into tokens
//! on demand for the parser. It handles:
//!
//! - An ordered, first-match-wins table of regex rules
//! - Recognition of keywords, identifiers, literals, and operators
//! - Skipping whitespace and comments
//! - Lexical errors for characters no rule accepts

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
