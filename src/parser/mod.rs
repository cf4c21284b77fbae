//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the tokenizer one at a time and assembles a [`Program`](crate::ast::ast::Program).
//! It handles:
//!
//! - Statement parsing (declarations, control flow, blocks)
//! - Expression parsing (sequences, assignment, arrow functions, calls, members)
//! - Binary and logical operators through a precedence ladder
//! - Fail-fast error reporting with no recovery
//!
//! Statements are dispatched on a single lookahead token. Binary levels share
//! one precedence-climbing routine driven by [`lookups::BindingPower`].

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
