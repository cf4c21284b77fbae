//! Error types and error handling for the parser.
//!
//! This module defines the single error type a parse can fail with. It
//! includes:
//!
//! - The lexical/syntax split of failures
//! - Specific error variants for every structural mismatch
//! - Error names and suggestions for command-line diagnostics

pub mod errors;
