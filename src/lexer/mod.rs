//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts C-like source text
//! into a stream of classified tokens. It handles:
//!
//! - Single-pass scanning with one character of operator lookahead
//! - Recognition of keywords, identifiers, numbers, operators and delimiters
//! - Compound (two-character) operator disambiguation
//! - Whitespace handling
//!
//! Unrecognized input never aborts the scan; it is tagged `Unknown`.

pub mod lexer;
pub mod tokens;
