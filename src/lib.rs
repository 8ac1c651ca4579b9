#![allow(clippy::module_inception)]

//! A lexical analyzer for a restricted subset of C-like source text.
//!
//! The entry point is [`lexer::lexer::analyze`], which turns an in-memory
//! string into an ordered sequence of classified tokens. Classification is
//! permissive: anything that fails to match a known category comes back as
//! an `Unknown` token rather than an error, so the analyzer is total over
//! every possible input string.

pub mod errors;
pub mod lexer;

extern crate regex;
