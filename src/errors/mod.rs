//! Error types for the command-line layer.
//!
//! The tokenizer itself never fails; unrecognized input becomes `Unknown`
//! tokens. The errors here belong to the surrounding I/O: sourcing the
//! input text from a file or from stdin.

pub mod errors;
