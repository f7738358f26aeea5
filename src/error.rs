//! Error types for the interpreter and the command line front end.
//!
//! Synthesis itself is total; only running or checking a program can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unmatched `[` at offset {0}")]
    UnmatchedOpen(usize),

    #[error("unmatched `]` at offset {0}")]
    UnmatchedClose(usize),

    #[error("unsupported instruction `{instruction}` at offset {offset}")]
    Unsupported { instruction: char, offset: usize },

    #[error("tape pointer moved left of the first cell")]
    TapeUnderflow,

    #[error("step limit of {0} exceeded")]
    StepLimit(u64),

    #[error("program printed {found} values, expected {expected}")]
    OutputLength { expected: usize, found: usize },

    #[error("value {index} printed as {found}, expected {expected}")]
    OutputMismatch {
        index: usize,
        expected: i64,
        found: i64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
