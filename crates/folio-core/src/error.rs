use thiserror::Error;

/// Rejected breakpoint tables for derived scroll signals.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    #[error("breakpoint table is empty")]
    Empty,
    #[error("{inputs} breakpoints but {outputs} values")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("breakpoint {index} is not finite")]
    NotFinite { index: usize },
    #[error("breakpoint {index} ({value}) does not increase on the previous one")]
    NotIncreasing { index: usize, value: f32 },
}

/// Malformed resume input detected before layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResumeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("{section} entry {index} is missing `{field}`")]
    IncompleteEntry {
        section: &'static str,
        index: usize,
        field: &'static str,
    },
}
