use folio_core::ResumeError;
use std::path::PathBuf;
use thiserror::Error;

/// The backing data could not be produced.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("resume source unavailable: {0}")]
    Unavailable(String),
}

/// The record was loaded but cannot be laid out.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("invalid resume data: {0}")]
    Invalid(#[from] ResumeError),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Assemble(#[from] AssembleError),
}
