//! Where the resume record comes from.

use crate::error::SourceError;
use folio_core::ResumeData;
use std::fs;
use std::path::PathBuf;

pub trait ResumeSource {
    fn load(&self) -> Result<ResumeData, SourceError>;
}

/// The content compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSource;

impl ResumeSource for StaticSource {
    fn load(&self) -> Result<ResumeData, SourceError> {
        Ok(folio_core::content::resume_data())
    }
}

/// A JSON file re-read on every request, so edits show up without a restart.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResumeSource for FileSource {
    fn load(&self) -> Result<ResumeData, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
