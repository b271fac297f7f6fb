//! Unified Error Model
//!
//! Only the file plumbing around the pipeline can fail; stages are total.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiliteError {
    #[error("INPUT/cannot open {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OUTPUT/cannot write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ECHO/cannot read back {path}: {source}")]
    Echo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TRACE/{0}")]
    Trace(String),
}

impl HiliteError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}
