use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while converting a Markdown file to DOCX.
///
/// Parsing itself is total and never fails; every error here originates at
/// an I/O or document-packing boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to assemble document: {0}")]
    Document(String),
}
