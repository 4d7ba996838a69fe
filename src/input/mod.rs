use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Nothing to read in {0}")]
    Empty(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Text loaded from somewhere outside the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;
