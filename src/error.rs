use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrosswordError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Cell ({row}, {col}) already holds '{existing}', cannot write '{letter}'")]
    Conflict {
        row: usize,
        col: usize,
        existing: char,
        letter: char,
    },

    #[error("Failed to read file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fst(#[from] fst::Error),
}

pub type Result<T> = std::result::Result<T, CrosswordError>;
