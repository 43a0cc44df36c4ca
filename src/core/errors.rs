//! Error types shared by the export passes

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = FontCostumeError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum FontCostumeError {
    /// The font path is missing or has an unsupported extension
    #[error("{reason}: {}", path.display())]
    InvalidFontPath { path: PathBuf, reason: String },

    #[error("failed to parse font {name}")]
    FontParse {
        name: String,
        #[source]
        source: ttf_parser::FaceParsingError,
    },

    #[error("I/O failure at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw costume name would leave its bucket directory
    #[error("cannot use {name:?} as a file name")]
    UnsafeFilename { name: String },
}

impl FontCostumeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
