//! Error types for the annotation pipeline.
//!
//! Every variant is terminal for a run: the failing stage prints one
//! diagnostic line and the process exits non-zero. Diagnostics carry the
//! offending file path where one exists.

use std::path::PathBuf;

use thiserror::Error;

use crate::bounds::ParseBoundsError;
use crate::dump::DumpError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load: {}", path.display())]
    DocumentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Not well-formed XML: {}", path.display())]
    DocumentParse { path: PathBuf, source: DumpError },

    #[error("Failed to load: {}", path.display())]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Missing bounds attribute on <{tag}> element")]
    MissingBounds { tag: String },

    #[error("Malformed bounds on <{tag}> element: {source}")]
    MalformedBounds {
        tag: String,
        source: ParseBoundsError,
    },

    #[error("Failed to save: {}", path.display())]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
