//! Error types for tombola-render.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while rendering a ticket card.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Filesystem error while loading the font or template.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The font file was readable but not a parseable TTF/OTF.
    #[error("not a usable font: {path}")]
    Font { path: PathBuf },

    /// Template decode or PNG encode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}
