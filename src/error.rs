use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("a slider needs at least one slide")]
    NoSlides,

    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("failed to read file {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path:?}: {reason}")]
    ImageDecode { path: PathBuf, reason: String },

    #[error("failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },

    #[error("recorder: {0}")]
    Recorder(String),
}
