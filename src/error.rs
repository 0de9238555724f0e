use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideshowError {
    #[error("slide list is empty")]
    EmptyRegistry,

    #[error("failed to read slide manifest {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse slide manifest {path:?}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to fetch image {url}: {source}")]
    ImageFetch { url: String, source: reqwest::Error },

    #[error("failed to read image {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image {reference}: {message}")]
    ImageDecode { reference: String, message: String },

    #[error("failed to create texture for {reference}: {message}")]
    Texture { reference: String, message: String },

    #[error("failed to start player helper {program:?}: {source}")]
    PlayerSpawn {
        program: String,
        source: std::io::Error,
    },
}
