use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading on-disk assets.
///
/// All of these are fatal at startup; the variants exist so the message names
/// the asset kind and path that failed.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path:?}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {path:?} is {width}x{height}; exceeds the device limit of {limit}")]
    TextureTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        limit: u32,
    },

    #[error("failed to read shader {path:?}: {source}")]
    Shader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader {path:?} is empty")]
    EmptyShader { path: PathBuf },
}
