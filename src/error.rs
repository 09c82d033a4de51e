/*
 * Error Module
 *
 * Errors raised while loading startup assets: the TOML config and the
 * feather mesh template. The core geometry math is infallible.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WingError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("OBJ line {line}: {message}")]
    ObjParse { line: usize, message: String },

    #[error("feather mesh has no triangles")]
    EmptyMesh,
}

pub type Result<T> = std::result::Result<T, WingError>;
