#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Zero-length directions, non-positive radii, non-finite coordinates.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    /// Out of range render options or an inconsistent scene description.
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding failed: {0}")]
    Image(#[from] ::image::ImageError),
    #[error("malformed scene file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
