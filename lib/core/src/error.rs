use crate::AnimeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Unreadable or malformed source, or an empty catalog. Fatal at startup.
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Anime not found: {0}")]
    NotFound(AnimeId),

    #[error("Recommender is not ready")]
    NotReady,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
