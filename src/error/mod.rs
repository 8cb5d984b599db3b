pub mod enhance_error;

use std::io;

use thiserror::Error as ThisError;

use crate::error::enhance_error::EnhanceError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("enhance error: {0}")]
    EnhanceError(#[from] EnhanceError),
}

pub type Result<T> = core::result::Result<T, Error>;
