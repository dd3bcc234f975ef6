//! Builder style entry points, wiring files, passwords and codec options to the codec.

pub mod hide;
pub mod unveil;

use std::path::PathBuf;

use crate::media::Media;
use crate::{Result, StegoError};

/// Where a carrier image comes from
#[derive(Debug, Clone)]
pub(crate) enum Source {
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl Source {
    pub(crate) fn read_media(&self) -> Result<Media> {
        match self {
            Source::File(path) => Media::from_file(path),
            Source::Bytes(bytes) => Media::from_bytes(bytes),
        }
    }

    pub(crate) fn read_data(&self) -> Result<Vec<u8>> {
        match self {
            Source::File(path) => {
                std::fs::read(path).map_err(|source| StegoError::ReadError { source })
            }
            Source::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}
