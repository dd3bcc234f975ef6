pub mod hide;
pub mod unveil;

use std::io::{self, Read};

use stego_core::StegoError;

use crate::CliResult;

pub(crate) fn read_stdin() -> CliResult<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(|source| StegoError::ReadError { source })?;

    Ok(buf)
}
