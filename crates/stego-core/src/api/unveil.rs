use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use super::Source;
use crate::media::CodecOptions;
use crate::{Result, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<Source>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(Source::File(secret_image.as_ref().to_path_buf()));
        self
    }

    /// The secret image, still encoded, e.g. as read from stdin
    pub fn from_secret_bytes(mut self, secret_image: Vec<u8>) -> Self {
        self.secret_media = Some(Source::Bytes(secret_image));
        self
    }

    /// This is the file where the unveiled payload will be saved to
    pub fn into_output_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Set the password the data was hidden with
    /// If `None` is passed, the plain linear order is used
    pub fn using_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.options.traversal = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Unveils the payload, writes it to the output file if one was set and returns it
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let payload = secret_media.read_media()?.unveil_data(&self.options)?;
        info!("Unveiled {} bytes", payload.len());

        if let Some(destination_file) = self.destination_file {
            let mut destination_file = File::create(destination_file)
                .map_err(|source| StegoError::WriteError { source })?;

            destination_file
                .write_all(&payload)
                .map_err(|source| StegoError::WriteError { source })?;
        }

        Ok(payload)
    }
}
