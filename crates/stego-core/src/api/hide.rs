use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::Source;
use crate::media::{CodecOptions, Media, Persist, Traversal};
use crate::{Result, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<Source>,
    image: Option<Source>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(Source::Bytes(message.as_bytes().to_vec()));
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.payload = message.map(|s| Source::Bytes(s.as_ref().as_bytes().to_vec()));
        self
    }

    /// raw bytes to hide, replaces any message or file set before
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.payload = Some(Source::Bytes(data));
        self
    }

    /// the content of this file is hidden, it is read on `execute`
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.payload = Some(Source::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(Source::File(image.as_ref().to_path_buf()));
        self
    }

    /// an encoded carrier image held in memory
    pub fn with_image_bytes(mut self, image: Vec<u8>) -> Self {
        self.image = Some(Source::Bytes(image));
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(self, password: &str) -> Self {
        self.use_password(Some(password))
    }

    /// Set the password, it decides about the order the bits are spread over the image.
    /// If `None` is passed, the plain linear order is used
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.options.traversal = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// hides the payload and stores the image as PNG in the output file
    pub fn execute(self) -> Result<()> {
        let Some(output) = self.output.clone() else {
            return Err(StegoError::TargetNotSet);
        };

        self.hide()?.save_as(&output)?;
        info!("Secret data hidden in {output:?}");

        Ok(())
    }

    /// hides the payload and writes the image as PNG into `writer`, no output file needed
    pub fn execute_to_writer<W: Write + Seek>(self, writer: W) -> Result<()> {
        self.hide()?.save_to_writer(writer)
    }

    fn hide(self) -> Result<Media> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(StegoError::MissingMessage);
        };

        let data = payload.read_data()?;
        let mut media = image.read_media()?;
        if matches!(self.options.traversal, Traversal::Keyed(_)) {
            info!("Using a password keyed channel order");
        }
        media.hide_data(&data, &self.options)?;

        Ok(media)
    }
}
