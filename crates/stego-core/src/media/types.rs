use std::fs::File;
use std::io::{BufRead, BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::ImageFormat;
use log::{debug, error, warn};

use super::image::PixelImage;
use super::Persist;
use crate::codec;
use crate::error::StegoError;
use crate::media::CodecOptions;
use crate::result::Result;

/// a carrier image for steganography
#[derive(Debug, Clone)]
pub struct Media {
    image: PixelImage,
    source_format: Option<ImageFormat>,
}

impl Media {
    pub fn from_image(image: PixelImage) -> Self {
        Self {
            image,
            source_format: None,
        }
    }

    /// decodes an image file, the container format is guessed from its content
    pub fn from_file(f: &Path) -> Result<Self> {
        let reader = ImageReader::open(f).map_err(|source| {
            error!("Error opening file {f:?}: {source}");
            StegoError::ReadError { source }
        })?;

        Self::decode(reader)
    }

    /// decodes an image held in memory, e.g. read from stdin
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(ImageReader::new(Cursor::new(bytes)))
    }

    fn decode<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<Self> {
        let reader = reader
            .with_guessed_format()
            .map_err(|source| StegoError::ReadError { source })?;
        let source_format = reader.format();

        let image = reader.decode().map_err(|e| {
            error!("Error decoding image: {e}");
            StegoError::InvalidImageMedia
        })?;

        if source_format == Some(ImageFormat::Jpeg) {
            warn!("The carrier is a lossy JPEG image, the result will be stored as PNG");
        }
        let image = PixelImage::from_dynamic(image);
        debug!(
            "carrier {:?} with {}x{} pixels as {:?}",
            source_format,
            image.width(),
            image.height(),
            image.format()
        );

        Ok(Self {
            image,
            source_format,
        })
    }

    pub fn image(&self) -> &PixelImage {
        &self.image
    }

    pub fn into_image(self) -> PixelImage {
        self.image
    }

    pub fn source_format(&self) -> Option<ImageFormat> {
        self.source_format
    }

    pub fn hide_data(&mut self, data: &[u8], opts: &CodecOptions) -> Result<&mut Self> {
        codec::encode(data, &mut self.image, &mut opts.scrambler())?;

        Ok(self)
    }

    pub fn unveil_data(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        codec::decode(&self.image, &mut opts.scrambler())
    }

    /// payload bytes this carrier can take with the given options
    pub fn capacity(&self, opts: &CodecOptions) -> usize {
        let (width, height) = self.image.dimensions();
        codec::capacity_of(width, height, &mut opts.scrambler())
    }

    /// always encodes PNG, lossy formats would destroy the hidden bits
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .clone()
            .into_dynamic()?
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })?;

        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_10x10_noisy_image;
    use image::{DynamicImage, GrayImage, Luma, RgbImage};
    use tempfile::TempDir;

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn should_complain_about_missing_files() {
        match Media::from_file("some_random_file.png".as_ref()) {
            Err(StegoError::ReadError { .. }) => (),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn should_complain_about_non_images() {
        match Media::from_file("Cargo.toml".as_ref()) {
            Err(StegoError::InvalidImageMedia) => (),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn should_guess_png_from_content() {
        let rgb = RgbImage::from_fn(4, 4, |x, y| image::Rgb([x as u8, y as u8, 0]));
        let media = Media::from_bytes(&png_bytes(DynamicImage::ImageRgb8(rgb))).unwrap();

        assert_eq!(media.source_format(), Some(ImageFormat::Png));
        assert_eq!(media.image().dimensions(), (4, 4));
    }

    #[test]
    fn should_hide_save_load_and_unveil() -> Result<()> {
        let out_dir = TempDir::new()?;
        let target = out_dir.path().join("secret.png");
        let opts = CodecOptions::default();

        let mut media = Media::from_image(prepare_10x10_noisy_image());
        assert_eq!(media.capacity(&opts), 31);
        media.hide_data(b"hi", &opts)?.save_as(&target)?;

        let media = Media::from_file(&target)?;
        assert_eq!(media.unveil_data(&opts)?, b"hi");

        Ok(())
    }

    #[test]
    fn should_keep_grayscale_images_unsupported() {
        let gray = GrayImage::from_fn(20, 20, |x, _| Luma([x as u8]));
        let mut media = Media::from_bytes(&png_bytes(DynamicImage::ImageLuma8(gray))).unwrap();

        assert!(matches!(
            media.hide_data(b"hi", &CodecOptions::default()),
            Err(StegoError::FormatUnsupported(_))
        ));
    }
}
