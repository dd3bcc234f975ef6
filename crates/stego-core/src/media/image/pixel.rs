use byteorder::{BigEndian, ByteOrder};
use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgba};

use crate::{Result, StegoError};

/// Tags how the samples of a [`PixelImage`] are laid out in memory.
///
/// Only the four RGBA layouts can carry data, everything else is kept
/// around so that the channel accessor can reject it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bit straight alpha RGBA
    Rgba8,
    /// 8 bit premultiplied alpha RGBA
    Rgba8Premultiplied,
    /// 16 bit straight alpha RGBA, big endian samples
    Rgba16,
    /// 16 bit premultiplied alpha RGBA, big endian samples
    Rgba16Premultiplied,
    Rgb8,
    Rgb16,
    Luma8,
    Luma16,
    LumaA8,
    LumaA16,
    Rgb32F,
    Rgba32F,
}

impl PixelFormat {
    pub fn channel_count(self) -> usize {
        match self {
            PixelFormat::Luma8 | PixelFormat::Luma16 => 1,
            PixelFormat::LumaA8 | PixelFormat::LumaA16 => 2,
            PixelFormat::Rgb8 | PixelFormat::Rgb16 | PixelFormat::Rgb32F => 3,
            PixelFormat::Rgba8
            | PixelFormat::Rgba8Premultiplied
            | PixelFormat::Rgba16
            | PixelFormat::Rgba16Premultiplied
            | PixelFormat::Rgba32F => 4,
        }
    }

    pub fn bytes_per_channel(self) -> usize {
        match self {
            PixelFormat::Rgba8
            | PixelFormat::Rgba8Premultiplied
            | PixelFormat::Rgb8
            | PixelFormat::Luma8
            | PixelFormat::LumaA8 => 1,
            PixelFormat::Rgba16
            | PixelFormat::Rgba16Premultiplied
            | PixelFormat::Rgb16
            | PixelFormat::Luma16
            | PixelFormat::LumaA16 => 2,
            PixelFormat::Rgb32F | PixelFormat::Rgba32F => 4,
        }
    }

    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.channel_count() * self.bytes_per_channel()
    }
}

/// A decoded image as a flat, row major byte buffer.
///
/// Samples wider than one byte are stored big endian, so the first byte of
/// a sample is always its high order byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pix: Vec<u8>,
}

impl PixelImage {
    /// a fully zeroed image
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let len = width as usize * height as usize * format.bytes_per_pixel();
        Self {
            width,
            height,
            format,
            pix: vec![0; len],
        }
    }

    /// wraps an existing buffer, `None` if the buffer length does not fit the dimensions
    pub fn from_raw(width: u32, height: u32, format: PixelFormat, pix: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(format.bytes_per_pixel())?;
        if pix.len() != expected {
            return None;
        }

        Some(Self {
            width,
            height,
            format,
            pix,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    pub fn pix_mut(&mut self) -> &mut [u8] {
        &mut self.pix
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pix
    }

    pub fn row_stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// offset of the first sample of the pixel at (x, y)
    #[inline]
    pub fn pix_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.row_stride() + x as usize * self.format.bytes_per_pixel()
    }

    /// Takes over the samples of a decoded image.
    ///
    /// RGB images get an opaque alpha channel so they end up in one of the
    /// RGBA layouts, all other color types keep their own format.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (format, pix) = match img {
            DynamicImage::ImageRgba8(buf) => (PixelFormat::Rgba8, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (
                PixelFormat::Rgba8,
                DynamicImage::ImageRgb8(buf).to_rgba8().into_raw(),
            ),
            DynamicImage::ImageRgba16(buf) => (PixelFormat::Rgba16, u16_to_be_bytes(buf.as_raw())),
            DynamicImage::ImageRgb16(buf) => (
                PixelFormat::Rgba16,
                u16_to_be_bytes(DynamicImage::ImageRgb16(buf).to_rgba16().as_raw()),
            ),
            DynamicImage::ImageLuma8(buf) => (PixelFormat::Luma8, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (PixelFormat::LumaA8, buf.into_raw()),
            DynamicImage::ImageLuma16(buf) => (PixelFormat::Luma16, u16_to_be_bytes(buf.as_raw())),
            DynamicImage::ImageLumaA16(buf) => {
                (PixelFormat::LumaA16, u16_to_be_bytes(buf.as_raw()))
            }
            DynamicImage::ImageRgb32F(buf) => (PixelFormat::Rgb32F, f32_to_be_bytes(buf.as_raw())),
            DynamicImage::ImageRgba32F(buf) => {
                (PixelFormat::Rgba32F, f32_to_be_bytes(buf.as_raw()))
            }
            other => (PixelFormat::Rgba8, other.to_rgba8().into_raw()),
        };

        Self {
            width,
            height,
            format,
            pix,
        }
    }

    /// Hands the samples back to the `image` crate for saving.
    ///
    /// Premultiplied layouts come back as plain RGBA, their bytes are not touched.
    pub fn into_dynamic(self) -> Result<DynamicImage> {
        let Self {
            width,
            height,
            format,
            pix,
        } = self;

        let img = match format {
            PixelFormat::Rgba8 | PixelFormat::Rgba8Premultiplied => {
                ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, pix)
                    .map(DynamicImage::ImageRgba8)
            }
            PixelFormat::Rgba16 | PixelFormat::Rgba16Premultiplied => {
                ImageBuffer::<Rgba<u16>, _>::from_raw(width, height, u16_from_be_bytes(&pix))
                    .map(DynamicImage::ImageRgba16)
            }
            PixelFormat::Luma8 => {
                ImageBuffer::<Luma<u8>, _>::from_raw(width, height, pix).map(DynamicImage::ImageLuma8)
            }
            PixelFormat::LumaA8 => ImageBuffer::<LumaA<u8>, _>::from_raw(width, height, pix)
                .map(DynamicImage::ImageLumaA8),
            other => return Err(StegoError::FormatUnsupported(other)),
        };

        img.ok_or(StegoError::ImageEncodingError)
    }
}

fn u16_to_be_bytes(samples: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0; samples.len() * 2];
    BigEndian::write_u16_into(samples, &mut bytes);
    bytes
}

fn u16_from_be_bytes(bytes: &[u8]) -> Vec<u16> {
    let mut samples = vec![0; bytes.len() / 2];
    BigEndian::read_u16_into(&bytes[..samples.len() * 2], &mut samples);
    samples
}

fn f32_to_be_bytes(samples: &[f32]) -> Vec<u8> {
    let mut bytes = vec![0; samples.len() * 4];
    BigEndian::write_f32_into(samples, &mut bytes);
    bytes
}
