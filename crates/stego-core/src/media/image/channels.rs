use super::pixel::{PixelFormat, PixelImage};
use crate::{Result, StegoError};

/// Addresses one color sample of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelPosition {
    pub x: u32,
    pub y: u32,
    pub channel: u8,
}

impl ChannelPosition {
    pub fn new(x: u32, y: u32, channel: u8) -> Self {
        Self { x, y, channel }
    }
}

impl From<(u32, u32, u8)> for ChannelPosition {
    fn from((x, y, channel): (u32, u32, u8)) -> Self {
        Self::new(x, y, channel)
    }
}

/// Translates a [`ChannelPosition`] into the byte holding its least significant bit.
#[derive(Debug, Clone, Copy)]
pub struct ChannelLayout {
    row_stride: usize,
    bytes_per_pixel: usize,
    stride: usize,
}

impl ChannelLayout {
    /// fails with [`StegoError::FormatUnsupported`] for anything but the RGBA layouts
    pub fn of(image: &PixelImage) -> Result<Self> {
        let format = image.format();
        let stride = match format {
            PixelFormat::Rgba8 | PixelFormat::Rgba8Premultiplied => 1,
            // big endian samples, the high order byte comes first
            PixelFormat::Rgba16 | PixelFormat::Rgba16Premultiplied => 2,
            other => return Err(StegoError::FormatUnsupported(other)),
        };

        Ok(Self {
            row_stride: image.row_stride(),
            bytes_per_pixel: format.bytes_per_pixel(),
            stride,
        })
    }

    /// byte distance between two channels of the same pixel
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline(always)]
    pub fn offset(&self, pos: ChannelPosition) -> usize {
        pos.y as usize * self.row_stride
            + pos.x as usize * self.bytes_per_pixel
            + pos.channel as usize * self.stride
    }
}

/// read only bit access to the color channels of an image
pub struct ChannelReader<'i> {
    pix: &'i [u8],
    layout: ChannelLayout,
}

impl<'i> ChannelReader<'i> {
    pub fn new(image: &'i PixelImage) -> Result<Self> {
        Ok(Self {
            layout: ChannelLayout::of(image)?,
            pix: image.pix(),
        })
    }

    /// true if the least significant bit at `pos` is set
    #[inline]
    pub fn read(&self, pos: ChannelPosition) -> bool {
        self.pix[self.layout.offset(pos)] & 0x01 == 0x01
    }
}

/// Mutable bit access to the color channels of an image.
///
/// Only the least significant bit of the addressed byte is ever changed.
pub struct ChannelWriter<'i> {
    pix: &'i mut [u8],
    layout: ChannelLayout,
}

impl<'i> ChannelWriter<'i> {
    pub fn new(image: &'i mut PixelImage) -> Result<Self> {
        Ok(Self {
            layout: ChannelLayout::of(image)?,
            pix: image.pix_mut(),
        })
    }

    #[inline]
    pub fn read(&self, pos: ChannelPosition) -> bool {
        self.pix[self.layout.offset(pos)] & 0x01 == 0x01
    }

    #[inline]
    pub fn enable(&mut self, pos: ChannelPosition) {
        let p = self.layout.offset(pos);
        self.pix[p] |= 0x01;
    }

    #[inline]
    pub fn disable(&mut self, pos: ChannelPosition) {
        let p = self.layout.offset(pos);
        self.pix[p] &= 0xfe;
    }

    #[inline]
    pub fn set(&mut self, pos: ChannelPosition, bit: bool) {
        if bit {
            self.enable(pos)
        } else {
            self.disable(pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_read_the_least_significant_bit() {
        // (x, y) -> (i, i+1, i+2, i+3) with i = 4x + 20y
        let img = prepare_5x5_image();
        let reader = ChannelReader::new(&img).expect("rgba8 is supported");

        assert!(!reader.read((0, 0, 0).into()));
        assert!(reader.read((0, 0, 1).into()));
        assert!(!reader.read((0, 0, 2).into()));
        assert!(reader.read((0, 0, 3).into()));
        // 4 * 3 + 20 * 2 + 1 = 53
        assert!(reader.read((3, 2, 1).into()));
    }

    #[test]
    fn should_only_touch_the_addressed_bit() {
        let original = prepare_5x5_image();
        let mut img = original.clone();
        let pos = ChannelPosition::new(2, 3, 1);

        {
            let mut writer = ChannelWriter::new(&mut img).expect("rgba8 is supported");
            writer.enable(pos);
            assert!(writer.read(pos));
        }
        let offset = img.pix_offset(2, 3) + 1;
        // 4 * 2 + 20 * 3 + 1 = 69 already has its lsb set
        assert_eq!(img.pix()[offset], 69);
        assert_eq!(img, original);

        {
            let mut writer = ChannelWriter::new(&mut img).expect("rgba8 is supported");
            writer.disable(pos);
            assert!(!writer.read(pos));
        }
        assert_eq!(img.pix()[offset], 68);
        for (i, (given, expected)) in img.pix().iter().zip(original.pix()).enumerate() {
            if i != offset {
                assert_eq!(given, expected, "byte {i} must not change");
            }
        }
    }

    #[test]
    fn should_set_bits_for_every_channel_independently() {
        let mut img = PixelImage::new(2, 2, PixelFormat::Rgba8);
        let mut writer = ChannelWriter::new(&mut img).expect("rgba8 is supported");
        writer.set((1, 1, 0).into(), true);
        writer.set((1, 1, 2).into(), true);
        writer.set((1, 1, 2).into(), false);
        writer.set((0, 1, 1).into(), true);

        assert_eq!(
            img.pix(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn should_only_touch_the_high_order_byte_of_16_bit_samples() {
        let mut img = PixelImage::from_raw(1, 1, PixelFormat::Rgba16, vec![0xff; 8])
            .expect("8 bytes fit 1 rgba16 pixel");
        {
            let mut writer = ChannelWriter::new(&mut img).expect("rgba16 is supported");
            assert_eq!(writer.layout.stride(), 2);
            writer.disable((0, 0, 0).into());
            writer.disable((0, 0, 2).into());
        }
        assert_eq!(img.pix(), &[0xfe, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn should_accept_premultiplied_layouts() {
        let img = PixelImage::new(1, 1, PixelFormat::Rgba8Premultiplied);
        assert_eq!(ChannelLayout::of(&img).unwrap().stride(), 1);
        let img = PixelImage::new(1, 1, PixelFormat::Rgba16Premultiplied);
        assert_eq!(ChannelLayout::of(&img).unwrap().stride(), 2);
    }

    #[test]
    fn should_refuse_unsupported_formats() {
        for format in [
            PixelFormat::Luma8,
            PixelFormat::LumaA16,
            PixelFormat::Rgb8,
            PixelFormat::Rgba32F,
        ] {
            let mut img = PixelImage::new(2, 2, format);
            match ChannelReader::new(&img) {
                Err(StegoError::FormatUnsupported(f)) => assert_eq!(f, format),
                _ => panic!("{format:?} must not be readable"),
            }
            assert!(ChannelWriter::new(&mut img).is_err());
        }
    }
}
