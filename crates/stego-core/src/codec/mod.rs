//! Hides a framed payload in the least significant bits of an image and gets it back.
//!
//! ## Example of usage
//! ```rust
//! use stego_core::codec::{decode, encode};
//! use stego_core::media::image::{PixelFormat, PixelImage};
//! use stego_core::scrambler::LinearScrambler;
//!
//! let mut image = PixelImage::new(10, 10, PixelFormat::Rgba8);
//! encode(b"hi", &mut image, &mut LinearScrambler::new()).expect("8 bytes fit into 300 bits");
//!
//! let payload = decode(&image, &mut LinearScrambler::new()).expect("a frame was hidden");
//! assert_eq!(payload, b"hi");
//! ```

mod frame;
mod stream;

use std::io::{Read, Write};

use log::debug;

pub use frame::{FrameHeader, END_MARKER, FRAME_HEADER_SIZE, START_MARKER};
pub use stream::{LsbReader, LsbWriter};

use crate::media::image::{ChannelReader, ChannelWriter, PixelImage};
use crate::scrambler::Scrambler;
use crate::{Result, StegoError};

/// Hides `payload` in `image`, in place.
///
/// Nothing is written unless the whole frame fits, the image is handed back
/// untouched together with [`StegoError::CapacityExceeded`] otherwise.
pub fn encode<'i, S: Scrambler + ?Sized>(
    payload: &[u8],
    image: &'i mut PixelImage,
    scrambler: &mut S,
) -> Result<&'i mut PixelImage> {
    let (width, height) = image.dimensions();
    {
        let channels = ChannelWriter::new(image)?;
        scrambler.init(width, height);

        let header = FrameHeader::for_payload(payload)?;
        let required = header.required_bits();
        let available = scrambler.cap();
        if required > available {
            return Err(StegoError::CapacityExceeded {
                required,
                available,
            });
        }
        debug!("hiding {} payload bytes, {required} of {available} bits used", payload.len());

        let mut writer = LsbWriter::new(channels, scrambler);
        writer.write_all(&header.to_bytes())?;
        writer.write_all(payload)?;
    }

    Ok(image)
}

/// Reads a frame back from `image`, the scrambler must walk the image the same way it did on [`encode`].
pub fn decode<S: Scrambler + ?Sized>(image: &PixelImage, scrambler: &mut S) -> Result<Vec<u8>> {
    let channels = ChannelReader::new(image)?;
    let (width, height) = image.dimensions();
    scrambler.init(width, height);

    let mut reader = LsbReader::new(channels, scrambler);
    let mut raw = [0; FRAME_HEADER_SIZE];
    reader
        .read_exact(&mut raw)
        .map_err(|_| StegoError::MalformedHeader)?;
    let header = FrameHeader::from_bytes(&raw)?;

    // a length the image could never hold means there is no frame
    let size = header.payload_len();
    if size.saturating_mul(8) > reader.capacity() {
        return Err(StegoError::MalformedHeader);
    }
    debug!("found frame header announcing {size} payload bytes");

    let mut payload = vec![0; size];
    reader
        .read_exact(&mut payload)
        .map_err(|_| StegoError::MalformedHeader)?;

    Ok(payload)
}

/// number of payload bytes that fit into an image of the given size
pub fn capacity_of<S: Scrambler + ?Sized>(width: u32, height: u32, scrambler: &mut S) -> usize {
    scrambler.init(width, height);
    (scrambler.cap() >> 3).saturating_sub(FRAME_HEADER_SIZE)
}
