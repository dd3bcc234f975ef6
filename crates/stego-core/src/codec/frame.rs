use byteorder::{ByteOrder, LittleEndian};

use crate::{Result, StegoError};

/// start of header
pub const START_MARKER: u8 = 0x01;
/// start of text, closes the header
pub const END_MARKER: u8 = 0x02;
/// bytes in a header
pub const FRAME_HEADER_SIZE: usize = 6;

/// The 6 byte header in front of every hidden payload.
///
/// | offset | size | meaning |
/// |---|---|---|
/// | 0 | 1 | start marker `0x01` |
/// | 1 | 4 | payload length, u32 little endian |
/// | 5 | 1 | end marker `0x02` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    payload_len: u32,
}

impl FrameHeader {
    pub fn new(payload_len: u32) -> Self {
        Self { payload_len }
    }

    /// header for the given payload, payloads beyond `u32::MAX` bytes cannot be framed
    pub fn for_payload(payload: &[u8]) -> Result<Self> {
        let payload_len =
            u32::try_from(payload.len()).map_err(|_| StegoError::CapacityExceeded {
                required: frame_bits(payload.len()),
                available: frame_bits(u32::MAX as usize),
            })?;

        Ok(Self::new(payload_len))
    }

    pub fn payload_len(&self) -> usize {
        self.payload_len as usize
    }

    /// bits needed to store header and payload
    pub fn required_bits(&self) -> usize {
        frame_bits(self.payload_len())
    }

    pub fn to_bytes(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut raw = [0; FRAME_HEADER_SIZE];
        raw[0] = START_MARKER;
        LittleEndian::write_u32(&mut raw[1..5], self.payload_len);
        raw[5] = END_MARKER;
        raw
    }

    /// fails with [`StegoError::MalformedHeader`] if one of the markers does not match
    pub fn from_bytes(raw: &[u8; FRAME_HEADER_SIZE]) -> Result<Self> {
        if raw[0] != START_MARKER || raw[5] != END_MARKER {
            return Err(StegoError::MalformedHeader);
        }

        Ok(Self::new(LittleEndian::read_u32(&raw[1..5])))
    }

    /// header followed by the payload, ready to be hidden
    pub fn frame(payload: &[u8]) -> Result<Vec<u8>> {
        let header = Self::for_payload(payload)?;
        let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len());
        frame.extend_from_slice(&header.to_bytes());
        frame.extend_from_slice(payload);

        Ok(frame)
    }
}

fn frame_bits(payload_len: usize) -> usize {
    FRAME_HEADER_SIZE
        .saturating_add(payload_len)
        .saturating_mul(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lay_out_markers_and_little_endian_length() {
        assert_eq!(
            FrameHeader::new(0x0403_0201).to_bytes(),
            [0x01, 0x01, 0x02, 0x03, 0x04, 0x02]
        );
        assert_eq!(FrameHeader::new(2).to_bytes(), [1, 2, 0, 0, 0, 2]);
    }

    #[test]
    fn should_read_a_valid_header() {
        let header = FrameHeader::from_bytes(&[1, 0x2c, 0x01, 0, 0, 2]).expect("valid header");
        assert_eq!(header.payload_len(), 300);
        assert_eq!(header.required_bits(), 306 * 8);
    }

    #[test]
    fn should_reject_wrong_markers() {
        for raw in [
            [0, 2, 0, 0, 0, 2],
            [1, 2, 0, 0, 0, 0],
            [2, 2, 0, 0, 0, 1],
            [0xff; FRAME_HEADER_SIZE],
        ] {
            match FrameHeader::from_bytes(&raw) {
                Err(StegoError::MalformedHeader) => (),
                other => panic!("{raw:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn should_put_the_header_in_front_of_the_payload() {
        let frame = FrameHeader::frame(b"hi").expect("small payloads fit");
        assert_eq!(frame, vec![1, 2, 0, 0, 0, 2, b'h', b'i']);

        let frame = FrameHeader::frame(&[]).expect("empty payloads fit");
        assert_eq!(frame, vec![1, 0, 0, 0, 0, 2]);
    }
}
