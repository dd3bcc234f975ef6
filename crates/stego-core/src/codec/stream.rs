use std::io::{Cursor, Read, Result, Write};

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, LittleEndian};

use crate::media::image::{ChannelReader, ChannelWriter};
use crate::scrambler::Scrambler;

/// Hides bytes one bit per color channel, least significant bit of a byte first.
///
/// Positions are drawn from an already initialized scrambler. Once the
/// scrambler is exhausted `write` returns 0, so `write_all` fails with
/// `WriteZero`.
pub struct LsbWriter<'s, 'i, S: Scrambler + ?Sized> {
    channels: ChannelWriter<'i>,
    scrambler: &'s mut S,
    drawn: usize,
}

impl<'s, 'i, S: Scrambler + ?Sized> LsbWriter<'s, 'i, S> {
    pub fn new(channels: ChannelWriter<'i>, scrambler: &'s mut S) -> Self {
        Self {
            channels,
            scrambler,
            drawn: 0,
        }
    }

    /// whole bytes that still fit
    pub fn remaining(&self) -> usize {
        self.scrambler.cap().saturating_sub(self.drawn) >> 3
    }
}

impl<S: Scrambler + ?Sized> Write for LsbWriter<'_, '_, S> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let n = buf.len().min(self.remaining());
        let mut bits = BitReader::endian(Cursor::new(&buf[..n]), LittleEndian);

        for _ in 0..n << 3 {
            let bit = bits.read_bit()?;
            let pos = self.scrambler.next();
            self.drawn += 1;
            self.channels.set(pos, bit);
        }

        Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Counterpart of [`LsbWriter`], collects one bit per color channel into bytes.
///
/// Reading past the scrambler capacity yields 0 bytes, `read_exact` then
/// fails with `UnexpectedEof`.
pub struct LsbReader<'s, 'i, S: Scrambler + ?Sized> {
    channels: ChannelReader<'i>,
    scrambler: &'s mut S,
    drawn: usize,
}

impl<'s, 'i, S: Scrambler + ?Sized> LsbReader<'s, 'i, S> {
    pub fn new(channels: ChannelReader<'i>, scrambler: &'s mut S) -> Self {
        Self {
            channels,
            scrambler,
            drawn: 0,
        }
    }

    /// whole bytes that can still be read
    pub fn remaining(&self) -> usize {
        self.scrambler.cap().saturating_sub(self.drawn) >> 3
    }

    /// capacity of the underlying scrambler in bits
    pub fn capacity(&self) -> usize {
        self.scrambler.cap()
    }
}

impl<S: Scrambler + ?Sized> Read for LsbReader<'_, '_, S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.remaining());
        let mut bits = BitWriter::endian(&mut buf[..n], LittleEndian);

        for _ in 0..n << 3 {
            let pos = self.scrambler.next();
            self.drawn += 1;
            bits.write_bit(self.channels.read(pos))?;
        }

        Ok(n)
    }
}
