//! Traversal strategies deciding which color channel carries the next bit.
//!
//! A [`Scrambler`] never touches the image itself. After [`Scrambler::init`]
//! it must hand out the same sequence of [`ChannelPosition`]s for the same
//! image dimensions, every position at most once within the first
//! [`Scrambler::cap`] calls. `cap` returns 0 until `init` was called and must
//! never promise more unique positions than `next` can deliver.

use enum_dispatch::enum_dispatch;

mod keyed;
mod linear;

pub use keyed::KeyedScrambler;
pub use linear::LinearScrambler;

pub use crate::media::image::ChannelPosition;

/// Only R, G and B are used, alpha is never touched.
pub const COLOR_CHANNELS: usize = 3;

#[enum_dispatch]
pub trait Scrambler {
    /// resets the traversal for an image of the given size
    fn init(&mut self, width: u32, height: u32);

    /// the next position to read or write, calling it more than `cap()` times is not supported
    fn next(&mut self) -> ChannelPosition;

    /// number of unique positions available since the last `init`
    fn cap(&self) -> usize;
}

/// All scramblers shipped with this crate.
#[enum_dispatch(Scrambler)]
#[derive(Debug)]
pub enum Scramblers {
    LinearScrambler,
    KeyedScrambler,
}

impl Default for Scramblers {
    fn default() -> Self {
        LinearScrambler::new().into()
    }
}

/// Maps a linear index onto (x, y, channel), channel moves fastest, then x, then y.
#[inline]
pub(crate) fn position_of(i: usize, width: usize) -> ChannelPosition {
    ChannelPosition {
        x: ((i / COLOR_CHANNELS) % width) as u32,
        y: (i / (COLOR_CHANNELS * width)) as u32,
        channel: (i % COLOR_CHANNELS) as u8,
    }
}
