mod channels;
mod pixel;

pub use channels::{ChannelLayout, ChannelPosition, ChannelReader, ChannelWriter};
pub use pixel::{PixelFormat, PixelImage};
