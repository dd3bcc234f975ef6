//! # Stego Core API
//!
//! Hides an arbitrary byte payload in the least significant bits of the
//! color channels of a lossless image, and unveils it again.
//!
//! The payload is framed by a 6 byte header (start marker `0x01`, payload
//! length as u32 little endian, end marker `0x02`). Every bit of that frame
//! lands in the lowest bit of one R, G or B sample, the order of samples is
//! decided by a [`Scrambler`][scrambler].
//!
//! Nothing is encrypted, anybody walking the image in the same order gets
//! the payload back.
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use stego_core::codec;
//! use stego_core::media::image::{PixelFormat, PixelImage};
//! use stego_core::scrambler::LinearScrambler;
//!
//! let mut image = PixelImage::new(64, 64, PixelFormat::Rgba8);
//! codec::encode(b"Hello, World!", &mut image, &mut LinearScrambler::new())
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil data from an image file
//!
//! ```rust,no_run
//! let payload = stego_core::api::unveil::prepare()
//!     .from_secret_file("image-with-a-secret.png")
//!     .using_password(Some("Secret42"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```
//!
//! [scrambler]: ./scrambler/trait.Scrambler.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod codec;
pub mod error;
pub mod media;
pub mod result;
pub mod scrambler;

pub use crate::codec::{decode, encode};
pub use crate::error::StegoError;
pub use crate::media::image::{ChannelPosition, PixelFormat, PixelImage};
pub use crate::media::{CodecOptions, Media, Persist, Traversal};
pub use crate::result::Result;
pub use crate::scrambler::{KeyedScrambler, LinearScrambler, Scrambler, Scramblers};
