#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod error;
pub mod format;
pub mod image;
pub mod info;
pub mod pitch;
pub mod scanlines;

/// C exports for format classification and pitch calculation.
#[cfg(feature = "c-exports")]
pub mod exports;

pub use error::{LayoutError, LayoutResult};
pub use format::{FormatId, ParseFormatError, UnknownFormatCode};
pub use image::{depth_slice_count, max_mip_count, ImageDescriptor, ImageType, MipLevel};
pub use info::{classify, FormatInfo};
pub use pitch::{pitch_for, PitchFlags, PitchLayout};
pub use scanlines::scanlines;
