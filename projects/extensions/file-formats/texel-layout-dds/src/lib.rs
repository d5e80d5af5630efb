#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![no_std]
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod dds;
pub mod error;

pub use dds::{likely_dds, parse_dds, parse_dds_ignore_magic, ConversionFlags, DdsInfo};
pub use dds::{DdsLegacyFlags, DdsPixelFormat};
pub use error::{DdsError, DdsResult};
