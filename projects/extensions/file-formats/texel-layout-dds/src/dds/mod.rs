/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Mapping of pre-DX10 pixel formats onto [`FormatId`](texel_layout::FormatId)s.
pub mod legacy;

/// Read the image description out of a DDS header.
pub mod parse_dds;

pub use legacy::{ConversionFlags, DdsLegacyFlags, DdsPixelFormat};
pub use likely_dds::*;
pub use parse_dds::*;
